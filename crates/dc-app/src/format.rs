//! Display formatting for report values.
//!
//! Non-finite values render as-is ("inf", "NaN") rather than being masked.

use dc_core::Real;

/// Fixed-decimal formatting.
pub fn format_number(value: Real, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Ratio in the conventional "n:1" notation.
pub fn format_ratio(ratio: Real) -> String {
    format!("{}:1", format_number(ratio, 2))
}

/// Duration in seconds with the trailing unit.
pub fn format_seconds(value: Real) -> String {
    format!("{}s", format_number(value, 2))
}
