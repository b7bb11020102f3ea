//! dc-core: stable foundation for drivecalc.
//!
//! Contains:
//! - units (uom quantity types + constructors + imperial/metric conversions)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{DcError, DcResult};
pub use numeric::*;
pub use units::*;
