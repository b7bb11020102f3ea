//! Error types for the opt-in evaluation guard.

use thiserror::Error;

/// Errors reported by [`crate::DrivetrainInputs::ensure_evaluable`].
///
/// The formula functions themselves are total over `f64` and never return
/// these; callers that prefer a hard failure over `Infinity`/`NaN` run the
/// guard first.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    #[error("Division undefined: {what} is zero")]
    DivisionUndefined { what: &'static str },

    #[error("Non-finite input: {what} = {value}")]
    NonFinite { what: &'static str, value: f64 },
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EngineError::DivisionUndefined { what: "gear_ratio" };
        assert!(err.to_string().contains("gear_ratio"));
    }
}
