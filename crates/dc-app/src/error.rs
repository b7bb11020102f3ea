//! Error types for the dc-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Profile error: {0}")]
    Profile(String),

    #[error("Profile validation failed: {0}")]
    Validation(String),

    #[error("Unknown motor preset: {0}")]
    UnknownMotor(String),

    #[error("No published stall torque for motor preset: {0}")]
    MotorTorqueUnknown(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dc-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<dc_profile::ProfileError> for AppError {
    fn from(err: dc_profile::ProfileError) -> Self {
        AppError::Profile(err.to_string())
    }
}

impl From<dc_profile::ValidationError> for AppError {
    fn from(err: dc_profile::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<dc_drivetrain::EngineError> for AppError {
    fn from(err: dc_drivetrain::EngineError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
