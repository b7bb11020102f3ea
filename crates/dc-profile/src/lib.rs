//! dc-profile: canonical robot profile file format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_profile};

pub type ProfileResult<T> = Result<T, ProfileError>;

#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProfileResult<RobotProfile> {
    let content = std::fs::read_to_string(path)?;
    let profile: RobotProfile = serde_yaml::from_str(&content)?;
    validate_profile(&profile)?;
    Ok(profile)
}

pub fn save_yaml(path: &std::path::Path, profile: &RobotProfile) -> ProfileResult<()> {
    validate_profile(profile)?;
    let content = serde_yaml::to_string(profile)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProfileResult<RobotProfile> {
    let content = std::fs::read_to_string(path)?;
    let profile: RobotProfile = serde_json::from_str(&content)?;
    validate_profile(&profile)?;
    Ok(profile)
}

pub fn save_json(path: &std::path::Path, profile: &RobotProfile) -> ProfileResult<()> {
    validate_profile(profile)?;
    let content = serde_json::to_string_pretty(profile)?;
    std::fs::write(path, content)?;
    Ok(())
}
