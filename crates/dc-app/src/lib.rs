//! Shared application service layer for drivecalc.
//!
//! Centralizes the logic front ends need around the formula engine: profile
//! compilation, report building, and display formatting.

pub mod compile;
pub mod error;
pub mod format;
pub mod report;

// Re-export key types for convenience
pub use compile::{MotorFigures, compile_profile, resolve_motor};
pub use error::{AppError, AppResult};
pub use format::{format_number, format_ratio, format_seconds};
pub use report::{
    DrivetrainReport, GearingReport, SpeedReport, TorqueReport, build_gearing_report,
    build_report, build_speed_report, build_torque_report,
};
