//! dc-drivetrain: drivetrain formula library for competition robots.
//!
//! Closed-form performance models for FTC/FRC drive bases:
//! - linear speed from motor RPM, gearing, and wheel size
//! - wheel torque, pushing force, and acceleration
//! - gear-ratio selection for a target speed
//! - qualitative ratings bucketed from the computed figures
//!
//! Every operation is a pure, synchronous function of its arguments; a full
//! evaluation is one call to [`evaluate`] and carries no state between calls.
//!
//! # Example
//!
//! ```
//! use dc_drivetrain::{evaluate, DrivetrainInputs};
//!
//! let inputs = DrivetrainInputs {
//!     gear_ratio: 2.0,
//!     ..Default::default()
//! };
//! let outputs = evaluate(&inputs);
//! assert!(outputs.wheel_rpm < inputs.motor_rpm);
//! assert!(outputs.wheel_torque_nm > inputs.motor_torque_nm);
//! ```

pub mod drivetrain;
pub mod error;
pub mod gearing;
pub mod motors;
pub mod rating;
pub mod speed;
pub mod torque;

// Re-exports
pub use drivetrain::{DrivetrainInputs, DrivetrainOutputs, evaluate};
pub use error::{EngineError, EngineResult};
pub use gearing::{GearStage, ideal_gear_ratio, total_ratio};
pub use motors::{MOTOR_CATALOG, MotorSpec, find_motor};
pub use rating::{RatioCharacter, SpeedRating, TargetMatch, TorqueRating};
