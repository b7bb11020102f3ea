//! Profile validation logic.

use crate::schema::{GearingDef, MotorDef, RobotProfile};

/// Newest profile format this build understands.
pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Empty gear train")]
    EmptyGearTrain,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_profile(profile: &RobotProfile) -> Result<(), ValidationError> {
    if profile.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: profile.version,
        });
    }

    let dt = &profile.drivetrain;

    require_positive("drivetrain.wheel_diameter_in", dt.wheel_diameter_in)?;
    require_positive("drivetrain.robot_weight_lb", dt.robot_weight_lb)?;

    if dt.num_motors == 0 {
        return Err(invalid(
            "drivetrain.num_motors",
            "0",
            "at least one drive motor",
        ));
    }
    if !(dt.desired_speed_ft_per_s > 0.0) {
        return Err(invalid(
            "drivetrain.desired_speed_ft_per_s",
            &dt.desired_speed_ft_per_s.to_string(),
            "must be positive",
        ));
    }

    match &dt.motor {
        MotorDef::Preset { name } => {
            if name.trim().is_empty() {
                return Err(invalid("drivetrain.motor.name", name, "must not be empty"));
            }
        }
        MotorDef::Custom {
            free_speed_rpm,
            stall_torque_nm,
        } => {
            require_positive("drivetrain.motor.free_speed_rpm", *free_speed_rpm)?;
            if !(*stall_torque_nm >= 0.0) {
                return Err(invalid(
                    "drivetrain.motor.stall_torque_nm",
                    &stall_torque_nm.to_string(),
                    "must be zero or positive",
                ));
            }
        }
    }

    match &dt.gearing {
        GearingDef::Ratio { ratio } => require_positive("drivetrain.gearing.ratio", *ratio)?,
        GearingDef::Stages { stages } => {
            if stages.is_empty() {
                return Err(ValidationError::EmptyGearTrain);
            }
            for (i, stage) in stages.iter().enumerate() {
                if stage.driving_teeth == 0 || stage.driven_teeth == 0 {
                    return Err(invalid(
                        &format!("drivetrain.gearing.stages[{i}]"),
                        &format!("{}:{}", stage.driving_teeth, stage.driven_teeth),
                        "tooth counts must be nonzero",
                    ));
                }
            }
        }
    }

    Ok(())
}

fn require_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    // NaN fails this comparison too
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, &value.to_string(), "must be positive and finite"))
    }
}

fn invalid(field: &str, value: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DrivetrainDef, GearStageDef};

    fn sample_profile() -> RobotProfile {
        RobotProfile {
            version: 1,
            name: "Test Bot".to_string(),
            drivetrain: DrivetrainDef {
                motor: MotorDef::Preset {
                    name: "REV HD Hex".to_string(),
                },
                gearing: GearingDef::Ratio { ratio: 2.0 },
                wheel_diameter_in: 4.0,
                num_motors: 4,
                robot_weight_lb: 40.0,
                desired_speed_ft_per_s: 5.0,
            },
        }
    }

    #[test]
    fn sample_is_valid() {
        validate_profile(&sample_profile()).unwrap();
    }

    #[test]
    fn rejects_future_version() {
        let mut profile = sample_profile();
        profile.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_profile(&profile),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn rejects_zero_wheel() {
        let mut profile = sample_profile();
        profile.drivetrain.wheel_diameter_in = 0.0;
        assert!(validate_profile(&profile).is_err());
    }

    #[test]
    fn rejects_empty_gear_train() {
        let mut profile = sample_profile();
        profile.drivetrain.gearing = GearingDef::Stages { stages: vec![] };
        assert!(matches!(
            validate_profile(&profile),
            Err(ValidationError::EmptyGearTrain)
        ));
    }

    #[test]
    fn rejects_zero_tooth_stage() {
        let mut profile = sample_profile();
        profile.drivetrain.gearing = GearingDef::Stages {
            stages: vec![GearStageDef {
                driving_teeth: 0,
                driven_teeth: 24,
            }],
        };
        assert!(validate_profile(&profile).is_err());
    }

    #[test]
    fn rejects_nan_weight() {
        let mut profile = sample_profile();
        profile.drivetrain.robot_weight_lb = f64::NAN;
        assert!(validate_profile(&profile).is_err());
    }
}
