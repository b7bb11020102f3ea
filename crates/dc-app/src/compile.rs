//! Compile profile documents into engine input records.

use dc_drivetrain::{DrivetrainInputs, GearStage, find_motor, total_ratio};
use dc_profile::schema::{GearingDef, MotorDef, RobotProfile};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Resolved motor figures after preset lookup.
#[derive(Debug, Clone, Copy)]
pub struct MotorFigures {
    pub free_speed_rpm: f64,
    pub stall_torque_nm: f64,
}

/// Turn a validated profile into the engine's input record.
///
/// Presets are resolved against the motor catalog; gear trains given as
/// tooth counts are folded into a single reduction.
pub fn compile_profile(profile: &RobotProfile) -> AppResult<DrivetrainInputs> {
    dc_profile::validate_profile(profile)?;

    let dt = &profile.drivetrain;
    let motor = resolve_motor(&dt.motor)?;

    let gear_ratio = match &dt.gearing {
        GearingDef::Ratio { ratio } => *ratio,
        GearingDef::Stages { stages } => {
            let stages: Vec<GearStage> = stages
                .iter()
                .map(|s| GearStage::new(s.driving_teeth, s.driven_teeth))
                .collect();
            total_ratio(&stages)
        }
    };

    let inputs = DrivetrainInputs {
        motor_rpm: motor.free_speed_rpm,
        wheel_diameter_in: dt.wheel_diameter_in,
        gear_ratio,
        num_motors: dt.num_motors,
        robot_weight_lb: dt.robot_weight_lb,
        motor_torque_nm: motor.stall_torque_nm,
        desired_speed_ft_per_s: dt.desired_speed_ft_per_s,
    };
    inputs.ensure_evaluable()?;

    debug!(profile = %profile.name, gear_ratio, "compiled drivetrain profile");
    Ok(inputs)
}

/// Resolve a motor definition to concrete figures.
pub fn resolve_motor(def: &MotorDef) -> AppResult<MotorFigures> {
    match def {
        MotorDef::Preset { name } => {
            let spec = find_motor(name).ok_or_else(|| AppError::UnknownMotor(name.clone()))?;
            let stall_torque_nm = spec
                .stall_torque_nm
                .ok_or_else(|| AppError::MotorTorqueUnknown(name.clone()))?;
            Ok(MotorFigures {
                free_speed_rpm: spec.free_speed_rpm,
                stall_torque_nm,
            })
        }
        MotorDef::Custom {
            free_speed_rpm,
            stall_torque_nm,
        } => Ok(MotorFigures {
            free_speed_rpm: *free_speed_rpm,
            stall_torque_nm: *stall_torque_nm,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dc_profile::schema::{DrivetrainDef, GearStageDef};

    fn staged_profile() -> RobotProfile {
        RobotProfile {
            version: 1,
            name: "Staged Bot".to_string(),
            drivetrain: DrivetrainDef {
                motor: MotorDef::Preset {
                    name: "REV HD Hex".to_string(),
                },
                gearing: GearingDef::Stages {
                    stages: vec![
                        GearStageDef {
                            driving_teeth: 12,
                            driven_teeth: 24,
                        },
                        GearStageDef {
                            driving_teeth: 16,
                            driven_teeth: 48,
                        },
                    ],
                },
                wheel_diameter_in: 4.0,
                num_motors: 4,
                robot_weight_lb: 40.0,
                desired_speed_ft_per_s: 5.0,
            },
        }
    }

    #[test]
    fn preset_and_stages_resolve() {
        let inputs = compile_profile(&staged_profile()).unwrap();
        assert_eq!(inputs.motor_rpm, 6000.0);
        assert_eq!(inputs.motor_torque_nm, 3.2);
        assert_eq!(inputs.gear_ratio, 6.0);
    }

    #[test]
    fn unknown_preset_errors() {
        let mut profile = staged_profile();
        profile.drivetrain.motor = MotorDef::Preset {
            name: "CIM".to_string(),
        };
        assert!(matches!(
            compile_profile(&profile),
            Err(AppError::UnknownMotor(_))
        ));
    }

    #[test]
    fn preset_without_torque_errors() {
        let mut profile = staged_profile();
        profile.drivetrain.motor = MotorDef::Preset {
            name: "goBILDA 5202 (1150 RPM)".to_string(),
        };
        assert!(matches!(
            compile_profile(&profile),
            Err(AppError::MotorTorqueUnknown(_))
        ));
    }

    #[test]
    fn custom_motor_passes_through() {
        let figures = resolve_motor(&MotorDef::Custom {
            free_speed_rpm: 435.0,
            stall_torque_nm: 2.6,
        })
        .unwrap();
        assert_eq!(figures.free_speed_rpm, 435.0);
        assert_eq!(figures.stall_torque_nm, 2.6);
    }
}
