//! Robot profile schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RobotProfile {
    pub version: u32,
    pub name: String,
    pub drivetrain: DrivetrainDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrivetrainDef {
    pub motor: MotorDef,
    pub gearing: GearingDef,
    pub wheel_diameter_in: f64,
    #[serde(default = "default_num_motors")]
    pub num_motors: u32,
    pub robot_weight_lb: f64,
    #[serde(default = "default_desired_speed")]
    pub desired_speed_ft_per_s: f64,
}

fn default_num_motors() -> u32 {
    4
}

fn default_desired_speed() -> f64 {
    5.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum MotorDef {
    /// Catalog preset, resolved by name at compile time.
    Preset { name: String },
    /// Explicit motor figures.
    Custom {
        free_speed_rpm: f64,
        stall_torque_nm: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum GearingDef {
    /// Single overall reduction.
    Ratio { ratio: f64 },
    /// Gear train given as tooth counts; stage ratios multiply.
    Stages { stages: Vec<GearStageDef> },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GearStageDef {
    pub driving_teeth: u32,
    pub driven_teeth: u32,
}
