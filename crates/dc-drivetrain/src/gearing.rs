//! Gear-ratio selection and tooth-count arithmetic.

use dc_core::Real;
use dc_core::constants::{INCHES_PER_FOOT, SECONDS_PER_MINUTE};
use serde::{Deserialize, Serialize};

use crate::speed::wheel_circumference_in;

/// Reduction required to hit a target speed with the given motor and wheel.
///
/// This is the speed formula run backwards: the motor RPM divided by the
/// wheel RPM that the target speed demands. Feeding the result back through
/// [`crate::speed::linear_speed_ft_per_s`] reproduces the target.
pub fn ideal_gear_ratio(
    motor_rpm: Real,
    desired_speed_ft_per_s: Real,
    wheel_diameter_in: Real,
) -> Real {
    let circumference_in = wheel_circumference_in(wheel_diameter_in);
    let required_wheel_rpm =
        desired_speed_ft_per_s * INCHES_PER_FOOT * SECONDS_PER_MINUTE / circumference_in;
    motor_rpm / required_wheel_rpm
}

/// One meshed gear pair.
///
/// Ratio is driven over driving teeth: a 12-tooth pinion into a 24-tooth
/// gear is a 2:1 reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearStage {
    pub driving_teeth: u32,
    pub driven_teeth: u32,
}

impl GearStage {
    pub fn new(driving_teeth: u32, driven_teeth: u32) -> Self {
        Self {
            driving_teeth,
            driven_teeth,
        }
    }

    /// Stage reduction, driven / driving.
    pub fn ratio(&self) -> Real {
        self.driven_teeth as Real / self.driving_teeth as Real
    }
}

/// Fold a gear train into one reduction: stage ratios multiply.
pub fn total_ratio(stages: &[GearStage]) -> Real {
    stages.iter().map(GearStage::ratio).product()
}
