//! Wheel torque, pushing force, and acceleration model.
//!
//! Follows the rule-of-thumb drivetrain formulas used around FTC/FRC: torque
//! figures stay in newton-metres while lever arms, weights, and forces are
//! quoted in imperial units.

use dc_core::Real;
use dc_core::conversions::inches_to_feet;

/// Geartrain efficiency applied to torque multiplication.
pub const DRIVE_EFFICIENCY: Real = 0.9;

/// Force-to-weight factor needed to climb a 30 degree ramp.
pub const RAMP_FORCE_FACTOR: Real = 1.5;

/// Torque at the wheel after the reduction and geartrain losses.
#[inline]
pub fn wheel_torque_nm(motor_torque_nm: Real, gear_ratio: Real, efficiency: Real) -> Real {
    motor_torque_nm * gear_ratio * efficiency
}

/// Combined torque across all drive motors.
#[inline]
pub fn total_torque_nm(wheel_torque_nm: Real, num_motors: u32) -> Real {
    wheel_torque_nm * num_motors as Real
}

/// Wheel radius in feet for a diameter in inches.
#[inline]
pub fn wheel_radius_ft(wheel_diameter_in: Real) -> Real {
    inches_to_feet(wheel_diameter_in / 2.0)
}

/// Pushing force at the contact patch, pounds.
#[inline]
pub fn pushing_force_lb(total_torque_nm: Real, wheel_radius_ft: Real) -> Real {
    total_torque_nm / wheel_radius_ft
}

/// Acceleration from F = ma, ft/s².
#[inline]
pub fn acceleration_ft_per_s2(force_lb: Real, weight_lb: Real) -> Real {
    force_lb / weight_lb
}

/// Time to cover `distance_ft` from a standstill at constant acceleration.
#[inline]
pub fn time_to_distance_s(distance_ft: Real, accel_ft_per_s2: Real) -> Real {
    (2.0 * distance_ft / accel_ft_per_s2).sqrt()
}

/// Whether the pushing force clears the 30 degree ramp threshold.
#[inline]
pub fn can_climb_ramp(force_lb: Real, weight_lb: Real) -> bool {
    force_lb > weight_lb * RAMP_FORCE_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn torque_chain_worked_example() {
        // 3.2 Nm motor, 2:1 reduction, four motors, 4 in wheels, 40 lb robot
        let per_wheel = wheel_torque_nm(3.2, 2.0, DRIVE_EFFICIENCY);
        assert!((per_wheel - 5.76).abs() < 1e-12);

        let total = total_torque_nm(per_wheel, 4);
        assert!((total - 23.04).abs() < 1e-12);

        let radius = wheel_radius_ft(4.0);
        assert!((radius - 1.0 / 6.0).abs() < 1e-12);

        let force = pushing_force_lb(total, radius);
        assert!((force - 138.24).abs() < 1e-9);

        let accel = acceleration_ft_per_s2(force, 40.0);
        assert!((accel - 3.456).abs() < 1e-9);
    }

    #[test]
    fn sprint_time_matches_kinematics() {
        // sqrt(2 * 5 / a), the 0-to-5-feet figure
        let t = time_to_distance_s(5.0, 3.456);
        assert!((t - (10.0_f64 / 3.456).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn ramp_threshold() {
        assert!(can_climb_ramp(138.24, 40.0));
        assert!(!can_climb_ramp(60.0, 40.0)); // exactly 1.5x is not enough
        assert!(!can_climb_ramp(30.0, 40.0));
    }

    #[test]
    fn zero_weight_propagates_infinity() {
        assert!(acceleration_ft_per_s2(100.0, 0.0).is_infinite());
    }
}
