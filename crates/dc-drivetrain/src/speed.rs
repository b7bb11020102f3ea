//! Linear speed model: motor RPM through the reduction to ground speed.

use dc_core::Real;
use dc_core::constants::{INCHES_PER_FOOT, SECONDS_PER_MINUTE};

/// FTC field side length, feet.
pub const FTC_FIELD_LENGTH_FT: Real = 12.0;

/// FRC field length, feet.
pub const FRC_FIELD_LENGTH_FT: Real = 54.0;

/// Wheel circumference in inches for a diameter in inches.
#[inline]
pub fn wheel_circumference_in(diameter_in: Real) -> Real {
    core::f64::consts::PI * diameter_in
}

/// Wheel RPM after the reduction.
///
/// Total over `f64`: a zero ratio yields `Infinity`. Callers that want a
/// hard failure instead go through
/// [`crate::DrivetrainInputs::ensure_evaluable`].
#[inline]
pub fn wheel_rpm(motor_rpm: Real, gear_ratio: Real) -> Real {
    motor_rpm / gear_ratio
}

/// Ground speed in inches per minute.
#[inline]
pub fn speed_in_per_min(wheel_rpm: Real, circumference_in: Real) -> Real {
    wheel_rpm * circumference_in
}

/// Ground speed in feet per second.
#[inline]
pub fn linear_speed_ft_per_s(wheel_rpm: Real, circumference_in: Real) -> Real {
    wheel_rpm * circumference_in / INCHES_PER_FOOT / SECONDS_PER_MINUTE
}

/// Time to cover `distance_ft` at constant speed, seconds.
#[inline]
pub fn time_to_cross_s(distance_ft: Real, speed_ft_per_s: Real) -> Real {
    distance_ft / speed_ft_per_s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_inch_wheel_direct_drive() {
        let circ = wheel_circumference_in(4.0);
        let w_rpm = wheel_rpm(6000.0, 1.0);
        let speed = linear_speed_ft_per_s(w_rpm, circ);

        assert_eq!(w_rpm, 6000.0);
        assert!((circ - 12.566).abs() < 1e-3);
        assert!((speed - 10.47).abs() < 5e-3);
    }

    #[test]
    fn reduction_halves_speed() {
        let circ = wheel_circumference_in(4.0);
        let direct = linear_speed_ft_per_s(wheel_rpm(6000.0, 1.0), circ);
        let geared = linear_speed_ft_per_s(wheel_rpm(6000.0, 2.0), circ);
        assert!((geared - direct / 2.0).abs() < 1e-12);
    }

    #[test]
    fn zero_ratio_propagates_infinity() {
        assert!(wheel_rpm(6000.0, 0.0).is_infinite());
        assert!(linear_speed_ft_per_s(wheel_rpm(6000.0, 0.0), 12.0).is_infinite());
    }

    #[test]
    fn field_crossing_times() {
        assert!((time_to_cross_s(FTC_FIELD_LENGTH_FT, 6.0) - 2.0).abs() < 1e-12);
        assert!((time_to_cross_s(FRC_FIELD_LENGTH_FT, 6.0) - 9.0).abs() < 1e-12);
    }

    #[test]
    fn in_per_min_matches_ft_per_s() {
        let circ = wheel_circumference_in(4.0);
        let w_rpm = wheel_rpm(6000.0, 1.0);
        let in_min = speed_in_per_min(w_rpm, circ);
        let ft_s = linear_speed_ft_per_s(w_rpm, circ);
        assert!((in_min / 12.0 / 60.0 - ft_s).abs() < 1e-9);
    }
}
