//! Whole-drivetrain evaluation: one inputs record in, one outputs record out.

use dc_core::Real;
use dc_core::conversions::{ft_per_s_to_m_per_s, ft_per_s_to_mph};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::gearing::ideal_gear_ratio;
use crate::speed::{
    FRC_FIELD_LENGTH_FT, FTC_FIELD_LENGTH_FT, linear_speed_ft_per_s, speed_in_per_min,
    time_to_cross_s, wheel_circumference_in, wheel_rpm,
};
use crate::torque::{
    DRIVE_EFFICIENCY, acceleration_ft_per_s2, pushing_force_lb, time_to_distance_s,
    total_torque_nm, wheel_radius_ft, wheel_torque_nm,
};

/// Distance used for the standing-start sprint figure, feet.
pub const SPRINT_DISTANCE_FT: Real = 5.0;

/// Caller-supplied drivetrain description.
///
/// Values are taken as-is; [`evaluate`] neither clamps nor validates. See
/// [`DrivetrainInputs::ensure_evaluable`] for the opt-in guard against zero
/// denominators and non-finite values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrivetrainInputs {
    /// Motor free speed, RPM.
    pub motor_rpm: Real,
    /// Wheel diameter, inches.
    pub wheel_diameter_in: Real,
    /// Reduction from motor to wheel, driven over driving.
    pub gear_ratio: Real,
    /// Number of drive motors.
    pub num_motors: u32,
    /// Robot weight, pounds.
    pub robot_weight_lb: Real,
    /// Motor stall torque, newton-metres.
    pub motor_torque_nm: Real,
    /// Target ground speed, feet per second.
    pub desired_speed_ft_per_s: Real,
}

impl Default for DrivetrainInputs {
    fn default() -> Self {
        Self {
            motor_rpm: 6000.0,
            wheel_diameter_in: 4.0,
            gear_ratio: 1.0,
            num_motors: 4,
            robot_weight_lb: 40.0,
            motor_torque_nm: 3.2,
            desired_speed_ft_per_s: 5.0,
        }
    }
}

impl DrivetrainInputs {
    /// Reject inputs that would divide by zero or already carry non-finite
    /// values.
    ///
    /// [`evaluate`] itself is total and propagates `Infinity`/`NaN`; front
    /// ends call this first to fail with a structured error instead of
    /// rendering `inf` rows.
    pub fn ensure_evaluable(&self) -> EngineResult<()> {
        for (value, what) in [
            (self.motor_rpm, "motor_rpm"),
            (self.wheel_diameter_in, "wheel_diameter_in"),
            (self.gear_ratio, "gear_ratio"),
            (self.robot_weight_lb, "robot_weight_lb"),
            (self.motor_torque_nm, "motor_torque_nm"),
            (self.desired_speed_ft_per_s, "desired_speed_ft_per_s"),
        ] {
            if !value.is_finite() {
                return Err(EngineError::NonFinite { what, value });
            }
        }

        for (value, what) in [
            (self.gear_ratio, "gear_ratio"),
            (self.wheel_diameter_in, "wheel_diameter_in"),
            (self.robot_weight_lb, "robot_weight_lb"),
            (self.desired_speed_ft_per_s, "desired_speed_ft_per_s"),
        ] {
            if value == 0.0 {
                return Err(EngineError::DivisionUndefined { what });
            }
        }

        Ok(())
    }
}

/// Derived performance figures. Pure function of [`DrivetrainInputs`] with
/// no cross-call state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrivetrainOutputs {
    pub wheel_circumference_in: Real,
    pub wheel_rpm: Real,
    pub speed_in_per_min: Real,
    pub speed_ft_per_s: Real,
    pub speed_m_per_s: Real,
    pub speed_mph: Real,
    pub ideal_gear_ratio: Real,
    pub wheel_torque_nm: Real,
    pub total_torque_nm: Real,
    pub pushing_force_lb: Real,
    pub acceleration_ft_per_s2: Real,
    pub time_to_cross_ftc_s: Real,
    pub time_to_cross_frc_s: Real,
    pub sprint_5ft_s: Real,
}

/// Evaluate the whole drivetrain in one pass.
pub fn evaluate(inputs: &DrivetrainInputs) -> DrivetrainOutputs {
    let circumference_in = wheel_circumference_in(inputs.wheel_diameter_in);
    let w_rpm = wheel_rpm(inputs.motor_rpm, inputs.gear_ratio);
    let speed_ft_per_s = linear_speed_ft_per_s(w_rpm, circumference_in);

    let per_wheel_nm = wheel_torque_nm(inputs.motor_torque_nm, inputs.gear_ratio, DRIVE_EFFICIENCY);
    let total_nm = total_torque_nm(per_wheel_nm, inputs.num_motors);
    let force_lb = pushing_force_lb(total_nm, wheel_radius_ft(inputs.wheel_diameter_in));
    let accel = acceleration_ft_per_s2(force_lb, inputs.robot_weight_lb);

    DrivetrainOutputs {
        wheel_circumference_in: circumference_in,
        wheel_rpm: w_rpm,
        speed_in_per_min: speed_in_per_min(w_rpm, circumference_in),
        speed_ft_per_s,
        speed_m_per_s: ft_per_s_to_m_per_s(speed_ft_per_s),
        speed_mph: ft_per_s_to_mph(speed_ft_per_s),
        ideal_gear_ratio: ideal_gear_ratio(
            inputs.motor_rpm,
            inputs.desired_speed_ft_per_s,
            inputs.wheel_diameter_in,
        ),
        wheel_torque_nm: per_wheel_nm,
        total_torque_nm: total_nm,
        pushing_force_lb: force_lb,
        acceleration_ft_per_s2: accel,
        time_to_cross_ftc_s: time_to_cross_s(FTC_FIELD_LENGTH_FT, speed_ft_per_s),
        time_to_cross_frc_s: time_to_cross_s(FRC_FIELD_LENGTH_FT, speed_ft_per_s),
        sprint_5ft_s: time_to_distance_s(SPRINT_DISTANCE_FT, accel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_inputs_worked_example() {
        let outputs = evaluate(&DrivetrainInputs::default());

        assert_eq!(outputs.wheel_rpm, 6000.0);
        assert!((outputs.wheel_circumference_in - 12.566).abs() < 1e-3);
        assert!((outputs.speed_ft_per_s - 10.47).abs() < 5e-3);
        assert!((outputs.speed_m_per_s - outputs.speed_ft_per_s * 0.3048).abs() < 1e-9);
        assert!((outputs.speed_mph - outputs.speed_ft_per_s * 0.681818).abs() < 1e-4);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let inputs = DrivetrainInputs {
            gear_ratio: 2.5,
            ..Default::default()
        };
        assert_eq!(evaluate(&inputs), evaluate(&inputs));
    }

    #[test]
    fn zero_ratio_flows_through_as_infinity() {
        let inputs = DrivetrainInputs {
            gear_ratio: 0.0,
            ..Default::default()
        };
        let outputs = evaluate(&inputs);
        assert!(outputs.wheel_rpm.is_infinite());
        assert!(outputs.speed_ft_per_s.is_infinite());
    }

    #[test]
    fn guard_rejects_zero_ratio() {
        let inputs = DrivetrainInputs {
            gear_ratio: 0.0,
            ..Default::default()
        };
        assert_eq!(
            inputs.ensure_evaluable(),
            Err(EngineError::DivisionUndefined { what: "gear_ratio" })
        );
    }

    #[test]
    fn guard_rejects_non_finite_weight() {
        let inputs = DrivetrainInputs {
            robot_weight_lb: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            inputs.ensure_evaluable(),
            Err(EngineError::NonFinite {
                what: "robot_weight_lb",
                ..
            })
        ));
    }

    #[test]
    fn guard_accepts_defaults() {
        assert!(DrivetrainInputs::default().ensure_evaluable().is_ok());
    }

    proptest! {
        // Raising the reduction trades speed for torque, strictly.
        #[test]
        fn higher_reduction_trades_speed_for_torque(
            ratio in 0.2_f64..10.0,
            bump in 0.1_f64..5.0,
        ) {
            let lower = DrivetrainInputs { gear_ratio: ratio, ..Default::default() };
            let higher = DrivetrainInputs { gear_ratio: ratio + bump, ..Default::default() };

            let (a, b) = (evaluate(&lower), evaluate(&higher));
            prop_assert!(b.wheel_rpm < a.wheel_rpm);
            prop_assert!(b.speed_ft_per_s < a.speed_ft_per_s);
            prop_assert!(b.wheel_torque_nm > a.wheel_torque_nm);
        }
    }
}
