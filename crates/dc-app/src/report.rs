//! Report builders: engine outputs plus the qualitative ratings front ends
//! display next to them.

use dc_core::Real;
use dc_drivetrain::{
    DrivetrainInputs, DrivetrainOutputs, RatioCharacter, SpeedRating, TargetMatch, TorqueRating,
    evaluate, torque,
};
use serde::Serialize;
use tracing::debug;

use crate::error::AppResult;

/// Speed-side figures and rating.
#[derive(Debug, Clone, Serialize)]
pub struct SpeedReport {
    pub inputs: DrivetrainInputs,
    pub outputs: DrivetrainOutputs,
    pub speed_rating: SpeedRating,
}

/// Torque-side figures, rating, and the ramp check.
#[derive(Debug, Clone, Serialize)]
pub struct TorqueReport {
    pub inputs: DrivetrainInputs,
    pub outputs: DrivetrainOutputs,
    pub torque_rating: TorqueRating,
    pub can_climb_ramp: bool,
}

/// Ratio selection: ideal vs actual, and how close the result lands.
#[derive(Debug, Clone, Serialize)]
pub struct GearingReport {
    pub inputs: DrivetrainInputs,
    pub outputs: DrivetrainOutputs,
    pub ratio_character: RatioCharacter,
    pub target_match: TargetMatch,
    pub speed_delta_ft_per_s: Real,
}

/// Everything at once, for profile evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct DrivetrainReport {
    pub inputs: DrivetrainInputs,
    pub outputs: DrivetrainOutputs,
    pub speed_rating: SpeedRating,
    pub torque_rating: TorqueRating,
    pub ratio_character: RatioCharacter,
    pub target_match: TargetMatch,
    pub speed_delta_ft_per_s: Real,
    pub can_climb_ramp: bool,
}

/// Run the guard, evaluate once, and return the outputs.
fn checked_evaluate(inputs: &DrivetrainInputs) -> AppResult<DrivetrainOutputs> {
    inputs.ensure_evaluable()?;
    Ok(evaluate(inputs))
}

pub fn build_speed_report(inputs: &DrivetrainInputs) -> AppResult<SpeedReport> {
    let outputs = checked_evaluate(inputs)?;
    Ok(SpeedReport {
        inputs: *inputs,
        outputs,
        speed_rating: SpeedRating::from_speed(outputs.speed_ft_per_s),
    })
}

pub fn build_torque_report(inputs: &DrivetrainInputs) -> AppResult<TorqueReport> {
    let outputs = checked_evaluate(inputs)?;
    Ok(TorqueReport {
        inputs: *inputs,
        outputs,
        torque_rating: TorqueRating::from_total_torque(outputs.total_torque_nm),
        can_climb_ramp: torque::can_climb_ramp(outputs.pushing_force_lb, inputs.robot_weight_lb),
    })
}

pub fn build_gearing_report(inputs: &DrivetrainInputs) -> AppResult<GearingReport> {
    let outputs = checked_evaluate(inputs)?;
    Ok(GearingReport {
        inputs: *inputs,
        outputs,
        ratio_character: RatioCharacter::from_ratio(inputs.gear_ratio),
        target_match: TargetMatch::classify(outputs.speed_ft_per_s, inputs.desired_speed_ft_per_s),
        speed_delta_ft_per_s: outputs.speed_ft_per_s - inputs.desired_speed_ft_per_s,
    })
}

pub fn build_report(inputs: &DrivetrainInputs) -> AppResult<DrivetrainReport> {
    let outputs = checked_evaluate(inputs)?;
    debug!(
        speed_ft_per_s = outputs.speed_ft_per_s,
        total_torque_nm = outputs.total_torque_nm,
        "built drivetrain report"
    );
    Ok(DrivetrainReport {
        inputs: *inputs,
        outputs,
        speed_rating: SpeedRating::from_speed(outputs.speed_ft_per_s),
        torque_rating: TorqueRating::from_total_torque(outputs.total_torque_nm),
        ratio_character: RatioCharacter::from_ratio(inputs.gear_ratio),
        target_match: TargetMatch::classify(outputs.speed_ft_per_s, inputs.desired_speed_ft_per_s),
        speed_delta_ft_per_s: outputs.speed_ft_per_s - inputs.desired_speed_ft_per_s,
        can_climb_ramp: torque::can_climb_ramp(outputs.pushing_force_lb, inputs.robot_weight_lb),
    })
}
