//! Integration tests exercising the formula engine end to end.

use dc_drivetrain::{
    DrivetrainInputs, GearStage, RatioCharacter, SpeedRating, TargetMatch, TorqueRating, evaluate,
    ideal_gear_ratio, total_ratio,
};

#[test]
fn baseline_ftc_bot() {
    // REV HD Hex, 2:1 reduction, 4 in wheels, 40 lb robot
    let inputs = DrivetrainInputs {
        gear_ratio: 2.0,
        ..Default::default()
    };
    let outputs = evaluate(&inputs);

    assert_eq!(outputs.wheel_rpm, 3000.0);
    assert!((outputs.speed_ft_per_s - 5.236).abs() < 1e-3);
    assert!((outputs.total_torque_nm - 23.04).abs() < 1e-9);
    assert!((outputs.pushing_force_lb - 138.24).abs() < 1e-9);
    assert!((outputs.acceleration_ft_per_s2 - 3.456).abs() < 1e-9);

    // Figures should be sane for a real drive base
    assert!(outputs.time_to_cross_ftc_s > 0.0);
    assert!(outputs.time_to_cross_frc_s > outputs.time_to_cross_ftc_s);
    assert!(outputs.sprint_5ft_s.is_finite());
}

#[test]
fn ratings_line_up_with_figures() {
    let inputs = DrivetrainInputs {
        gear_ratio: 2.0,
        ..Default::default()
    };
    let outputs = evaluate(&inputs);

    assert_eq!(RatioCharacter::from_ratio(inputs.gear_ratio), RatioCharacter::Balanced);
    assert_eq!(SpeedRating::from_speed(outputs.speed_ft_per_s), SpeedRating::Moderate);
    assert_eq!(
        TorqueRating::from_total_torque(outputs.total_torque_nm),
        TorqueRating::High
    );
    assert_eq!(
        TargetMatch::classify(outputs.speed_ft_per_s, inputs.desired_speed_ft_per_s),
        TargetMatch::OnTarget
    );
}

#[test]
fn tooth_counts_feed_the_same_formulas() {
    // 12:24 then 16:48 is a 6:1 train; run it through a full evaluation
    let train = [GearStage::new(12, 24), GearStage::new(16, 48)];
    let inputs = DrivetrainInputs {
        gear_ratio: total_ratio(&train),
        ..Default::default()
    };
    let outputs = evaluate(&inputs);

    assert_eq!(inputs.gear_ratio, 6.0);
    assert_eq!(outputs.wheel_rpm, 1000.0);
}

#[test]
fn ideal_ratio_for_default_bot_is_torque_leaning() {
    // 6000 RPM into 4 in wheels at 5 ft/s needs roughly a 21:1 reduction
    let ratio = ideal_gear_ratio(6000.0, 5.0, 4.0);
    assert!(ratio > 20.0 && ratio < 22.0);
    assert_eq!(RatioCharacter::from_ratio(ratio), RatioCharacter::TorqueFocused);
}
