use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use dc_app::{
    AppError, AppResult, DrivetrainReport, GearingReport, SpeedReport, TorqueReport,
    build_gearing_report, build_report, build_speed_report, build_torque_report, format_number,
    format_ratio, format_seconds,
};
use dc_drivetrain::{DrivetrainInputs, GearStage, MOTOR_CATALOG, find_motor};

#[derive(Parser)]
#[command(name = "dc-cli")]
#[command(about = "DriveCalc CLI - drivetrain performance calculators for FTC/FRC robots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate top speed from motor, gearing, and wheel size
    Speed {
        /// Motor preset name (see `motors`)
        #[arg(long)]
        motor: Option<String>,
        /// Motor free speed in RPM (overrides the preset)
        #[arg(long)]
        rpm: Option<f64>,
        /// Wheel diameter in inches
        #[arg(long, default_value_t = 4.0)]
        wheel_diameter: f64,
        /// Gear ratio, driven over driving
        #[arg(long, default_value_t = 1.0)]
        ratio: f64,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Calculate wheel torque, pushing force, and acceleration
    Torque {
        /// Motor preset name (see `motors`)
        #[arg(long)]
        motor: Option<String>,
        /// Motor stall torque in newton-metres (overrides the preset)
        #[arg(long)]
        stall_torque: Option<f64>,
        /// Gear ratio, driven over driving
        #[arg(long, default_value_t = 1.0)]
        ratio: f64,
        /// Number of drive motors
        #[arg(long, default_value_t = 4)]
        num_motors: u32,
        /// Wheel diameter in inches
        #[arg(long, default_value_t = 4.0)]
        wheel_diameter: f64,
        /// Robot weight in pounds
        #[arg(long, default_value_t = 40.0)]
        weight: f64,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find the gear ratio for a target speed
    GearRatio {
        /// Motor preset name (see `motors`)
        #[arg(long)]
        motor: Option<String>,
        /// Motor free speed in RPM (overrides the preset)
        #[arg(long)]
        rpm: Option<f64>,
        /// Wheel diameter in inches
        #[arg(long, default_value_t = 4.0)]
        wheel_diameter: f64,
        /// Target speed in ft/s
        #[arg(long, default_value_t = 5.0)]
        desired_speed: f64,
        /// Driving gear tooth count (with --driven, checks an actual pair)
        #[arg(long)]
        driving: Option<u32>,
        /// Driven gear tooth count
        #[arg(long)]
        driven: Option<u32>,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List motor presets
    Motors,
    /// Evaluate a robot profile file and print the full report
    Eval {
        /// Path to the profile YAML file
        profile_path: PathBuf,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate profile file syntax and structure
    Validate {
        /// Path to the profile YAML file
        profile_path: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Speed {
            motor,
            rpm,
            wheel_diameter,
            ratio,
            json,
        } => cmd_speed(motor.as_deref(), rpm, wheel_diameter, ratio, json),
        Commands::Torque {
            motor,
            stall_torque,
            ratio,
            num_motors,
            wheel_diameter,
            weight,
            json,
        } => cmd_torque(
            motor.as_deref(),
            stall_torque,
            ratio,
            num_motors,
            wheel_diameter,
            weight,
            json,
        ),
        Commands::GearRatio {
            motor,
            rpm,
            wheel_diameter,
            desired_speed,
            driving,
            driven,
            json,
        } => cmd_gear_ratio(
            motor.as_deref(),
            rpm,
            wheel_diameter,
            desired_speed,
            driving,
            driven,
            json,
        ),
        Commands::Motors => cmd_motors(),
        Commands::Eval { profile_path, json } => cmd_eval(&profile_path, json),
        Commands::Validate { profile_path } => cmd_validate(&profile_path),
    }
}

/// Free speed from --rpm, then the preset, then the default record.
fn resolve_rpm(motor: Option<&str>, rpm: Option<f64>) -> AppResult<f64> {
    if let Some(rpm) = rpm {
        return Ok(rpm);
    }
    match motor {
        Some(name) => find_motor(name)
            .map(|m| m.free_speed_rpm)
            .ok_or_else(|| AppError::UnknownMotor(name.to_string())),
        None => Ok(DrivetrainInputs::default().motor_rpm),
    }
}

/// Stall torque from --stall-torque, then the preset, then the default record.
fn resolve_stall_torque(motor: Option<&str>, stall_torque: Option<f64>) -> AppResult<f64> {
    if let Some(t) = stall_torque {
        return Ok(t);
    }
    match motor {
        Some(name) => {
            let spec = find_motor(name).ok_or_else(|| AppError::UnknownMotor(name.to_string()))?;
            spec.stall_torque_nm
                .ok_or_else(|| AppError::MotorTorqueUnknown(name.to_string()))
        }
        None => Ok(DrivetrainInputs::default().motor_torque_nm),
    }
}

fn cmd_speed(
    motor: Option<&str>,
    rpm: Option<f64>,
    wheel_diameter: f64,
    ratio: f64,
    json: bool,
) -> AppResult<()> {
    let inputs = DrivetrainInputs {
        motor_rpm: resolve_rpm(motor, rpm)?,
        wheel_diameter_in: wheel_diameter,
        gear_ratio: ratio,
        ..Default::default()
    };
    let report = build_speed_report(&inputs)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    print_speed_section(&report);
    Ok(())
}

fn print_speed_section(report: &SpeedReport) {
    let o = &report.outputs;
    println!("Speed report:");
    println!(
        "  Wheel circumference: {} in",
        format_number(o.wheel_circumference_in, 2)
    );
    println!("  Wheel RPM:           {}", format_number(o.wheel_rpm, 0));
    println!(
        "  Max speed:           {} ft/s ({} m/s, {} mph)",
        format_number(o.speed_ft_per_s, 2),
        format_number(o.speed_m_per_s, 2),
        format_number(o.speed_mph, 2)
    );
    println!(
        "  Cross FTC field:     {}",
        format_seconds(o.time_to_cross_ftc_s)
    );
    println!(
        "  Cross FRC field:     {}",
        format_seconds(o.time_to_cross_frc_s)
    );
    println!(
        "  Rating: {} ({})",
        report.speed_rating,
        report.speed_rating.note()
    );
}

fn cmd_torque(
    motor: Option<&str>,
    stall_torque: Option<f64>,
    ratio: f64,
    num_motors: u32,
    wheel_diameter: f64,
    weight: f64,
    json: bool,
) -> AppResult<()> {
    let inputs = DrivetrainInputs {
        motor_torque_nm: resolve_stall_torque(motor, stall_torque)?,
        gear_ratio: ratio,
        num_motors,
        wheel_diameter_in: wheel_diameter,
        robot_weight_lb: weight,
        ..Default::default()
    };
    let report = build_torque_report(&inputs)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    print_torque_section(&report);
    Ok(())
}

fn print_torque_section(report: &TorqueReport) {
    let o = &report.outputs;
    println!("Torque report:");
    println!(
        "  Wheel torque:   {} Nm per wheel",
        format_number(o.wheel_torque_nm, 2)
    );
    println!(
        "  Total torque:   {} Nm across {} motors",
        format_number(o.total_torque_nm, 2),
        report.inputs.num_motors
    );
    println!(
        "  Pushing force:  {} lb",
        format_number(o.pushing_force_lb, 1)
    );
    println!(
        "  Acceleration:   {} ft/s²",
        format_number(o.acceleration_ft_per_s2, 2)
    );
    println!("  0 to 5 ft:      {}", format_seconds(o.sprint_5ft_s));
    if report.can_climb_ramp {
        println!("  ✓ Can climb a 30° ramp");
    } else {
        println!("  ✗ Cannot climb a 30° ramp");
    }
    println!(
        "  Rating: {} ({})",
        report.torque_rating,
        report.torque_rating.note()
    );
}

fn cmd_gear_ratio(
    motor: Option<&str>,
    rpm: Option<f64>,
    wheel_diameter: f64,
    desired_speed: f64,
    driving: Option<u32>,
    driven: Option<u32>,
    json: bool,
) -> AppResult<()> {
    let mut inputs = DrivetrainInputs {
        motor_rpm: resolve_rpm(motor, rpm)?,
        wheel_diameter_in: wheel_diameter,
        desired_speed_ft_per_s: desired_speed,
        ..Default::default()
    };

    // With a tooth pair on the command line, evaluate that actual ratio;
    // otherwise evaluate the ideal one.
    let actual = match (driving, driven) {
        (Some(driving), Some(driven)) if driving > 0 && driven > 0 => {
            Some(GearStage::new(driving, driven))
        }
        (None, None) => None,
        _ => {
            return Err(AppError::InvalidInput(
                "both --driving and --driven tooth counts are required, and must be nonzero"
                    .to_string(),
            ));
        }
    };

    let ideal =
        dc_drivetrain::ideal_gear_ratio(inputs.motor_rpm, desired_speed, wheel_diameter);
    inputs.gear_ratio = match &actual {
        Some(stage) => stage.ratio(),
        None => ideal,
    };
    let report = build_gearing_report(&inputs)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Gear ratio report:");
    println!("  Ideal ratio:  {}", format_ratio(ideal));
    if let Some(stage) = &actual {
        println!(
            "  Actual ratio: {} ({}t driving, {}t driven)",
            format_ratio(stage.ratio()),
            stage.driving_teeth,
            stage.driven_teeth
        );
        println!(
            "  Result speed: {} ft/s (target {} ft/s, delta {})",
            format_number(report.outputs.speed_ft_per_s, 2),
            format_number(desired_speed, 2),
            format_number(report.speed_delta_ft_per_s, 2)
        );
    }
    println!("  Character: {}", report.ratio_character);
    print_target_badge(&report);
    Ok(())
}

fn print_target_badge(report: &GearingReport) {
    use dc_drivetrain::TargetMatch;
    match report.target_match {
        TargetMatch::OnTarget => println!("  ✓ {}", report.target_match),
        _ => println!("  ⚠ {}", report.target_match),
    }
}

fn cmd_motors() -> AppResult<()> {
    println!("Motor presets:");
    for motor in MOTOR_CATALOG {
        match motor.stall_torque_nm {
            Some(torque) => println!(
                "  {} - {} RPM, {} Nm stall",
                motor.name,
                format_number(motor.free_speed_rpm, 0),
                format_number(torque, 1)
            ),
            None => println!(
                "  {} - {} RPM, stall torque n/a",
                motor.name,
                format_number(motor.free_speed_rpm, 0)
            ),
        }
    }
    Ok(())
}

fn cmd_eval(profile_path: &Path, json: bool) -> AppResult<()> {
    let profile = load_profile(profile_path)?;
    let inputs = dc_app::compile_profile(&profile)?;
    let report = build_report(&inputs)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("✓ Evaluated profile: {}", profile.name);
    println!(
        "  Motor: {} RPM, {} Nm stall, {} motors",
        format_number(inputs.motor_rpm, 0),
        format_number(inputs.motor_torque_nm, 1),
        inputs.num_motors
    );
    println!("  Reduction: {}", format_ratio(inputs.gear_ratio));
    println!();
    print_speed_section(&SpeedReport {
        inputs: report.inputs,
        outputs: report.outputs,
        speed_rating: report.speed_rating,
    });
    println!();
    print_torque_section(&TorqueReport {
        inputs: report.inputs,
        outputs: report.outputs,
        torque_rating: report.torque_rating,
        can_climb_ramp: report.can_climb_ramp,
    });
    println!();
    print_gearing_summary(&report);
    Ok(())
}

fn print_gearing_summary(report: &DrivetrainReport) {
    println!("Gearing:");
    println!(
        "  Ideal ratio for {} ft/s: {}",
        format_number(report.inputs.desired_speed_ft_per_s, 1),
        format_ratio(report.outputs.ideal_gear_ratio)
    );
    println!("  Character: {}", report.ratio_character);
    use dc_drivetrain::TargetMatch;
    match report.target_match {
        TargetMatch::OnTarget => println!("  ✓ {}", report.target_match),
        _ => println!("  ⚠ {}", report.target_match),
    }
}

fn cmd_validate(profile_path: &Path) -> AppResult<()> {
    println!("Validating profile: {}", profile_path.display());
    let _profile = load_profile(profile_path)?;
    println!("✓ Profile is valid");
    Ok(())
}

/// Load a profile, picking the format from the file extension.
fn load_profile(path: &Path) -> AppResult<dc_profile::RobotProfile> {
    let profile = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => dc_profile::load_json(path)?,
        _ => dc_profile::load_yaml(path)?,
    };
    Ok(profile)
}
