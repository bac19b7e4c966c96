use std::error::Error;

use env_logger::Env;

use gyro_rs::CalibrationFactor;
use gyro_rs::angle::to_angle;
use gyro_rs::config::SCALE_MEASUREMENT_TURNS;
use gyro_rs::sim::SimulatedRobot;
use gyro_rs::turn::{calibrate_and_wait, full_turn};

// True degrees per commanded revolution for the demo robot. A real
// measurement session swaps the simulator for hardware handles.
const SIM_TRUE_FULL_TURN: f64 = 364.5;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║     Gyro Scale Calibration Tool                      ║");
    println!("╚══════════════════════════════════════════════════════╝\n");

    println!("Procedure:");
    println!(
        "1. Place the robot on a marked start heading ({} full turns follow)",
        SCALE_MEASUREMENT_TURNS
    );
    println!("2. The robot turns with no correction applied");
    println!("3. The angle it ends up past the mark is the measured residual");
    println!("4. The residual yields the robot's true degrees per commanded 360°\n");

    let robot = SimulatedRobot::new(SIM_TRUE_FULL_TURN);
    let mut sensor = robot.clone();
    let mut drive = robot.clone();

    println!("Calibrating inertial sensor...");
    calibrate_and_wait(&mut sensor)?;
    println!("✓ Sensor ready\n");

    let start = robot.physical_rotation();
    println!("Turning {} revolutions, uncorrected...", SCALE_MEASUREMENT_TURNS);
    full_turn(
        &mut drive,
        CalibrationFactor::default(),
        f64::from(SCALE_MEASUREMENT_TURNS),
    );

    let residual = to_angle(robot.physical_rotation() - start);
    println!("✓ Robot stopped {:.2}° past the start mark\n", residual);

    let factor = CalibrationFactor::from_measured_turns(SCALE_MEASUREMENT_TURNS, residual)?;
    println!("Measured full turn:  {:.3}°", factor.actual_full_turn());
    println!("Turn scale:          {:.6}", factor.turn_scale());
    println!("Readout scale:       {:.6}", factor.readout_scale());

    // Prove the factor out: the same maneuver, corrected, comes back on the mark
    let before = robot.physical_rotation();
    println!(
        "\nVerifying with {} corrected revolutions...",
        SCALE_MEASUREMENT_TURNS
    );
    full_turn(&mut drive, factor, f64::from(SCALE_MEASUREMENT_TURNS));
    println!(
        "✓ Residual after correction: {:.4}°",
        to_angle(robot.physical_rotation() - before)
    );

    Ok(())
}
