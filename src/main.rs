use std::error::Error;

use env_logger::Env;

use gyro_rs::angle::to_angle;
use gyro_rs::sim::SimulatedRobot;
use gyro_rs::turn::{calibrate_and_wait, full_turn, turn_to_heading, turn_to_heading_absolute};
use gyro_rs::{CalibrationFactor, GyroCorrection};

// True degrees per commanded revolution for the demo robot.
const SIM_TRUE_FULL_TURN: f64 = 364.5;

// Walkthrough:
//  Ten uncorrected revolutions: sensor reads 0°, robot points 45° - drift
//  The residual past the mark measures the true full turn (364.5°)
//  Ten corrected revolutions: robot lands back on the mark
//  Targeted turns then hit absolute headings on the first try
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("Starting gyro correction demo...");

    let robot = SimulatedRobot::new(SIM_TRUE_FULL_TURN);
    let mut sensor = robot.clone();
    let mut drive = robot.clone();

    println!("Calibrating inertial sensor...");
    if calibrate_and_wait(&mut sensor).is_err() {
        println!("Inertial sensor not installed - check the port");
        return Ok(());
    }

    let mut model = GyroCorrection::new(robot.clone());
    println!("✓ Sensor ready");
    println!("  Angle at start: {:.1}°\n", model.corrected_angle());

    println!("--- Ten revolutions, no correction ---");
    let start = robot.physical_rotation();
    full_turn(&mut drive, model.calibration(), 10.0);
    println!(
        "  Sensor says heading {:.1}°, robot actually points {:.1}°",
        model.corrected_heading(),
        robot.physical_heading()
    );
    let residual = to_angle(robot.physical_rotation() - start);
    println!("  → {:.1}° of drift the sensor cannot see\n", residual);

    println!("--- Rebuilding the model from the measured residual ---");
    let factor = CalibrationFactor::from_measured_turns(10, residual)?;
    println!(
        "  Measured full turn: {:.2}° per commanded 360°",
        factor.actual_full_turn()
    );
    let mut model = GyroCorrection::with_calibration(robot.clone(), factor);
    println!(
        "  ✓ Corrected heading now agrees with the robot: {:.1}°\n",
        model.corrected_heading()
    );

    println!("--- Ten revolutions, corrected ---");
    let before = robot.physical_rotation();
    full_turn(&mut drive, model.calibration(), 10.0);
    println!(
        "  Robot moved {:.2}° past the mark this time\n",
        to_angle(robot.physical_rotation() - before)
    );

    println!("--- Targeted turns ---");
    println!("  Facing {:.1}° before targeting", model.corrected_angle());

    turn_to_heading(&mut model, &mut drive, 90.0)?;
    println!("  → Turned to 90°: robot points {:.1}°", robot.physical_heading());

    turn_to_heading(&mut model, &mut drive, 350.0)?;
    println!(
        "  → Turned to 350° the short way: robot points {:.1}°",
        robot.physical_heading()
    );

    turn_to_heading_absolute(&mut model, &mut drive, 180.0)?;
    println!(
        "  → Sensor-target turn to 180°: robot points {:.1}°",
        robot.physical_heading()
    );

    println!("\nDemo complete.");
    Ok(())
}
