use std::thread;
use std::time::Duration;

use log::{debug, info};

use crate::calibration::CalibrationFactor;
use crate::config::{
    CALIBRATION_POLL_INTERVAL_MS, DEFAULT_DRIVE_VELOCITY_PCT, DEFAULT_TURN_VELOCITY_PCT,
    SENSOR_STARTUP_DELAY_MS, TIME_FOR_FULL_TURN_SECS, TURN_CONSTANT, TURN_TIMEOUT_MARGIN_SECS,
};
use crate::drive::{DriveController, StopMode};
use crate::error::{GyroError, Result};
use crate::gyro::{GyroCorrection, RotationSource};

/// Kick off sensor calibration and block until it settles. The robot must
/// be stationary throughout.
///
/// Gives the sensor a moment to power up first. Polling is coarse since
/// calibration takes on the order of seconds.
pub fn calibrate_and_wait(source: &mut impl RotationSource) -> Result<()> {
    if !source.installed() {
        return Err(GyroError::NotInstalled);
    }
    thread::sleep(Duration::from_millis(SENSOR_STARTUP_DELAY_MS));
    source.calibrate();
    while source.calibrating() {
        thread::sleep(Duration::from_millis(CALIBRATION_POLL_INTERVAL_MS));
    }
    debug!("sensor calibration settled");
    Ok(())
}

/// Command `number_of_turns` scale-corrected full revolutions, clockwise
/// for positive counts.
///
/// Run with the identity factor this is the calibration measurement
/// maneuver: the residual angle left over afterwards feeds
/// [`CalibrationFactor::from_measured_turns`]. Run with a measured factor
/// it turns true revolutions. The timeout grows with the number of
/// revolutions commanded.
pub fn full_turn(
    drive: &mut impl DriveController,
    calibration: CalibrationFactor,
    number_of_turns: f64,
) {
    let command = number_of_turns * 360.0 * calibration.turn_scale();
    info!("full turn x{number_of_turns}: commanding {command:.2}°");
    drive.set_turn_constant(TURN_CONSTANT);
    drive.set_drive_velocity(DEFAULT_DRIVE_VELOCITY_PCT);
    drive.set_turn_velocity(DEFAULT_TURN_VELOCITY_PCT);
    drive.set_timeout(Duration::from_secs_f64(
        TIME_FOR_FULL_TURN_SECS * number_of_turns.abs() + TURN_TIMEOUT_MARGIN_SECS,
    ));
    drive.turn_by(command);
    drive.stop(StopMode::Brake);
}

/// Turn the robot onto an absolute heading with a relative turn command.
///
/// One sensor read picks the shortest scale-corrected delta, which the
/// drivetrain executes as a turn-by. Fails before touching the drive if
/// the sensor is absent.
pub fn turn_to_heading<S: RotationSource>(
    model: &mut GyroCorrection<S>,
    drive: &mut impl DriveController,
    target_heading: f64,
) -> Result<()> {
    if !model.installed() {
        return Err(GyroError::NotInstalled);
    }
    let delta = model.turn_delta_to_heading(target_heading);
    info!("turn to heading {target_heading}°: relative command {delta:.2}°");
    prepare_turn(drive);
    drive.turn_by(delta);
    drive.stop(StopMode::Brake);
    Ok(())
}

/// Turn the robot onto an absolute heading by driving the sensor to a
/// computed rotation value.
///
/// One sensor read yields the scale-adjusted target, which the drivetrain
/// chases with a turn-to-rotation. Fails before touching the drive if the
/// sensor is absent.
pub fn turn_to_heading_absolute<S: RotationSource>(
    model: &mut GyroCorrection<S>,
    drive: &mut impl DriveController,
    target_heading: f64,
) -> Result<()> {
    if !model.installed() {
        return Err(GyroError::NotInstalled);
    }
    let target = model.turn_target_rotation(target_heading);
    info!("turn to heading {target_heading}°: sensor target {target:.2}°");
    prepare_turn(drive);
    drive.turn_to_rotation(target);
    drive.stop(StopMode::Brake);
    Ok(())
}

/// A heading turn covers at most about half a revolution; one revolution's
/// time plus margin bounds it.
fn prepare_turn(drive: &mut impl DriveController) {
    drive.set_turn_constant(TURN_CONSTANT);
    drive.set_turn_velocity(DEFAULT_TURN_VELOCITY_PCT);
    drive.set_timeout(Duration::from_secs_f64(
        TIME_FOR_FULL_TURN_SECS + TURN_TIMEOUT_MARGIN_SECS,
    ));
}
