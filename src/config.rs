// ** CALIBRATION CONFIGURATION ** //

/// Degrees the robot actually rotates when commanded a 360° turn.
/// 360.0 means "no known error". Every sensor is off by its own amount, so
/// measure this per robot with the `calibrate` binary before trusting turns.
pub const DEFAULT_ACTUAL_FULL_TURN: f64 = 360.0;
/// Full revolutions commanded while measuring the scale error. More turns
/// make the residual angle easier to see against the starting mark.
pub const SCALE_MEASUREMENT_TURNS: u32 = 10;

// ** DRIVETRAIN CONFIGURATION ** //

/// Gain for the drivetrain's heading response. If the robot swings back and
/// forth at the end of a turn this is too high; if it turns very slowly or
/// never reaches the heading it is too low. Depends on robot weight and turn
/// velocity, so retune after either changes.
pub const TURN_CONSTANT: f64 = 1.0;
/// Turning speed while maneuvering, percent of maximum.
pub const DEFAULT_TURN_VELOCITY_PCT: f64 = 50.0;
/// Straight-drive speed, percent of maximum.
pub const DEFAULT_DRIVE_VELOCITY_PCT: f64 = 50.0;
/// Seconds one full revolution takes at the default turn velocity. Used to
/// size command timeouts; adjust alongside the turn velocity.
pub const TIME_FOR_FULL_TURN_SECS: f64 = 2.0;
/// Extra seconds allowed on top of the computed turn time before the
/// drivetrain gives up, e.g. when blocked against something.
pub const TURN_TIMEOUT_MARGIN_SECS: f64 = 1.0;

// ** SENSOR CONFIGURATION ** //

/// Settle time after power-on before the sensor answers sensibly. Always
/// give sensors a small delay before the first query.
pub const SENSOR_STARTUP_DELAY_MS: u64 = 100;
/// Interval between "is calibration done yet" polls.
pub const CALIBRATION_POLL_INTERVAL_MS: u64 = 50;
