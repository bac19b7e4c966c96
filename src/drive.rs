use std::time::Duration;

/// How the drivetrain holds position once a command finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StopMode {
    /// Short the motor windings and resist motion.
    #[default]
    Brake,
    /// Cut power and let the robot roll free.
    Coast,
    /// Actively servo back to the stopped position.
    Hold,
}

/// Drivetrain actuation boundary.
///
/// The correction model only computes command values; executing them, with
/// velocity, timeout, and stop-mode choices, happens behind this trait.
/// Methods are infallible: completion and timeout policy live inside the
/// implementation, and the turn's outcome is observed by re-reading the
/// rotation sensor afterwards.
pub trait DriveController {
    /// Tune the ratio between commanded turn degrees and wheel travel.
    fn set_turn_constant(&mut self, constant: f64);

    /// Straight-drive speed as a percentage of full speed.
    fn set_drive_velocity(&mut self, percent: f64);

    /// Turn speed as a percentage of full speed.
    fn set_turn_velocity(&mut self, percent: f64);

    /// Give up on any following command after this long.
    fn set_timeout(&mut self, timeout: Duration);

    /// Turn by a relative number of degrees, clockwise positive. Blocks
    /// until done or timed out.
    fn turn_by(&mut self, degrees: f64);

    /// Turn until the rotation sensor reads `target` degrees. Blocks until
    /// done or timed out.
    fn turn_to_rotation(&mut self, target: f64);

    /// Halt and apply `mode`.
    fn stop(&mut self, mode: StopMode);
}
