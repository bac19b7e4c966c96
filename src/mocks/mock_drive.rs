use std::time::Duration;

use crate::drive::{DriveController, StopMode};

/// Every call a [`MockDrive`] records, in order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DriveCommand {
    TurnConstant(f64),
    DriveVelocity(f64),
    TurnVelocity(f64),
    Timeout(Duration),
    TurnBy(f64),
    TurnToRotation(f64),
    Stop(StopMode),
}

/// Command-recording drivetrain for unit tests.
#[derive(Default)]
pub(crate) struct MockDrive {
    pub(crate) commands: Vec<DriveCommand>,
}

impl MockDrive {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl DriveController for MockDrive {
    fn set_turn_constant(&mut self, constant: f64) {
        self.commands.push(DriveCommand::TurnConstant(constant));
    }

    fn set_drive_velocity(&mut self, percent: f64) {
        self.commands.push(DriveCommand::DriveVelocity(percent));
    }

    fn set_turn_velocity(&mut self, percent: f64) {
        self.commands.push(DriveCommand::TurnVelocity(percent));
    }

    fn set_timeout(&mut self, timeout: Duration) {
        self.commands.push(DriveCommand::Timeout(timeout));
    }

    fn turn_by(&mut self, degrees: f64) {
        self.commands.push(DriveCommand::TurnBy(degrees));
    }

    fn turn_to_rotation(&mut self, target: f64) {
        self.commands.push(DriveCommand::TurnToRotation(target));
    }

    fn stop(&mut self, mode: StopMode) {
        self.commands.push(DriveCommand::Stop(mode));
    }
}
