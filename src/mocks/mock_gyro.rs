use std::cell::Cell;

use crate::gyro::RotationSource;

/// Scripted rotation source for unit tests. Reports a fixed rotation and
/// counts how often it is sampled.
pub(crate) struct MockGyro {
    rotation: f64,
    installed: bool,
    polls_after_calibrate: u32,
    remaining_polls: Cell<u32>,
    reads: u32,
    calibrate_calls: u32,
}

impl MockGyro {
    pub(crate) fn new(rotation: f64) -> Self {
        Self {
            rotation,
            installed: true,
            polls_after_calibrate: 0,
            remaining_polls: Cell::new(0),
            reads: 0,
            calibrate_calls: 0,
        }
    }

    pub(crate) fn not_installed() -> Self {
        Self {
            installed: false,
            ..Self::new(0.0)
        }
    }

    /// Sensor that stays busy for `polls` calibrating-queries after each
    /// calibrate call.
    pub(crate) fn with_calibration_polls(polls: u32) -> Self {
        Self {
            polls_after_calibrate: polls,
            ..Self::new(0.0)
        }
    }

    pub(crate) fn reads(&self) -> u32 {
        self.reads
    }

    pub(crate) fn calibrate_calls(&self) -> u32 {
        self.calibrate_calls
    }
}

impl RotationSource for MockGyro {
    fn rotation(&mut self) -> f64 {
        self.reads += 1;
        self.rotation
    }

    fn installed(&self) -> bool {
        self.installed
    }

    fn calibrate(&mut self) {
        self.calibrate_calls += 1;
        self.remaining_polls.set(self.polls_after_calibrate);
    }

    fn calibrating(&self) -> bool {
        let left = self.remaining_polls.get();
        if left == 0 {
            return false;
        }
        self.remaining_polls.set(left - 1);
        true
    }
}
