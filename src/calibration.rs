use log::debug;

use crate::config::DEFAULT_ACTUAL_FULL_TURN;
use crate::error::{GyroError, Result};

/// Empirically measured ratio between commanded and actual rotation.
///
/// Inertial sensors each carry their own fixed multiplicative error, so a
/// robot told to turn 360° ends up somewhere near-but-not-at its mark. This
/// type holds the one number the whole correction hangs off: how many degrees
/// the robot really rotates per commanded full turn. Both scale factors are
/// derived views of that number, so they can never drift apart the way two
/// separately edited constants can.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalibrationFactor {
    actual_full_turn: f64,
}

impl CalibrationFactor {
    /// Build from a measured full turn in degrees, e.g. 364.5 for a robot
    /// that overshoots a commanded 360° by 4.5°.
    ///
    /// Zero, negative, and non-finite measurements are rejected here, before
    /// any turn computation can divide by them.
    pub fn new(actual_full_turn: f64) -> Result<Self> {
        if !actual_full_turn.is_finite() || actual_full_turn <= 0.0 {
            return Err(GyroError::DegenerateCalibration { actual_full_turn });
        }
        debug!("calibration: full turn measured as {actual_full_turn}°");
        Ok(Self { actual_full_turn })
    }

    /// Derive the factor from the measurement procedure: command
    /// `number_of_turns` full revolutions with no correction applied, then
    /// measure how far past the starting mark the robot ends up (signed
    /// degrees, clockwise positive).
    ///
    /// A robot found 45° right of its mark after 10 commanded turns really
    /// rotates `360 + 45/10 = 364.5°` per commanded revolution.
    pub fn from_measured_turns(number_of_turns: u32, residual_degrees: f64) -> Result<Self> {
        // Zero turns divides to infinity and is rejected like any other
        // degenerate measurement.
        Self::new(360.0 + residual_degrees / f64::from(number_of_turns))
    }

    /// Scale applied when telling the drivetrain how far to turn. A robot
    /// that over-rotates gets commanded less than the nominal angle.
    pub fn turn_scale(&self) -> f64 {
        360.0 / self.actual_full_turn
    }

    /// Scale applied when interpreting the sensor. A sensor that
    /// under-reports gets its reading inflated back into real degrees.
    pub fn readout_scale(&self) -> f64 {
        self.actual_full_turn / 360.0
    }

    /// The measured full turn in degrees.
    pub fn actual_full_turn(&self) -> f64 {
        self.actual_full_turn
    }
}

impl Default for CalibrationFactor {
    /// Identity calibration: both scales are exactly 1, corrected values
    /// equal raw values. The right starting point until a robot has been
    /// measured.
    fn default() -> Self {
        Self {
            actual_full_turn: DEFAULT_ACTUAL_FULL_TURN,
        }
    }
}
