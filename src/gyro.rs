use log::debug;

use crate::angle::{to_angle, to_heading};
use crate::calibration::CalibrationFactor;

/// Raw inertial sensor boundary.
///
/// Implementations report an unbounded signed rotation in degrees,
/// clockwise positive, accumulating across revolutions in either direction.
/// Normalization never resets the accumulated value.
pub trait RotationSource {
    /// Current accumulated rotation in degrees. One call is one sample.
    fn rotation(&mut self) -> f64;

    /// Whether the sensor is physically present. Readings from an absent
    /// sensor are meaningless, so callers check this before any query.
    fn installed(&self) -> bool;

    /// Start the sensor's internal calibration routine.
    fn calibrate(&mut self);

    /// Whether the calibration routine is still running.
    fn calibrating(&self) -> bool;
}

/// Turn-direction policy for the targeting computations.
///
/// Only the shortest path is implemented: both calculators pick the
/// direction with magnitude at most 180° before scaling, so a robot is
/// never sent the long way round. A preferred-direction policy would slot
/// in as a new variant.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnStrategy {
    #[default]
    ShortestPath,
}

/// Scale-correction layer over a raw rotation source.
///
/// Wraps the sensor with a [`CalibrationFactor`] fixed at construction and
/// answers heading queries and turn-command calculations in real-world
/// degrees. Every query takes one fresh sensor sample and nothing is
/// cached, so two consecutive calls may differ by true motion in between.
pub struct GyroCorrection<S: RotationSource> {
    source: S,
    calibration: CalibrationFactor,
    strategy: TurnStrategy,
}

impl<S: RotationSource> GyroCorrection<S> {
    /// Wrap a sensor with the identity calibration. Corrected values equal
    /// raw values until a measured factor is supplied.
    pub fn new(source: S) -> Self {
        Self::with_calibration(source, CalibrationFactor::default())
    }

    /// Wrap a sensor with a measured calibration factor.
    pub fn with_calibration(source: S, calibration: CalibrationFactor) -> Self {
        debug!(
            "gyro correction: turn scale {:.5}, readout scale {:.5}",
            calibration.turn_scale(),
            calibration.readout_scale()
        );
        Self {
            source,
            calibration,
            strategy: TurnStrategy::default(),
        }
    }

    /// Replace the turn-direction policy.
    pub fn with_strategy(mut self, strategy: TurnStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn calibration(&self) -> CalibrationFactor {
        self.calibration
    }

    pub fn strategy(&self) -> TurnStrategy {
        self.strategy
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether the underlying sensor is present.
    pub fn installed(&self) -> bool {
        self.source.installed()
    }

    /// Accumulated rotation in real-world degrees. One sensor read.
    pub fn corrected_rotation(&mut self) -> f64 {
        self.source.rotation() * self.calibration.readout_scale()
    }

    /// Current facing in `[0,360)`. One sensor read.
    pub fn corrected_heading(&mut self) -> f64 {
        to_heading(self.corrected_rotation())
    }

    /// Current facing as a signed angle in `(-180,180]`. One sensor read.
    pub fn corrected_angle(&mut self) -> f64 {
        to_angle(self.corrected_rotation())
    }

    /// Relative turn command that brings the robot onto `target_heading`.
    ///
    /// Picks the shortest signed path from the current heading, then
    /// applies the turn scale. The result is a command magnitude, not a
    /// physical angle: scaling can push it past ±180 and it must be fed to
    /// a relative turn command as-is, never re-normalized. One sensor read.
    pub fn turn_delta_to_heading(&mut self, target_heading: f64) -> f64 {
        let current_heading = self.corrected_heading();
        self.signed_delta(current_heading, target_heading) * self.calibration.turn_scale()
    }

    /// Absolute rotation value that brings the robot onto `target_heading`,
    /// expressed in the sensor's own command space.
    ///
    /// Takes a single sensor sample and derives both the rotation and the
    /// heading from it, so the delta cannot tear against a sensor that
    /// moves between reads. The result is already scale-adjusted for a
    /// "turn until the sensor reads this" command; callers must not apply
    /// the turn scale again.
    ///
    /// The whole accumulated value is scaled, not just the increment, so
    /// the scaled base shifts further the more the session has rotated
    /// away from zero. For many successive targeted turns prefer
    /// [`turn_delta_to_heading`](Self::turn_delta_to_heading).
    pub fn turn_target_rotation(&mut self, target_heading: f64) -> f64 {
        let current_rotation = self.corrected_rotation();
        let current_heading = to_heading(current_rotation);
        let delta = self.signed_delta(current_heading, target_heading);
        (current_rotation + delta) * self.calibration.turn_scale()
    }

    /// Signed turn from `current_heading` to `target_heading` under the
    /// configured policy. An exactly-opposite target turns clockwise.
    fn signed_delta(&self, current_heading: f64, target_heading: f64) -> f64 {
        match self.strategy {
            TurnStrategy::ShortestPath => to_angle(target_heading - current_heading),
        }
    }
}
