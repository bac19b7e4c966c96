use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::debug;

use crate::angle::to_heading;
use crate::drive::{DriveController, StopMode};
use crate::gyro::RotationSource;

struct SimState {
    physical_rotation: f64,
    true_full_turn: f64,
    calibration_polls: u32,
}

/// Drivetrain-and-sensor pair with a built-in scale error.
///
/// The simulated drivetrain turns closed-loop on its own sensor: a
/// commanded turn runs until the sensor has advanced by the commanded
/// amount. The sensor reads `physical * 360 / true_full_turn`, so a robot
/// with `true_full_turn = 364.5` physically rotates 364.5° for every
/// commanded 360°, exactly the bias [`GyroCorrection`] exists to cancel.
///
/// Handles are cheap clones over shared state, so one robot can serve as
/// the rotation source inside a model and as the drive controller next to
/// it.
///
/// [`GyroCorrection`]: crate::gyro::GyroCorrection
#[derive(Clone)]
pub struct SimulatedRobot {
    state: Rc<RefCell<SimState>>,
}

impl SimulatedRobot {
    /// Robot whose true rotation per commanded 360° is `true_full_turn`.
    pub fn new(true_full_turn: f64) -> Self {
        debug_assert!(
            true_full_turn.is_finite() && true_full_turn > 0.0,
            "non-physical full turn: {true_full_turn}"
        );
        Self {
            state: Rc::new(RefCell::new(SimState {
                physical_rotation: 0.0,
                true_full_turn,
                calibration_polls: 0,
            })),
        }
    }

    /// Accumulated physical rotation in degrees, the ground truth the
    /// sensor only approximates.
    pub fn physical_rotation(&self) -> f64 {
        self.state.borrow().physical_rotation
    }

    /// Ground-truth facing in `[0,360)`.
    pub fn physical_heading(&self) -> f64 {
        to_heading(self.physical_rotation())
    }
}

impl RotationSource for SimulatedRobot {
    fn rotation(&mut self) -> f64 {
        let state = self.state.borrow();
        state.physical_rotation * 360.0 / state.true_full_turn
    }

    fn installed(&self) -> bool {
        true
    }

    fn calibrate(&mut self) {
        // A couple of poll cycles, enough to exercise a wait loop
        self.state.borrow_mut().calibration_polls = 2;
    }

    fn calibrating(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if state.calibration_polls == 0 {
            return false;
        }
        state.calibration_polls -= 1;
        true
    }
}

// Simulated turns complete instantly; velocity, timeout, and stop settings
// are accepted and ignored.
impl DriveController for SimulatedRobot {
    fn set_turn_constant(&mut self, _constant: f64) {}

    fn set_drive_velocity(&mut self, _percent: f64) {}

    fn set_turn_velocity(&mut self, _percent: f64) {}

    fn set_timeout(&mut self, _timeout: Duration) {}

    fn turn_by(&mut self, degrees: f64) {
        let mut state = self.state.borrow_mut();
        let physical = degrees * state.true_full_turn / 360.0;
        state.physical_rotation += physical;
        debug!("sim: commanded {degrees:.2}°, physically turned {physical:.2}°");
    }

    fn turn_to_rotation(&mut self, target: f64) {
        let mut state = self.state.borrow_mut();
        state.physical_rotation = target * state.true_full_turn / 360.0;
        debug!("sim: sensor driven to {target:.2}°");
    }

    fn stop(&mut self, _mode: StopMode) {}
}
