use thiserror::Error;

/// Failures surfaced during setup and turn sequencing. The correction math
/// itself is pure arithmetic with no runtime failure modes.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GyroError {
    /// No inertial sensor is plugged in. Check for this before issuing any
    /// gyro query; driving blind causes unexpected motion.
    #[error("inertial sensor not installed")]
    NotInstalled,

    /// A full-turn measurement that cannot produce usable scale factors
    /// (zero, negative, or non-finite). Rejected at configuration time so no
    /// turn computation ever divides by it.
    #[error("degenerate calibration: measured full turn of {actual_full_turn}°")]
    DegenerateCalibration { actual_full_turn: f64 },
}

pub type Result<T> = std::result::Result<T, GyroError>;
