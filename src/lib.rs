pub mod angle;
pub mod calibration;
pub mod config;
pub mod drive;
pub mod error;
pub mod gyro;
pub mod sim;
pub mod turn;

// Re-export commonly used types
pub use calibration::CalibrationFactor;
pub use error::{GyroError, Result};
pub use gyro::{GyroCorrection, RotationSource, TurnStrategy};

#[cfg(test)]
pub(crate) mod mocks;
