pub(crate) mod mock_drive;
pub(crate) mod mock_gyro;

pub(crate) use mock_drive::{DriveCommand, MockDrive};
pub(crate) use mock_gyro::MockGyro;
