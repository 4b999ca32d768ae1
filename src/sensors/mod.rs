//! Sensor-specific types and calibration tables
//!
//! This module contains the typed configuration values for the
//! accelerometer and gyroscope, together with the tables mapping them to
//! register encodings and LSB scale factors.

pub mod accelerometer;
pub mod gyroscope;
pub mod rate;

pub use accelerometer::{AccelRange, Acceleration, HighPassFilter};
pub use gyroscope::{AngularRate, GyroRange};
pub use rate::DataRate;
