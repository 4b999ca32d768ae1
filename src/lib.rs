#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod calibration;
pub mod device;
pub mod interface;
pub mod mlc;
pub mod models;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use calibration::{CalibratedValue, ValueTable};
pub use device::Lsm6dsDriver;
pub use interface::I2cInterface;
pub use models::{BitLocation, SensorModel};
pub use sensors::{AccelRange, Acceleration, AngularRate, DataRate, GyroRange, HighPassFilter};

/// LSM6DS I2C address when the SDO/SA0 pin is low (default: 0x6A)
///
/// This is the wiring on most breakout boards, where SDO/SA0 is pulled low
/// or left floating. Use [`I2cInterface::default()`] for this configuration.
pub const I2C_ADDRESS_DEFAULT: u8 = 0x6A;

/// LSM6DS I2C address when the SDO/SA0 pin is pulled high (alternative: 0x6B)
///
/// Use this address when SDO/SA0 is explicitly tied to VDD. Use
/// [`I2cInterface::alternative()`] for this configuration.
pub const I2C_ADDRESS_ALT: u8 = 0x6B;

/// Register memory banks
///
/// The LSM6DS family exposes the embedded-function registers (pedometer
/// configuration, machine-learning core) in an alternate address space
/// selected through a bit in `FUNC_CFG_ACCESS` (0x01). The embedded bank
/// aliases the primary register addresses, so it must be deselected again
/// after use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MemoryBank {
    /// User bank - primary configuration and sensor data registers
    User,
    /// Embedded-functions bank - pedometer and MLC registers
    Embedded,
}

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Unexpected `WHO_AM_I` register value (contains the actual value read)
    DeviceNotFound(u8),
    /// Requested configuration value is not a member of its calibration table
    InvalidConfiguration,
    /// Range that is valid for the family but not supported by this model
    /// (e.g. 4000 dps on anything but the ISM330DHCX)
    UnsupportedRange,
    /// Software reset bit did not clear within the poll window
    ResetTimeout,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
