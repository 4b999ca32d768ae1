//! Model descriptors for the supported LSM6DS family members
//!
//! The family members differ only in data, not behavior: the chip ID, the
//! full-scale tables, whether the I3C interface should be disabled at init,
//! and (on the LSM6DS3TR-C) where the pedometer-enable bit lives. Each
//! difference is captured in a [`SensorModel`] value that the driver is
//! constructed with, so one driver implementation covers every part.

use crate::calibration::ValueTable;
use crate::sensors::accelerometer::{ACCEL_RANGES, ACCEL_RANGES_WIDE};
use crate::sensors::gyroscope::{GYRO_RANGES, GYRO_RANGES_EXTENDED};
use crate::sensors::{AccelRange, GyroRange};

const TAP_CFG: u8 = 0x58;
const CTRL10_C: u8 = 0x19;

/// A single bit at a fixed register address
///
/// Used for the per-model relocatable bits that the generated register map
/// cannot express; the driver accesses these through raw read-modify-write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitLocation {
    /// Register address
    pub address: u8,
    /// Bit position within the register (0..8)
    pub bit: u8,
}

/// Per-model configuration of the shared driver
#[derive(Debug, Clone, Copy)]
pub struct SensorModel {
    /// Part name, for diagnostics
    pub name: &'static str,
    /// Expected `WHO_AM_I` value
    pub chip_id: u8,
    /// Accelerometer full-scale table
    pub accel_ranges: ValueTable<AccelRange>,
    /// Gyroscope full-scale table
    pub gyro_ranges: ValueTable<GyroRange>,
    /// Accelerometer range applied by [`reset`](crate::Lsm6dsDriver::reset)
    pub default_accel_range: AccelRange,
    /// Location of the pedometer-enable bit
    pub pedometer_enable: BitLocation,
    /// Whether construction disables the I3C interface (recommended by the
    /// datasheet on the newer parts, harmless but unnecessary on the rest)
    pub i3c_disable_on_init: bool,
}

/// LSM6DSOX - primary 6-axis part, with machine-learning core
pub const LSM6DSOX: SensorModel = SensorModel {
    name: "LSM6DSOX",
    chip_id: 0x6C,
    accel_ranges: ACCEL_RANGES,
    gyro_ranges: GYRO_RANGES,
    default_accel_range: AccelRange::G4,
    pedometer_enable: BitLocation {
        address: TAP_CFG,
        bit: 6,
    },
    i3c_disable_on_init: true,
};

/// LSM6DSO32 - wide-range (±32g) variant of the LSM6DSOX
pub const LSM6DSO32: SensorModel = SensorModel {
    name: "LSM6DSO32",
    chip_id: 0x6C,
    accel_ranges: ACCEL_RANGES_WIDE,
    gyro_ranges: GYRO_RANGES,
    default_accel_range: AccelRange::G8,
    pedometer_enable: BitLocation {
        address: TAP_CFG,
        bit: 6,
    },
    i3c_disable_on_init: true,
};

/// LSM6DS33 - low-cost variant
pub const LSM6DS33: SensorModel = SensorModel {
    name: "LSM6DS33",
    chip_id: 0x69,
    accel_ranges: ACCEL_RANGES,
    gyro_ranges: GYRO_RANGES,
    default_accel_range: AccelRange::G4,
    pedometer_enable: BitLocation {
        address: TAP_CFG,
        bit: 6,
    },
    i3c_disable_on_init: false,
};

/// ISM330DHCX - industrial variant with the extended ±4000 dps gyro range
pub const ISM330DHCX: SensorModel = SensorModel {
    name: "ISM330DHCX",
    chip_id: 0x6B,
    accel_ranges: ACCEL_RANGES,
    gyro_ranges: GYRO_RANGES_EXTENDED,
    default_accel_range: AccelRange::G4,
    pedometer_enable: BitLocation {
        address: TAP_CFG,
        bit: 6,
    },
    i3c_disable_on_init: true,
};

/// LSM6DS3 - automotive-grade variant
pub const LSM6DS3: SensorModel = SensorModel {
    name: "LSM6DS3",
    chip_id: 0x6A,
    accel_ranges: ACCEL_RANGES,
    gyro_ranges: GYRO_RANGES,
    default_accel_range: AccelRange::G4,
    pedometer_enable: BitLocation {
        address: TAP_CFG,
        bit: 6,
    },
    i3c_disable_on_init: false,
};

/// LSM6DS3TR-C - revision of the LSM6DS3 with the pedometer-enable bit in
/// CTRL10_C instead of TAP_CFG
pub const LSM6DS3TRC: SensorModel = SensorModel {
    name: "LSM6DS3TR-C",
    chip_id: 0x6A,
    accel_ranges: ACCEL_RANGES,
    gyro_ranges: GYRO_RANGES,
    default_accel_range: AccelRange::G4,
    pedometer_enable: BitLocation {
        address: CTRL10_C,
        bit: 4,
    },
    i3c_disable_on_init: false,
};
