//! Gyroscope types and calibration tables

use crate::calibration::{CalibratedValue, ValueTable};

/// Gyroscope full-scale range
///
/// The 250-2000 dps ranges use the 2-bit `FS_G` field; 125 dps and the
/// ISM330DHCX-only 4000 dps are selected through dedicated bits, so their
/// table entries carry a don't-care encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    /// ±125 dps (dedicated `FS_125` bit)
    Dps125,
    /// ±250 dps (family default)
    Dps250,
    /// ±500 dps
    Dps500,
    /// ±1000 dps
    Dps1000,
    /// ±2000 dps
    Dps2000,
    /// ±4000 dps (ISM330DHCX only, dedicated `FS_4000` bit)
    Dps4000,
}

impl GyroRange {
    /// Maximum measurable rate in degrees per second
    #[must_use]
    pub const fn max_dps(self) -> u16 {
        match self {
            Self::Dps125 => 125,
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps1000 => 1000,
            Self::Dps2000 => 2000,
            Self::Dps4000 => 4000,
        }
    }
}

/// Full-scale table shared by every part except the ISM330DHCX
///
/// Scales are in milli-dps per LSB.
pub const GYRO_RANGES: ValueTable<GyroRange> = ValueTable::new(&[
    CalibratedValue {
        value: GyroRange::Dps125,
        bits: 0b00,
        label: "125 DPS",
        scale: Some(4.375),
    },
    CalibratedValue {
        value: GyroRange::Dps250,
        bits: 0b00,
        label: "250 DPS",
        scale: Some(8.75),
    },
    CalibratedValue {
        value: GyroRange::Dps500,
        bits: 0b01,
        label: "500 DPS",
        scale: Some(17.5),
    },
    CalibratedValue {
        value: GyroRange::Dps1000,
        bits: 0b10,
        label: "1000 DPS",
        scale: Some(35.0),
    },
    CalibratedValue {
        value: GyroRange::Dps2000,
        bits: 0b11,
        label: "2000 DPS",
        scale: Some(70.0),
    },
]);

/// Full-scale table for the ISM330DHCX, which adds the 4000 dps range
pub const GYRO_RANGES_EXTENDED: ValueTable<GyroRange> = ValueTable::new(&[
    CalibratedValue {
        value: GyroRange::Dps125,
        bits: 0b00,
        label: "125 DPS",
        scale: Some(4.375),
    },
    CalibratedValue {
        value: GyroRange::Dps250,
        bits: 0b00,
        label: "250 DPS",
        scale: Some(8.75),
    },
    CalibratedValue {
        value: GyroRange::Dps500,
        bits: 0b01,
        label: "500 DPS",
        scale: Some(17.5),
    },
    CalibratedValue {
        value: GyroRange::Dps1000,
        bits: 0b10,
        label: "1000 DPS",
        scale: Some(35.0),
    },
    CalibratedValue {
        value: GyroRange::Dps2000,
        bits: 0b11,
        label: "2000 DPS",
        scale: Some(70.0),
    },
    CalibratedValue {
        value: GyroRange::Dps4000,
        bits: 0b00,
        label: "4000 DPS",
        scale: Some(140.0),
    },
]);

/// Angular rate in rad/s
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngularRate {
    /// X-axis angular rate in rad/s
    pub x: f32,
    /// Y-axis angular rate in rad/s
    pub y: f32,
    /// Z-axis angular rate in rad/s
    pub z: f32,
}

impl AngularRate {
    /// Convert a raw sample using the milli-dps-per-LSB scale of the active
    /// full-scale range
    #[must_use]
    pub fn from_raw(raw: [i16; 3], scale_mdps: f32) -> Self {
        Self {
            x: (f32::from(raw[0]) * scale_mdps / 1000.0).to_radians(),
            y: (f32::from(raw[1]) * scale_mdps / 1000.0).to_radians(),
            z: (f32::from(raw[2]) * scale_mdps / 1000.0).to_radians(),
        }
    }
}
