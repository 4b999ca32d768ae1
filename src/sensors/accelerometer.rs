//! Accelerometer types and calibration tables

use crate::calibration::{CalibratedValue, ValueTable};

/// Conversion from milli-g to m/s²
pub const MILLI_G_TO_MS2: f32 = 0.009_806_65;

/// Accelerometer full-scale range
///
/// Which ranges a part supports, and how they encode, depends on the model:
/// the LSM6DSO32 trades the ±2G setting for ±32G and shuffles the encodings
/// of the shared ranges. The per-model [`ValueTable`] carries that mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// ±2g (most sensitive)
    G2,
    /// ±4g (family default)
    G4,
    /// ±8g
    G8,
    /// ±16g
    G16,
    /// ±32g (LSM6DSO32 only)
    G32,
}

impl AccelRange {
    /// Maximum measurable acceleration in g
    #[must_use]
    pub const fn max_g(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
            Self::G32 => 32,
        }
    }
}

/// Full-scale table shared by every part except the LSM6DSO32
///
/// Scales are in milli-g per LSB. Note the encoding order: 16G sits at 0b01,
/// between 2G and 4G.
pub const ACCEL_RANGES: ValueTable<AccelRange> = ValueTable::new(&[
    CalibratedValue {
        value: AccelRange::G2,
        bits: 0b00,
        label: "2G",
        scale: Some(0.061),
    },
    CalibratedValue {
        value: AccelRange::G16,
        bits: 0b01,
        label: "16G",
        scale: Some(0.488),
    },
    CalibratedValue {
        value: AccelRange::G4,
        bits: 0b10,
        label: "4G",
        scale: Some(0.122),
    },
    CalibratedValue {
        value: AccelRange::G8,
        bits: 0b11,
        label: "8G",
        scale: Some(0.244),
    },
]);

/// Full-scale table for the LSM6DSO32 (±4g to ±32g)
pub const ACCEL_RANGES_WIDE: ValueTable<AccelRange> = ValueTable::new(&[
    CalibratedValue {
        value: AccelRange::G4,
        bits: 0b00,
        label: "4G",
        scale: Some(0.122),
    },
    CalibratedValue {
        value: AccelRange::G32,
        bits: 0b01,
        label: "32G",
        scale: Some(0.976),
    },
    CalibratedValue {
        value: AccelRange::G8,
        bits: 0b10,
        label: "8G",
        scale: Some(0.244),
    },
    CalibratedValue {
        value: AccelRange::G16,
        bits: 0b11,
        label: "16G",
        scale: Some(0.488),
    },
]);

/// Accelerometer slope/high-pass filter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HighPassFilter {
    /// Slope filter (default)
    Slope,
    /// High-pass filter, cutoff = ODR/100
    Div100,
    /// High-pass filter, cutoff = ODR/9
    Div9,
    /// High-pass filter, cutoff = ODR/400
    Div400,
}

/// High-pass filter table, shared by the whole family
pub const HIGH_PASS_FILTERS: ValueTable<HighPassFilter> = ValueTable::new(&[
    CalibratedValue {
        value: HighPassFilter::Slope,
        bits: 0b00,
        label: "SLOPE",
        scale: None,
    },
    CalibratedValue {
        value: HighPassFilter::Div100,
        bits: 0b01,
        label: "HPF ODR/100",
        scale: None,
    },
    CalibratedValue {
        value: HighPassFilter::Div9,
        bits: 0b10,
        label: "HPF ODR/9",
        scale: None,
    },
    CalibratedValue {
        value: HighPassFilter::Div400,
        bits: 0b11,
        label: "HPF ODR/400",
        scale: None,
    },
]);

/// Acceleration in m/s²
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    /// X-axis acceleration in m/s²
    pub x: f32,
    /// Y-axis acceleration in m/s²
    pub y: f32,
    /// Z-axis acceleration in m/s²
    pub z: f32,
}

impl Acceleration {
    /// Convert a raw sample using the milli-g-per-LSB scale of the active
    /// full-scale range
    #[must_use]
    pub fn from_raw(raw: [i16; 3], scale_mg: f32) -> Self {
        Self {
            x: f32::from(raw[0]) * scale_mg * MILLI_G_TO_MS2,
            y: f32::from(raw[1]) * scale_mg * MILLI_G_TO_MS2,
            z: f32::from(raw[2]) * scale_mg * MILLI_G_TO_MS2,
        }
    }
}
