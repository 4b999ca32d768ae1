//! Output data rate selection, shared by accelerometer and gyroscope

use crate::calibration::{CalibratedValue, ValueTable};

/// Output data rate
///
/// The same encoding is used for the accelerometer (`ODR_XL`) and the
/// gyroscope (`ODR_G`), with one exception: [`DataRate::Hz1_6`] is an
/// accelerometer-only low-power mode and is rejected by the gyroscope
/// rate setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    /// Power-down
    Shutdown,
    /// 1.6 Hz (accelerometer low-power mode only)
    Hz1_6,
    /// 12.5 Hz
    Hz12_5,
    /// 26 Hz
    Hz26,
    /// 52 Hz
    Hz52,
    /// 104 Hz (family default)
    Hz104,
    /// 208 Hz
    Hz208,
    /// 416 Hz
    Hz416,
    /// 833 Hz
    Hz833,
    /// 1.66 kHz
    Khz1_66,
    /// 3.33 kHz
    Khz3_33,
    /// 6.66 kHz
    Khz6_66,
}

impl DataRate {
    /// Nominal output frequency in Hz
    #[must_use]
    pub const fn frequency_hz(self) -> f32 {
        match self {
            Self::Shutdown => 0.0,
            Self::Hz1_6 => 1.6,
            Self::Hz12_5 => 12.5,
            Self::Hz26 => 26.0,
            Self::Hz52 => 52.0,
            Self::Hz104 => 104.0,
            Self::Hz208 => 208.0,
            Self::Hz416 => 416.0,
            Self::Hz833 => 833.0,
            Self::Khz1_66 => 1666.0,
            Self::Khz3_33 => 3332.0,
            Self::Khz6_66 => 6664.0,
        }
    }
}

/// Data-rate table, shared by the whole family
pub const DATA_RATES: ValueTable<DataRate> = ValueTable::new(&[
    CalibratedValue {
        value: DataRate::Shutdown,
        bits: 0,
        label: "SHUTDOWN",
        scale: None,
    },
    CalibratedValue {
        value: DataRate::Hz12_5,
        bits: 1,
        label: "12.5 Hz",
        scale: None,
    },
    CalibratedValue {
        value: DataRate::Hz26,
        bits: 2,
        label: "26 Hz",
        scale: None,
    },
    CalibratedValue {
        value: DataRate::Hz52,
        bits: 3,
        label: "52 Hz",
        scale: None,
    },
    CalibratedValue {
        value: DataRate::Hz104,
        bits: 4,
        label: "104 Hz",
        scale: None,
    },
    CalibratedValue {
        value: DataRate::Hz208,
        bits: 5,
        label: "208 Hz",
        scale: None,
    },
    CalibratedValue {
        value: DataRate::Hz416,
        bits: 6,
        label: "416 Hz",
        scale: None,
    },
    CalibratedValue {
        value: DataRate::Hz833,
        bits: 7,
        label: "833 Hz",
        scale: None,
    },
    CalibratedValue {
        value: DataRate::Khz1_66,
        bits: 8,
        label: "1.66 kHz",
        scale: None,
    },
    CalibratedValue {
        value: DataRate::Khz3_33,
        bits: 9,
        label: "3.33 kHz",
        scale: None,
    },
    CalibratedValue {
        value: DataRate::Khz6_66,
        bits: 10,
        label: "6.66 kHz",
        scale: None,
    },
    CalibratedValue {
        value: DataRate::Hz1_6,
        bits: 11,
        label: "1.6 Hz",
        scale: None,
    },
]);
