//! Calibrated-value tables
//!
//! Every configuration axis of the sensor (full-scale range, output data
//! rate, high-pass filter mode) has a fixed set of legal settings, each with
//! a raw register encoding and, where it applies, an LSB-to-physical-unit
//! scale factor. These are chip-family constants, so they are kept as
//! immutable data tables rather than branching logic; model variants swap in
//! a different table instead of overriding driver code.

/// One legal setting of a configuration axis
///
/// `scale` is the physical value of one raw LSB at this setting (milli-g for
/// accelerometer ranges, milli-dps for gyro ranges) and `None` where no
/// scale applies (data rates, filter modes).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibratedValue<V: 'static> {
    /// The typed setting this entry describes
    pub value: V,
    /// Raw register encoding (don't-care for settings selected through a
    /// dedicated bit, such as the 125/4000 dps gyro ranges)
    pub bits: u8,
    /// Human-readable label
    pub label: &'static str,
    /// LSB-to-physical-unit multiplier, if applicable
    pub scale: Option<f32>,
}

/// An immutable lookup table of [`CalibratedValue`]s
///
/// Later entries shadow earlier ones with the same `value`, so a model
/// variant can extend a base table by appending overriding entries.
/// Lookups for values the table does not carry return `None`; the driver
/// maps that to an error instead of touching the hardware.
#[derive(Debug, Clone, Copy)]
pub struct ValueTable<V: 'static>(&'static [CalibratedValue<V>]);

impl<V: Copy + PartialEq> ValueTable<V> {
    /// Create a table over a static slice of entries
    pub const fn new(entries: &'static [CalibratedValue<V>]) -> Self {
        Self(entries)
    }

    /// Find the entry for `value`, preferring the latest registration
    pub fn lookup(&self, value: V) -> Option<&'static CalibratedValue<V>> {
        self.0.iter().rev().find(|entry| entry.value == value)
    }

    /// Whether `value` is a member of this table
    pub fn is_valid(&self, value: V) -> bool {
        self.lookup(value).is_some()
    }

    /// Raw register encoding for `value`
    pub fn bits(&self, value: V) -> Option<u8> {
        self.lookup(value).map(|entry| entry.bits)
    }

    /// LSB scale factor for `value`
    pub fn scale(&self, value: V) -> Option<f32> {
        self.lookup(value).and_then(|entry| entry.scale)
    }

    /// Human-readable label for `value`
    pub fn label(&self, value: V) -> Option<&'static str> {
        self.lookup(value).map(|entry| entry.label)
    }

    /// All entries, in registration order
    pub const fn entries(&self) -> &'static [CalibratedValue<V>] {
        self.0
    }
}
