//! Machine-learning-core program loading
//!
//! The MLC runs small decision-tree models over filtered sensor data. ST
//! distributes a model as a UCF file, which boils down to a sequence of
//! (register, value) writes. Parsing the file is out of scope here; the
//! loader takes the pair sequence and replays it verbatim through a write
//! callback supplied by the driver.

/// Bits of `EMB_FUNC_EN_A` that must be cleared while an MLC program is
/// being activated (the rest are preserved for later restoration)
pub const EMB_FUNC_EN_A_MASK: u8 = 0xC7;

/// Bits of `EMB_FUNC_EN_B` that must be cleared while an MLC program is
/// being activated
pub const EMB_FUNC_EN_B_MASK: u8 = 0xE6;

/// Length in bytes of the MLC result struct at `MLC0_SRC`
pub const MLC_OUTPUT_LEN: usize = 8;

/// MLC program writer
pub struct MlcLoader;

impl MlcLoader {
    /// Replay a `(register, value)` program through `write_fn`
    ///
    /// The pairs come from a vendor-supplied UCF configuration and are
    /// written in order, unmodified; they address both banks (the program
    /// includes its own bank-select writes), so no bank handling happens
    /// here.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first write error; the device is left with
    /// the writes made so far, as the chip has no transactional
    /// configuration mechanism.
    pub fn write_program<E, F>(mut write_fn: F, program: &[(u8, u8)]) -> Result<(), E>
    where
        F: FnMut(u8, u8) -> Result<(), E>,
    {
        for &(address, value) in program {
            write_fn(address, value)?;
        }
        Ok(())
    }
}
