//! High-level driver API for the LSM6DS family
//!
//! This module provides the user-facing driver: chip identification, reset
//! and default configuration, range/rate/filter configuration with cached
//! scale factors, scaled measurement reads, pedometer control and
//! machine-learning-core handling.

use crate::mlc::{EMB_FUNC_EN_A_MASK, EMB_FUNC_EN_B_MASK, MLC_OUTPUT_LEN, MlcLoader};
use crate::models::{BitLocation, SensorModel};
use crate::registers::Lsm6ds as RegisterDevice;
use crate::sensors::accelerometer::HIGH_PASS_FILTERS;
use crate::sensors::rate::DATA_RATES;
use crate::sensors::{
    AccelRange, Acceleration, AngularRate, DataRate, GyroRange, HighPassFilter,
};
use crate::{Error, MemoryBank};

use device_driver::RegisterInterface;
use embedded_hal::delay::DelayNs;

// Multi-byte output runs, read through the raw interface in one
// auto-incremented transaction each.
const OUT_TEMP_L: u8 = 0x20;
const OUTX_L_G: u8 = 0x22;
const OUTX_L_A: u8 = 0x28;
const STEP_COUNTER_L: u8 = 0x4B;
const MLC0_SRC: u8 = 0x70;

// Embedded-function enable bytes (embedded bank)
const EMB_FUNC_EN_A: u8 = 0x04;
const EMB_FUNC_EN_B: u8 = 0x05;

/// Settling time after a full-scale change, per datasheet (analog filter
/// settling); the driver blocks for this long inside the range setters so
/// that a read issued right after a setter returns is already trustworthy.
const RANGE_SETTLE_MS: u32 = 200;

/// Reset poll window. The datasheet quotes the software reset as
/// sub-millisecond; a device that holds the bit past this window is faulty
/// and surfaces as [`Error::ResetTimeout`].
const RESET_MAX_WAIT_MS: u32 = 100;
const RESET_POLL_INTERVAL_MS: u32 = 1;

/// Main driver for an LSM6DS family sensor
///
/// Generic over the register interface `I` (see
/// [`I2cInterface`](crate::I2cInterface)) and a delay provider `D`. The
/// driver owns the delay because two operations block internally: the reset
/// poll and the range-settle wait.
pub struct Lsm6dsDriver<I, D> {
    device: RegisterDevice<I>,
    delay: D,
    model: &'static SensorModel,
    // Cached configuration; scale lookups for measurement reads go through
    // these, never through a fresh hardware read per sample.
    accel_range: AccelRange,
    gyro_range: GyroRange,
    accel_rate: DataRate,
    gyro_rate: DataRate,
    high_pass_filter: HighPassFilter,
}

impl<I, D> Lsm6dsDriver<I, D>
where
    I: RegisterInterface<AddressType = u8>,
    D: DelayNs,
{
    /// Create and initialize a driver for the given model
    ///
    /// Verifies the `WHO_AM_I` register against the model's chip ID, resets
    /// the sensor into the family default configuration (see
    /// [`reset`](Self::reset)) and applies the model extras (I3C disable
    /// where the datasheet recommends it).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] with the actual ID byte if the
    /// chip-ID check fails, and propagates bus or reset errors from
    /// initialization.
    pub fn new(
        interface: I,
        delay: D,
        model: &'static SensorModel,
    ) -> Result<Self, Error<I::Error>> {
        let device = RegisterDevice::new(interface);
        let mut driver = Self {
            device,
            delay,
            model,
            accel_range: model.default_accel_range,
            gyro_range: GyroRange::Dps250,
            accel_rate: DataRate::Hz104,
            gyro_rate: DataRate::Hz104,
            high_pass_filter: HighPassFilter::Slope,
        };

        let id = driver.device.who_am_i().read()?.id();
        if id != model.chip_id {
            return Err(Error::DeviceNotFound(id));
        }

        driver.reset()?;

        if model.i3c_disable_on_init {
            driver
                .device
                .ctrl_9_xl()
                .modify(|w| w.set_i_3_c_disable(true))?;
        }

        Ok(driver)
    }

    /// Reset the sensor into the family default configuration
    ///
    /// Sets the software-reset bit and polls until hardware clears it, then
    /// enables block data update and applies the defaults: 104 Hz output
    /// data rate on both sensors, the model's default accelerometer range
    /// (±4G, or ±8G on the LSM6DSO32) and ±250 dps gyro range. Calling this
    /// twice in a row is harmless; the second call lands in the same state.
    ///
    /// Blocks for up to [`RESET_MAX_WAIT_MS`] while polling, plus one
    /// settle period per range applied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResetTimeout`] if the reset bit never clears. Bus
    /// errors, from the poll reads as much as from the configuration
    /// writes, propagate unmodified.
    pub fn reset(&mut self) -> Result<(), Error<I::Error>> {
        self.device.ctrl_3_c().modify(|w| w.set_sw_reset(true))?;

        let mut cleared = false;
        for _ in 0..(RESET_MAX_WAIT_MS / RESET_POLL_INTERVAL_MS) {
            self.delay.delay_ms(RESET_POLL_INTERVAL_MS);
            if !self.device.ctrl_3_c().read()?.sw_reset() {
                cleared = true;
                break;
            }
        }
        if !cleared {
            return Err(Error::ResetTimeout);
        }

        // BDU first, so the default-configuration reads that follow cannot
        // observe torn samples.
        self.device.ctrl_3_c().modify(|w| w.set_bdu(true))?;

        self.set_accelerometer_data_rate(DataRate::Hz104)?;
        self.set_gyro_data_rate(DataRate::Hz104)?;
        self.set_accelerometer_range(self.model.default_accel_range)?;
        self.set_gyro_range(GyroRange::Dps250)?;

        Ok(())
    }

    /// The model descriptor this driver was constructed with
    pub const fn model(&self) -> &'static SensorModel {
        self.model
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    // ==================== Configuration ====================

    /// Set the accelerometer full-scale range
    ///
    /// Blocks for 200 ms after the write to let the new range settle, so a
    /// measurement taken immediately after this returns is already scaled
    /// correctly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedRange`] if this model's table does not
    /// carry the range (e.g. ±32G outside the LSM6DSO32); no hardware state
    /// changes in that case.
    pub fn set_accelerometer_range(&mut self, range: AccelRange) -> Result<(), Error<I::Error>> {
        let bits = self
            .model
            .accel_ranges
            .bits(range)
            .ok_or(Error::UnsupportedRange)?;

        self.device.ctrl_1_xl().modify(|w| w.set_fs_xl(bits))?;
        self.accel_range = range;
        self.delay.delay_ms(RANGE_SETTLE_MS);
        Ok(())
    }

    /// The cached accelerometer range (the value last written, never a
    /// fresh hardware read)
    pub const fn accelerometer_range(&self) -> AccelRange {
        self.accel_range
    }

    /// Set the gyroscope full-scale range
    ///
    /// The 250-2000 dps ranges use the 2-bit `FS_G` field with the
    /// dedicated bits cleared; 125 dps and 4000 dps are selected through
    /// their dedicated bits instead. Blocks for 200 ms to settle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedRange`] for 4000 dps on any model but
    /// the ISM330DHCX; no hardware state changes in that case.
    pub fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), Error<I::Error>> {
        let entry = self
            .model
            .gyro_ranges
            .lookup(range)
            .ok_or(Error::UnsupportedRange)?;
        let extended = self.model.gyro_ranges.is_valid(GyroRange::Dps4000);

        match range {
            GyroRange::Dps125 => {
                self.device.ctrl_2_g().modify(|w| w.set_fs_125(true))?;
                if extended {
                    self.device.ctrl_2_g().modify(|w| w.set_fs_4000(false))?;
                }
            }
            GyroRange::Dps4000 => {
                self.device.ctrl_2_g().modify(|w| {
                    w.set_fs_125(false);
                    w.set_fs_4000(true);
                })?;
            }
            _ => {
                let bits = entry.bits;
                self.device.ctrl_2_g().modify(|w| {
                    w.set_fs_125(false);
                    w.set_fs_g(bits);
                })?;
                if extended {
                    self.device.ctrl_2_g().modify(|w| w.set_fs_4000(false))?;
                }
            }
        }

        self.gyro_range = range;
        self.delay.delay_ms(RANGE_SETTLE_MS);
        Ok(())
    }

    /// The cached gyroscope range
    pub const fn gyro_range(&self) -> GyroRange {
        self.gyro_range
    }

    /// Set the accelerometer output data rate
    ///
    /// No settle delay is required for rate changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for a rate outside the
    /// shared rate table.
    pub fn set_accelerometer_data_rate(&mut self, rate: DataRate) -> Result<(), Error<I::Error>> {
        let bits = DATA_RATES.bits(rate).ok_or(Error::InvalidConfiguration)?;
        self.device.ctrl_1_xl().modify(|w| w.set_odr_xl(bits))?;
        self.accel_rate = rate;
        Ok(())
    }

    /// The cached accelerometer data rate
    pub const fn accelerometer_data_rate(&self) -> DataRate {
        self.accel_rate
    }

    /// Set the gyroscope output data rate
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for
    /// [`DataRate::Hz1_6`], which is an accelerometer-only low-power mode,
    /// or any rate outside the shared table.
    pub fn set_gyro_data_rate(&mut self, rate: DataRate) -> Result<(), Error<I::Error>> {
        if rate == DataRate::Hz1_6 {
            return Err(Error::InvalidConfiguration);
        }
        let bits = DATA_RATES.bits(rate).ok_or(Error::InvalidConfiguration)?;
        self.device.ctrl_2_g().modify(|w| w.set_odr_g(bits))?;
        self.gyro_rate = rate;
        Ok(())
    }

    /// The cached gyroscope data rate
    pub const fn gyro_data_rate(&self) -> DataRate {
        self.gyro_rate
    }

    /// Set the accelerometer slope/high-pass filter mode
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for a mode outside the
    /// filter table.
    pub fn set_high_pass_filter(&mut self, filter: HighPassFilter) -> Result<(), Error<I::Error>> {
        let bits = HIGH_PASS_FILTERS
            .bits(filter)
            .ok_or(Error::InvalidConfiguration)?;
        self.device.ctrl_8_xl().modify(|w| w.set_hpcf_xl(bits))?;
        self.high_pass_filter = filter;
        Ok(())
    }

    /// The cached high-pass filter mode
    pub const fn high_pass_filter(&self) -> HighPassFilter {
        self.high_pass_filter
    }

    // ==================== Measurements ====================

    /// Read a raw accelerometer sample
    ///
    /// # Errors
    ///
    /// Propagates bus errors from the transport.
    pub fn read_acceleration_raw(&mut self) -> Result<[i16; 3], Error<I::Error>> {
        self.read_sample(OUTX_L_A)
    }

    /// Read acceleration in m/s²
    ///
    /// Scales the raw sample with the cached range's LSB factor; no extra
    /// bus round-trip happens per measurement.
    ///
    /// # Errors
    ///
    /// Propagates bus errors from the transport.
    pub fn read_acceleration(&mut self) -> Result<Acceleration, Error<I::Error>> {
        let raw = self.read_acceleration_raw()?;
        let scale = self
            .model
            .accel_ranges
            .scale(self.accel_range)
            .ok_or(Error::InvalidConfiguration)?;
        Ok(Acceleration::from_raw(raw, scale))
    }

    /// Read a raw gyroscope sample
    ///
    /// # Errors
    ///
    /// Propagates bus errors from the transport.
    pub fn read_angular_rate_raw(&mut self) -> Result<[i16; 3], Error<I::Error>> {
        self.read_sample(OUTX_L_G)
    }

    /// Read angular rate in rad/s
    ///
    /// # Errors
    ///
    /// Propagates bus errors from the transport.
    pub fn read_angular_rate(&mut self) -> Result<AngularRate, Error<I::Error>> {
        let raw = self.read_angular_rate_raw()?;
        let scale = self
            .model
            .gyro_ranges
            .scale(self.gyro_range)
            .ok_or(Error::InvalidConfiguration)?;
        Ok(AngularRate::from_raw(raw, scale))
    }

    /// Read the raw 16-bit temperature value
    ///
    /// # Errors
    ///
    /// Propagates bus errors from the transport.
    pub fn read_temperature_raw(&mut self) -> Result<i16, Error<I::Error>> {
        let mut buf = [0u8; 2];
        self.device.interface.read_register(OUT_TEMP_L, 16, &mut buf)?;
        Ok(i16::from_le_bytes(buf))
    }

    /// Read the die temperature in °C
    ///
    /// Sensitivity is 256 LSB/°C with a 25 °C offset (datasheet table).
    ///
    /// # Errors
    ///
    /// Propagates bus errors from the transport.
    pub fn read_temperature(&mut self) -> Result<f32, Error<I::Error>> {
        let raw = self.read_temperature_raw()?;
        Ok(f32::from(raw) / 256.0 + 25.0)
    }

    // ==================== Pedometer ====================

    /// Enable or disable the pedometer
    ///
    /// Writes the model's pedometer-enable bit, the embedded-function
    /// enable and the step-counter reset, in that order; the chip expects
    /// the trio to move together.
    ///
    /// # Errors
    ///
    /// Propagates bus errors from the transport.
    pub fn set_pedometer_enable(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.modify_bit(self.model.pedometer_enable, enable)?;
        self.device.ctrl_10_c().modify(|w| w.set_func_en(enable))?;
        self.device
            .ctrl_10_c()
            .modify(|w| w.set_pedo_rst_step(enable))?;
        Ok(())
    }

    /// Whether the pedometer is enabled
    ///
    /// True only when both the pedometer-enable bit and the
    /// embedded-function enable are set.
    ///
    /// # Errors
    ///
    /// Propagates bus errors from the transport.
    pub fn pedometer_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        let ped = self.read_bit(self.model.pedometer_enable)?;
        let func = self.device.ctrl_10_c().read()?.func_en();
        Ok(ped && func)
    }

    /// Read the step counter
    ///
    /// # Errors
    ///
    /// Propagates bus errors from the transport.
    pub fn pedometer_steps(&mut self) -> Result<u16, Error<I::Error>> {
        let mut buf = [0u8; 2];
        self.device
            .interface
            .read_register(STEP_COUNTER_L, 16, &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    /// Reset the step counter to zero
    ///
    /// # Errors
    ///
    /// Propagates bus errors from the transport.
    pub fn reset_step_counter(&mut self) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_10_c()
            .modify(|w| w.set_pedo_rst_step(true))?;
        Ok(())
    }

    // ==================== Machine-learning core ====================

    /// Load an MLC program and activate it
    ///
    /// `program` is the `(register, value)` pair sequence extracted from a
    /// vendor UCF file. The pairs are replayed verbatim, then the chip's
    /// documented activation protocol runs: disable the embedded functions
    /// (saving their enable bytes), disable I3C, enable block data update,
    /// route the result-ready signal to INT1, latch interrupts with
    /// clear-on-read, and restore the saved enables (which by now include
    /// the bits the program itself set). The steps have ordering
    /// dependencies and must not be rearranged.
    ///
    /// Only meaningful on parts with the embedded core (LSM6DSOX,
    /// ISM330DHCX).
    ///
    /// # Errors
    ///
    /// Propagates bus errors. A failed step leaves the device in the state
    /// the failing step reached; the chip offers no transactional
    /// configuration.
    pub fn load_mlc_program(&mut self, program: &[(u8, u8)]) -> Result<(), Error<I::Error>> {
        MlcLoader::write_program(
            |address, value| self.device.interface.write_register(address, 8, &[value]),
            program,
        )?;

        let saved = self.disable_embedded_functions()?;

        self.device
            .ctrl_9_xl()
            .modify(|w| w.set_i_3_c_disable(true))?;
        self.device.ctrl_3_c().modify(|w| w.set_bdu(true))?;

        // Route the MLC result-ready signal to INT1
        self.select_bank(MemoryBank::Embedded)?;
        self.device.mlc_int_1().modify(|w| w.set_mlc_ready(true))?;
        self.select_bank(MemoryBank::User)?;

        // Latched interrupt mode, cleared on status read
        self.device.tap_cfg_0().modify(|w| w.set_lir(true))?;
        self.device
            .tap_cfg_0()
            .modify(|w| w.set_int_clr_on_read(true))?;

        self.restore_embedded_functions(saved)?;
        Ok(())
    }

    /// Read the MLC result, if one is ready
    ///
    /// Returns `None` unless the result-ready status bit is set; otherwise
    /// switches to the embedded bank, reads the 8-byte `MLC0_SRC` struct
    /// and switches back.
    ///
    /// # Errors
    ///
    /// Propagates bus errors from the transport.
    pub fn read_mlc_output(&mut self) -> Result<Option<[u8; MLC_OUTPUT_LEN]>, Error<I::Error>> {
        if !self.device.mlc_status().read()?.mlc_ready() {
            return Ok(None);
        }

        self.select_bank(MemoryBank::Embedded)?;
        let mut buf = [0u8; MLC_OUTPUT_LEN];
        self.device.interface.read_register(MLC0_SRC, 64, &mut buf)?;
        self.select_bank(MemoryBank::User)?;
        Ok(Some(buf))
    }

    // ==================== Internals ====================

    /// Select the register memory bank
    fn select_bank(&mut self, bank: MemoryBank) -> Result<(), Error<I::Error>> {
        let embedded = bank == MemoryBank::Embedded;
        self.device
            .func_cfg_access()
            .modify(|w| w.set_func_cfg_en(embedded))?;
        Ok(())
    }

    /// Read one 3-axis sample (6 bytes, little-endian) in a single bus
    /// transaction; with BDU set the sample cannot tear mid-read
    fn read_sample(&mut self, address: u8) -> Result<[i16; 3], Error<I::Error>> {
        let mut buf = [0u8; 6];
        self.device.interface.read_register(address, 48, &mut buf)?;
        Ok([
            i16::from_le_bytes([buf[0], buf[1]]),
            i16::from_le_bytes([buf[2], buf[3]]),
            i16::from_le_bytes([buf[4], buf[5]]),
        ])
    }

    fn read_byte(&mut self, address: u8) -> Result<u8, Error<I::Error>> {
        let mut buf = [0u8; 1];
        self.device.interface.read_register(address, 8, &mut buf)?;
        Ok(buf[0])
    }

    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Error<I::Error>> {
        self.device.interface.write_register(address, 8, &[value])?;
        Ok(())
    }

    /// Read-modify-write of one bit at a model-dependent location
    fn modify_bit(&mut self, location: BitLocation, set: bool) -> Result<(), Error<I::Error>> {
        let current = self.read_byte(location.address)?;
        let mask = 1u8 << location.bit;
        let value = if set { current | mask } else { current & !mask };
        self.write_byte(location.address, value)
    }

    fn read_bit(&mut self, location: BitLocation) -> Result<bool, Error<I::Error>> {
        Ok(self.read_byte(location.address)? & (1 << location.bit) != 0)
    }

    /// Disable the embedded functions, returning the prior enable bytes
    /// for later restoration
    fn disable_embedded_functions(&mut self) -> Result<(u8, u8), Error<I::Error>> {
        self.select_bank(MemoryBank::Embedded)?;
        let a = self.read_byte(EMB_FUNC_EN_A)?;
        let b = self.read_byte(EMB_FUNC_EN_B)?;
        self.write_byte(EMB_FUNC_EN_A, a & EMB_FUNC_EN_A_MASK)?;
        self.write_byte(EMB_FUNC_EN_B, b & EMB_FUNC_EN_B_MASK)?;
        self.select_bank(MemoryBank::User)?;
        Ok((a, b))
    }

    /// Write back enable bytes saved by [`Self::disable_embedded_functions`]
    fn restore_embedded_functions(&mut self, saved: (u8, u8)) -> Result<(), Error<I::Error>> {
        self.select_bank(MemoryBank::Embedded)?;
        self.write_byte(EMB_FUNC_EN_A, saved.0)?;
        self.write_byte(EMB_FUNC_EN_B, saved.1)?;
        self.select_bank(MemoryBank::User)?;
        Ok(())
    }
}
