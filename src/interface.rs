//! Bus interface implementation for the LSM6DS family
//!
//! This module provides an implementation of the `device-driver` register
//! interface trait for I2C communication with the sensor.

use crate::I2C_ADDRESS_DEFAULT;

use device_driver::RegisterInterface;

/// I2C interface for an LSM6DS sensor
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x6A, SDO/SA0 LOW)
    ///
    /// This is the most common configuration where the SDO/SA0 pin is pulled
    /// low or left floating.
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut imu = Lsm6dsDriver::new(interface, delay, &models::LSM6DSOX)?;
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_DEFAULT,
        }
    }

    /// Create a new I2C interface with the alternative address (0x6B, SDO/SA0 HIGH)
    ///
    /// Use this when the SDO/SA0 pin is explicitly pulled high to VDD.
    pub const fn alternative(i2c: I2C) -> Self {
        Self {
            i2c,
            address: crate::I2C_ADDRESS_ALT,
        }
    }

    /// Create a new I2C interface with a custom device address
    ///
    /// For standard wiring, prefer [`default()`](Self::default) or
    /// [`alternative()`](Self::alternative).
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    /// * `address` - The 7-bit I2C device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        // The sensor auto-increments the register address, so a multi-byte
        // read covers a whole sample burst in one bus transaction.
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for I2C
        // Create a buffer with address + data
        let mut buffer = [0u8; 9]; // Max: 1 address + 8 data bytes
        buffer[0] = address;
        let len = write_data.len().min(8);
        buffer[1..=len].copy_from_slice(&write_data[..len]);

        self.i2c.write(self.address, &buffer[..=len])
    }
}
