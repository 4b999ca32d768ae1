//! Register definitions for the LSM6DS family
//!
//! The parts covered here (LSM6DSOX, LSM6DSO32, LSM6DS33, LSM6DS3,
//! LSM6DS3TR-C, ISM330DHCX) share the control-register layout below. The
//! per-model differences (chip ID, full-scale tables, the relocated
//! pedometer-enable bit) are carried by [`crate::models::SensorModel`] and
//! applied through raw interface accesses in the driver, not here.
//!
//! ## Banking
//!
//! `MLC_INT1` (0x0D) and the `EMB_FUNC_EN_A/B` bytes live in the
//! embedded-functions bank, selected through the `FUNC_CFG_ACCESS` bit; the
//! driver wraps every access to them in a bank select/deselect pair.
//!
//! Multi-byte output runs (temperature, gyro/accel samples, step counter,
//! MLC result) are read through the raw register interface so that each
//! burst is a single auto-incremented bus transaction; their start addresses
//! are defined in the driver.

device_driver::create_device!(
    device_name: Lsm6ds,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        /// FUNC_CFG_ACCESS - Embedded functions configuration access (0x01)
        register FuncCfgAccess {
            const ADDRESS = 0x01;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..6,
            /// Sensor-hub register access
            shub_reg_access: bool = 6,
            /// Embedded-functions register access (bank select)
            func_cfg_en: bool = 7,
        },

        /// MLC_INT1 - MLC interrupt routing (embedded bank, 0x0D)
        register MlcInt1 {
            const ADDRESS = 0x0D;
            const SIZE_BITS = 8;

            /// Route MLC1 result-ready to the INT1 pin
            mlc_ready: bool = 0,
            reserved_1: uint = 1..8,
        },

        /// WHO_AM_I - Device ID register (0x0F)
        register WhoAmI {
            const ADDRESS = 0x0F;
            const SIZE_BITS = 8;

            /// Device ID (0x6C, 0x69, 0x6B or 0x6A depending on the part)
            id: uint = 0..8,
        },

        /// CTRL1_XL - Accelerometer control (0x10)
        register Ctrl1Xl {
            const ADDRESS = 0x10;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..2,
            /// Accelerometer full-scale selection
            fs_xl: uint = 2..4,
            /// Accelerometer output data rate selection
            odr_xl: uint = 4..8,
        },

        /// CTRL2_G - Gyroscope control (0x11)
        register Ctrl2G {
            const ADDRESS = 0x11;
            const SIZE_BITS = 8;

            /// 4000 dps full scale (ISM330DHCX only, reserved elsewhere)
            fs_4000: bool = 0,
            /// 125 dps full scale (takes precedence over `fs_g`)
            fs_125: bool = 1,
            /// Gyroscope full-scale selection (250/500/1000/2000 dps)
            fs_g: uint = 2..4,
            /// Gyroscope output data rate selection
            odr_g: uint = 4..8,
        },

        /// CTRL3_C - Common control (0x12)
        register Ctrl3C {
            const ADDRESS = 0x12;
            const SIZE_BITS = 8;

            /// Software reset (hardware clears the bit when done)
            sw_reset: bool = 0,
            reserved_1: uint = 1..2,
            /// Register address auto-increment during multi-byte access
            if_inc: bool = 2,
            /// SPI mode selection (3/4-wire)
            sim: bool = 3,
            /// Push-pull / open-drain on the interrupt pads
            pp_od: bool = 4,
            /// Interrupt active level
            h_lactive: bool = 5,
            /// Block data update - output registers freeze until both bytes
            /// of a sample have been read
            bdu: bool = 6,
            /// Reboot memory content
            boot: bool = 7,
        },

        /// CTRL8_XL - Accelerometer filter control (0x17)
        register Ctrl8Xl {
            const ADDRESS = 0x17;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..5,
            /// Accelerometer high-pass filter cutoff selection
            hpcf_xl: uint = 5..7,
            reserved_7: uint = 7..8,
        },

        /// CTRL9_XL - Accelerometer control / device configuration (0x18)
        register Ctrl9Xl {
            const ADDRESS = 0x18;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..1,
            /// Disable the I3C interface (called DEVICE_CONF on the
            /// ISM330DHCX, which recommends setting it)
            i3c_disable: bool = 1,
            reserved_2: uint = 2..8,
        },

        /// CTRL10_C - Embedded functions control (0x19)
        register Ctrl10C {
            const ADDRESS = 0x19;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..1,
            /// Reset the step counter
            pedo_rst_step: bool = 1,
            /// Embedded functions (pedometer, tilt, significant motion) enable
            func_en: bool = 2,
            reserved_3: uint = 3..8,
        },

        /// MLC_STATUS_MAINPAGE - MLC result status (0x38)
        register MlcStatus {
            const ADDRESS = 0x38;
            const SIZE_BITS = 8;

            /// A new MLC1 result is available in MLC0_SRC
            mlc_ready: bool = 0,
            reserved_1: uint = 1..8,
        },

        /// TAP_CFG0 - Tap/interrupt configuration (0x56)
        register TapCfg0 {
            const ADDRESS = 0x56;
            const SIZE_BITS = 8;

            /// Latched interrupt mode
            lir: bool = 0,
            reserved_1: uint = 1..6,
            /// Clear latched interrupts on any status read
            int_clr_on_read: bool = 6,
            reserved_7: uint = 7..8,
        },
    }
);
