//! Unit tests for error propagation and failure modes

use crate::common::mock_interface::MockError;
use crate::common::{create_mock_driver, MockDelay, MockInterface, Operation};
use lsm6ds::models::{LSM6DS33, LSM6DSOX};
use lsm6ds::sensors::AccelRange;
use lsm6ds::{Error, Lsm6dsDriver};

#[test]
fn test_wrong_chip_id_reports_actual_value() {
    // A LSM6DS33 answering where a LSM6DSOX was expected
    let interface = MockInterface::with_chip_id(LSM6DS33.chip_id);
    let handle = interface.clone();

    let result = Lsm6dsDriver::new(interface, MockDelay, &LSM6DSOX);
    match result {
        Err(Error::DeviceNotFound(id)) => assert_eq!(id, 0x69),
        other => panic!("expected DeviceNotFound, got {:?}", other.err()),
    }

    // A rejected construction must leave the device untouched: the
    // WHO_AM_I read happens, and nothing is written afterwards
    let ops = handle.operations();
    assert!(ops
        .iter()
        .any(|op| matches!(op, Operation::ReadRegister { address: 0x0F, .. })));
    assert!(
        !ops.iter().any(|op| matches!(
            op,
            Operation::WriteRegister { .. } | Operation::BankSelect { .. }
        )),
        "rejected construction must not write, got {:?}",
        ops
    );
}

#[test]
fn test_bus_error_during_chip_id_read() {
    let interface = MockInterface::with_chip_id(LSM6DSOX.chip_id);
    interface.fail_next_read();

    let result = Lsm6dsDriver::new(interface, MockDelay, &LSM6DSOX);
    match result {
        Err(Error::Bus(MockError::Communication)) => {}
        other => panic!("expected Bus error, got {:?}", other.err()),
    }
}

#[test]
fn test_hung_reset_times_out() {
    let interface = MockInterface::with_chip_id(LSM6DSOX.chip_id);
    interface.hold_reset();

    let result = Lsm6dsDriver::new(interface, MockDelay, &LSM6DSOX);
    match result {
        Err(Error::ResetTimeout) => {}
        other => panic!("expected ResetTimeout, got {:?}", other.err()),
    }
}

#[test]
fn test_bus_error_during_reset_poll_propagates() {
    let (mut driver, interface) = create_mock_driver(&LSM6DSOX);

    // Keep the reset bit stuck and kill the bus after the read of the
    // reset write's read-modify-write; the first poll read then fails. A
    // dead transport must surface as a bus error, not as a reset timeout.
    interface.hold_reset();
    interface.fail_reads_after(1);

    assert_eq!(
        driver.reset(),
        Err(Error::Bus(MockError::Communication))
    );
}

#[test]
fn test_write_failure_leaves_cache_untouched() {
    let (mut driver, interface) = create_mock_driver(&LSM6DSOX);
    assert_eq!(driver.accelerometer_range(), AccelRange::G4);

    interface.fail_next_write();
    let result = driver.set_accelerometer_range(AccelRange::G16);
    assert!(matches!(result, Err(Error::Bus(_))));

    // The cached range still matches what the hardware holds
    assert_eq!(driver.accelerometer_range(), AccelRange::G4);
}

#[test]
fn test_read_failure_is_transient() {
    let (mut driver, interface) = create_mock_driver(&LSM6DSOX);

    interface.fail_next_read();
    assert!(driver.read_acceleration().is_err());

    // The failure was injected for one operation only
    interface.set_accel_data(1, 2, 3);
    assert!(driver.read_acceleration().is_ok());
}

#[test]
fn test_error_conversion_from_bus_error() {
    let error: Error<MockError> = MockError::Communication.into();
    assert_eq!(error, Error::Bus(MockError::Communication));
}
