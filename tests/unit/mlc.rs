//! Unit tests for machine-learning-core program loading and result reads

use crate::common::{create_mock_driver, Operation};
use lsm6ds::models::LSM6DSOX;
use lsm6ds::MemoryBank;

const EMB_FUNC_EN_A: u8 = 0x04;
const EMB_FUNC_EN_B: u8 = 0x05;
const MLC_INT1: u8 = 0x0D;
const CTRL3_C: u8 = 0x12;
const CTRL9_XL: u8 = 0x18;
const TAP_CFG0: u8 = 0x56;
const MLC0_SRC: u8 = 0x70;

#[test]
fn test_program_pairs_written_verbatim_in_order() {
    let (mut driver, interface) = create_mock_driver(&LSM6DSOX);
    interface.clear_operations();

    let program = [(0x02u8, 0xAAu8), (0x08, 0xBB), (0x09, 0xCC)];
    driver.load_mlc_program(&program).unwrap();

    let writes: Vec<(u8, u8)> = interface
        .operations()
        .iter()
        .filter_map(|op| match op {
            Operation::WriteRegister { address, value, .. } => Some((*address, *value)),
            _ => None,
        })
        .collect();
    assert_eq!(
        &writes[..3],
        &program[..],
        "program writes must come first, unmodified"
    );
}

#[test]
fn test_program_bank_selects_are_replayed() {
    let (mut driver, interface) = create_mock_driver(&LSM6DSOX);

    // A realistic program addresses the embedded bank through its own
    // bank-select writes
    let program = [
        (0x01u8, 0x80u8),
        (0x02, 0x11),
        (0x03, 0x22),
        (0x01, 0x00),
    ];
    driver.load_mlc_program(&program).unwrap();

    assert_eq!(interface.get_register(MemoryBank::Embedded, 0x02), 0x11);
    assert_eq!(interface.get_register(MemoryBank::Embedded, 0x03), 0x22);
}

#[test]
fn test_activation_routes_interrupt_and_latches() {
    let (mut driver, interface) = create_mock_driver(&LSM6DSOX);
    driver.load_mlc_program(&[]).unwrap();

    let mlc_int1 = interface.get_register(MemoryBank::Embedded, MLC_INT1);
    assert_ne!(mlc_int1 & 0x01, 0, "result-ready must be routed to INT1");

    let tap_cfg0 = interface.get_register(MemoryBank::User, TAP_CFG0);
    assert_ne!(tap_cfg0 & 0x01, 0, "LIR must be set");
    assert_ne!(tap_cfg0 & 0x40, 0, "INT_CLR_ON_READ must be set");

    let ctrl9 = interface.get_register(MemoryBank::User, CTRL9_XL);
    assert_ne!(ctrl9 & 0x02, 0, "I3C must be disabled");

    let ctrl3 = interface.get_register(MemoryBank::User, CTRL3_C);
    assert_ne!(ctrl3 & 0x40, 0, "BDU must be enabled");
}

#[test]
fn test_activation_steps_run_while_embedded_functions_are_disabled() {
    let (mut driver, interface) = create_mock_driver(&LSM6DSOX);
    interface.clear_operations();
    driver.load_mlc_program(&[]).unwrap();

    let writes: Vec<(MemoryBank, u8)> = interface
        .operations()
        .iter()
        .filter_map(|op| match op {
            Operation::WriteRegister { bank, address, .. } => Some((*bank, *address)),
            _ => None,
        })
        .collect();

    let save = writes
        .iter()
        .position(|w| *w == (MemoryBank::Embedded, EMB_FUNC_EN_A))
        .expect("enable bytes must be masked");
    let restore = writes
        .iter()
        .rposition(|w| *w == (MemoryBank::Embedded, EMB_FUNC_EN_A))
        .unwrap();
    assert!(save < restore, "restore must come after the masking write");

    // I3C disable, BDU, INT1 routing and latch configuration all happen
    // between the masking write and the restore
    for target in [
        (MemoryBank::User, CTRL9_XL),
        (MemoryBank::User, CTRL3_C),
        (MemoryBank::Embedded, MLC_INT1),
        (MemoryBank::User, TAP_CFG0),
    ] {
        let pos = writes
            .iter()
            .position(|w| *w == target)
            .unwrap_or_else(|| panic!("missing write to {:#04x}", target.1));
        assert!(
            save < pos && pos < restore,
            "write to {:#04x} out of order",
            target.1
        );
    }
}

#[test]
fn test_embedded_function_enables_are_saved_and_restored() {
    let (mut driver, interface) = create_mock_driver(&LSM6DSOX);
    interface.set_register(MemoryBank::Embedded, EMB_FUNC_EN_A, 0xFF);
    interface.set_register(MemoryBank::Embedded, EMB_FUNC_EN_B, 0xFF);

    driver.load_mlc_program(&[]).unwrap();

    // Masked while activation runs, original values restored at the end
    let en_a_writes = interface.writes_to(MemoryBank::Embedded, EMB_FUNC_EN_A);
    assert_eq!(en_a_writes, [0xC7, 0xFF]);

    let en_b_writes = interface.writes_to(MemoryBank::Embedded, EMB_FUNC_EN_B);
    assert_eq!(en_b_writes, [0xE6, 0xFF]);

    assert_eq!(
        interface.get_register(MemoryBank::Embedded, EMB_FUNC_EN_A),
        0xFF
    );
}

#[test]
fn test_load_leaves_user_bank_selected() {
    let (mut driver, interface) = create_mock_driver(&LSM6DSOX);
    driver.load_mlc_program(&[(0x02, 0x01)]).unwrap();
    assert_eq!(interface.current_bank(), MemoryBank::User);
}

#[test]
fn test_output_none_until_ready() {
    let (mut driver, interface) = create_mock_driver(&LSM6DSOX);

    interface.set_mlc_ready(false);
    assert_eq!(driver.read_mlc_output().unwrap(), None);

    // Not ready means the embedded bank is never touched
    interface.clear_operations();
    driver.read_mlc_output().unwrap();
    assert!(!interface
        .operations()
        .iter()
        .any(|op| matches!(op, Operation::BankSelect { .. })));
}

#[test]
fn test_output_read_from_embedded_bank() {
    let (mut driver, interface) = create_mock_driver(&LSM6DSOX);
    let output = [1u8, 2, 3, 4, 5, 6, 7, 8];
    interface.set_mlc_output(&output);
    interface.set_mlc_ready(true);

    assert_eq!(driver.read_mlc_output().unwrap(), Some(output));
    assert_eq!(interface.current_bank(), MemoryBank::User);

    // The burst must land on MLC0_SRC in the embedded bank
    let read_embedded = interface.operations().iter().any(|op| {
        matches!(op, Operation::ReadRegister { bank, address, .. }
            if *bank == MemoryBank::Embedded && *address == MLC0_SRC)
    });
    assert!(read_embedded);
}
