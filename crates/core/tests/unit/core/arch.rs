//! FPA register file tests.

use armfpe_core::core::arch::FloatRegisterFile;
use armfpe_core::isa::decode::Operand;
use armfpe_core::isa::opcodes::CONSTANT_TABLE;
use rstest::rstest;

#[test]
fn registers_start_at_positive_zero() {
    let fpr = FloatRegisterFile::new();
    for i in 0..8 {
        assert_eq!(fpr.read(i), 0);
    }
}

#[test]
fn write_read_keeps_raw_bits() {
    let mut fpr = FloatRegisterFile::new();
    // A signalling NaN pattern survives untouched.
    fpr.write(7, 0x7FF0_0000_0000_0001);
    assert_eq!(fpr.read(7), 0x7FF0_0000_0000_0001);
    assert_eq!(fpr.read(6), 0);
}

#[rstest]
#[case(0, 0.0)]
#[case(1, 1.0)]
#[case(2, 2.0)]
#[case(3, 3.0)]
#[case(4, 4.0)]
#[case(5, 5.0)]
#[case(6, 0.5)]
#[case(7, 10.0)]
fn constant_operands_resolve_to_table(#[case] idx: usize, #[case] value: f64) {
    let fpr = FloatRegisterFile::new();
    assert_eq!(fpr.resolve(Operand::Constant(idx)), value.to_bits());
    assert_eq!(CONSTANT_TABLE[idx], value.to_bits());
}

#[test]
fn register_operand_resolves_to_register() {
    let mut fpr = FloatRegisterFile::new();
    fpr.write(3, 42.0f64.to_bits());
    assert_eq!(fpr.resolve(Operand::Register(3)), 42.0f64.to_bits());
}

#[test]
fn dump_lists_every_register() {
    let mut fpr = FloatRegisterFile::new();
    fpr.write(1, 1.5f64.to_bits());
    let dump = fpr.to_string();
    assert_eq!(dump.lines().count(), 8);
    assert!(dump.contains("f1: 3ff8000000000000 (1.5)"));
}
