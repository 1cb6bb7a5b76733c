//! Field extraction and decoding tests.

use armfpe_core::isa::decode::{
    Operand, Precision, decode_compare, decode_data_op, decode_transfer,
};
use armfpe_core::isa::idiom::{ADD_BASE, FP_TRANSFER, LOAD_DISPLACEMENT, TEMPLATES};
use armfpe_core::isa::instruction::FpaBits;
use rstest::rstest;

use crate::common::builder::instruction::{
    DOUBLE, EXTENDED, SINGLE, TransferBuilder, cmf, data_op, freg, konst, mufd,
};

#[test]
fn data_op_fields() {
    let op = decode_data_op(mufd(5, 6, konst(3)));
    assert_eq!(op.opcode, 1);
    assert!(!op.unary);
    assert_eq!(op.fd, 5);
    assert_eq!(op.fn_reg, 6);
    assert_eq!(op.fm, Operand::Constant(3));
    assert_eq!(op.precision, Precision::Double);
    assert_eq!(op.mnemonic(), "muf");
}

#[rstest]
#[case(SINGLE, Precision::Single)]
#[case(DOUBLE, Precision::Double)]
#[case(EXTENDED, Precision::Extended)]
#[case(0b11, Precision::Unknown)]
fn precision_comes_from_bits_19_and_7(#[case] bits: u32, #[case] expected: Precision) {
    let word = data_op(0, true, bits, 0, 0, freg(0));
    assert_eq!(word.precision_bits(), bits);
    assert_eq!(decode_data_op(word).precision, expected);
}

#[test]
fn compare_fields() {
    let op = decode_compare(cmf(3, freg(7)));
    assert_eq!(op.fn_reg, 3);
    assert_eq!(op.fm, Operand::Register(7));
}

#[test]
fn transfer_fields() {
    let t = decode_transfer(
        TransferBuilder::stf()
            .double()
            .fd(6)
            .base(9)
            .offset(-1020)
            .build(),
    );
    assert!(!t.load);
    assert!(!t.up);
    assert!(t.pre_index);
    assert!(!t.write_back);
    assert_eq!(t.coproc, 1);
    assert_eq!(t.length, Precision::Double);
    assert_eq!(t.base, 9);
    assert_eq!(t.fd, 6);
    assert_eq!(t.offset, 1020);
    assert_eq!(t.effective_address(0x2000), 0x2000 - 1020);
}

#[test]
fn transfer_length_uses_bits_22_and_15() {
    let w = TransferBuilder::ldf().extended().double().build();
    assert_eq!(w.transfer_len_bits(), 0b11);
    assert_eq!(decode_transfer(w).length, Precision::Unknown);
}

#[test]
fn effective_address_wraps() {
    let t = decode_transfer(TransferBuilder::ldf().offset(-8).build());
    assert_eq!(t.effective_address(4), 0xFFFF_FFFC);
}

#[test]
fn idiom_templates_in_order() {
    assert_eq!(TEMPLATES, [LOAD_DISPLACEMENT, ADD_BASE, FP_TRANSFER]);
    assert!(LOAD_DISPLACEMENT.matches(0xE59F_BFFF));
    assert!(!LOAD_DISPLACEMENT.matches(0xE59F_A000));
    assert!(ADD_BASE.matches(0xE08B_B00C));
    assert!(FP_TRANSFER.matches(TransferBuilder::stf().double().base(11).offset(-4).build()));
    assert!(!FP_TRANSFER.matches(TransferBuilder::ldf().base(10).build()));
}
