//! Disassembler output tests.

use armfpe_core::isa::disasm::{disassemble, idiom_listing, listing};
use rstest::rstest;

use crate::common::builder::instruction::{
    FLT, NOP, SWI, TransferBuilder, adfd, cmf, freg, konst, mufd, mvfd, mvfs, sqtd,
};

#[rstest]
#[case(mvfd(0, konst(2)), "mvfd f0, #2.0")]
#[case(mvfs(7, freg(3)), "mvfs f7, f3")]
#[case(mufd(1, 2, konst(6)), "mufd f1, f2, #0.5")]
#[case(adfd(3, 4, freg(5)), "adfd f3, f4, f5")]
#[case(sqtd(0, konst(7)), "sqtd f0, #10.0")]
#[case(cmf(1, konst(0)), "cmf f1, #0.0")]
#[case(FLT, "flts f0, r0")]
#[case(SWI, "swi 0x11")]
#[case(NOP, ".word 0xe1a00000")]
fn data_and_register_forms(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(disassemble(word), expected);
}

#[rstest]
#[case(TransferBuilder::ldf().fd(1).base(3).offset(16), "ldfs f1, [r3, #16]")]
#[case(TransferBuilder::stf().double().fd(2).base(3).offset(-16), "stfd f2, [r3, #-16]")]
#[case(TransferBuilder::ldf().write_back().base(13).offset(8), "ldfs f0, [r13, #8]!")]
#[case(TransferBuilder::stf().post_indexed().base(4).offset(4), "stfs f0, [r4], #4")]
#[case(TransferBuilder::ldf().extended(), "ldfe f0, [r0, #0]")]
#[case(TransferBuilder::ldf().coproc(2).base(1), "ldc p2, c0, [r1, #0]")]
fn transfer_forms(#[case] builder: TransferBuilder, #[case] expected: &str) {
    assert_eq!(disassemble(builder.build()), expected);
}

#[test]
fn listing_has_address_and_raw_word() {
    assert_eq!(
        listing(0x8000, 0xEE10_0189),
        "0x00008000 ee100189  mufd f0, f0, #1.0"
    );
}

#[test]
fn idiom_listing_shows_all_three_words() {
    let line = idiom_listing(0x100, [0xE59F_B010, 0xE08B_B00C, 0xED9B_8100]);
    assert_eq!(line, "0x00000100 e59fb010 e08bb00c ed9b8100  fpconst");
}
