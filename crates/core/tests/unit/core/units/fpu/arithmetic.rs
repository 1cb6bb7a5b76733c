//! `mvf` and `muf` tests.
//!
//! The multiply truncates, so exact products must match the host exactly and every
//! other product must be the host's rounded result or one ulp below it.

use armfpe_core::common::Fault;
use armfpe_core::core::arch::FloatRegisterFile;
use armfpe_core::core::units::fpu::Fpu;
use armfpe_core::core::units::fpu::arithmetic::multiply;
use armfpe_core::isa::decode::decode_data_op;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::{
    EXTENDED, adfd, data_op, freg, konst, mufd, mvfd, mvfs, sqtd,
};

fn mul(a: f64, b: f64) -> f64 {
    f64::from_bits(multiply(a.to_bits(), b.to_bits()))
}

fn exec(inst: u32, fpr: &mut FloatRegisterFile) -> Result<(), Fault> {
    Fpu::execute(0x8000, &decode_data_op(inst), fpr)
}

#[rstest]
#[case(2.0, 2.0, 4.0)]
#[case(1.5, 1.5, 2.25)]
#[case(-3.0, 4.0, -12.0)]
#[case(-0.5, -0.5, 0.25)]
#[case(10.0, 0.5, 5.0)]
#[case(1.75, 1.75, 3.0625)]
fn exact_products(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
    assert_eq!(mul(a, b), expected);
}

#[test]
fn product_needing_renormalization() {
    // 1.5 * 1.5 reaches the top bit of the holding register; 1.25 * 1.25 does not.
    assert_eq!(mul(1.5, 1.5), 2.25);
    assert_eq!(mul(1.25, 1.25), 1.5625);
}

#[test]
fn inexact_product_truncates() {
    // 0.1 * 3 rounds up on the host; truncation lands one ulp below.
    let host = 0.1f64 * 3.0;
    let emulated = mul(0.1, 3.0);
    assert!(emulated.to_bits() == host.to_bits() || emulated.to_bits() == host.to_bits() - 1);
    assert!(emulated <= host);
}

proptest! {
    #[test]
    fn integer_products_are_exact(a in 1u32..(1 << 20), b in 1u32..(1 << 20), neg in any::<bool>()) {
        let a = if neg { -f64::from(a) } else { f64::from(a) };
        let b = f64::from(b);
        prop_assert_eq!(mul(a, b).to_bits(), (a * b).to_bits());
    }

    #[test]
    fn products_are_truncated_host_products(a in 1e-100f64..1e100, b in 1e-100f64..1e100) {
        let host = (a * b).to_bits();
        let emulated = multiply(a.to_bits(), b.to_bits());
        prop_assert!(emulated == host || emulated == host - 1, "{a} * {b}");
    }

    #[test]
    fn sign_is_exclusive_or(a in 1e-10f64..1e10, b in 1e-10f64..1e10) {
        prop_assert_eq!(mul(-a, b), -mul(a, b));
        prop_assert_eq!(mul(-a, -b), mul(a, b));
    }
}

#[rstest]
#[case(konst(0), 0.0)]
#[case(konst(1), 1.0)]
#[case(konst(2), 2.0)]
#[case(konst(3), 3.0)]
#[case(konst(4), 4.0)]
#[case(konst(5), 5.0)]
#[case(konst(6), 0.5)]
#[case(konst(7), 10.0)]
fn mvf_loads_constants(#[case] fm: u32, #[case] value: f64) {
    for fd in 0..8 {
        let mut fpr = FloatRegisterFile::new();
        fpr.write(fd as usize, 99.0f64.to_bits());
        exec(mvfd(fd, fm), &mut fpr).unwrap();
        assert_eq!(fpr.read(fd as usize), value.to_bits());
    }
}

#[test]
fn mvf_copies_every_register_pair() {
    for src in 0..8u32 {
        for dst in 0..8u32 {
            let mut fpr = FloatRegisterFile::new();
            for i in 0..8 {
                fpr.write(i, f64::from(i as u32 + 100).to_bits());
            }
            let expected = fpr.read(src as usize);
            exec(mvfd(dst, freg(src)), &mut fpr).unwrap();
            assert_eq!(fpr.read(dst as usize), expected, "mvfd f{dst}, f{src}");
        }
    }
}

#[test]
fn single_precision_mvf_keeps_double_pattern() {
    let mut fpr = FloatRegisterFile::new();
    fpr.write(1, 0.1f64.to_bits());
    exec(mvfs(0, freg(1)), &mut fpr).unwrap();
    assert_eq!(fpr.read(0), 0.1f64.to_bits());
}

#[test]
fn muf_reads_register_and_constant() {
    let mut fpr = FloatRegisterFile::new();
    fpr.write(2, 7.0f64.to_bits());
    exec(mufd(3, 2, konst(7)), &mut fpr).unwrap();
    assert_eq!(f64::from_bits(fpr.read(3)), 70.0);
}

#[rstest]
#[case::sqt(sqtd(0, freg(1)), "sqtd")]
#[case::adf(adfd(0, 1, freg(2)), "adfd")]
fn unmodeled_opcodes_fault_without_writing(#[case] inst: u32, #[case] mnemonic: &str) {
    let mut fpr = FloatRegisterFile::new();
    fpr.write(0, 1.0f64.to_bits());
    fpr.write(1, 4.0f64.to_bits());
    let before = fpr;

    let err = exec(inst, &mut fpr).unwrap_err();
    assert!(matches!(err, Fault::UnimplementedOpcode { pc: 0x8000, .. }));
    assert!(err.to_string().contains(mnemonic), "{err}");
    assert_eq!(fpr, before);
}

#[test]
fn extended_precision_faults() {
    let mut fpr = FloatRegisterFile::new();
    let err = exec(data_op(0, true, EXTENDED, 0, 0, konst(1)), &mut fpr).unwrap_err();
    assert!(matches!(err, Fault::UnsupportedPrecision { .. }));
    assert_eq!(fpr.read(0), 0);
}
