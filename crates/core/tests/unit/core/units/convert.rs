//! Single/double conversion tests.

use armfpe_core::core::units::convert::{
    double_to_single, mantissa, sign, single_to_double, unbiased_exponent,
};
use proptest::prelude::*;

#[test]
fn field_extraction() {
    let bits = (-6.0f64).to_bits();
    assert_eq!(sign(bits), 1);
    assert_eq!(unbiased_exponent(bits), 2);
    assert_eq!(mantissa(bits), 0x0008_0000_0000_0000);
}

#[test]
fn negative_singles_keep_their_sign() {
    assert_eq!(single_to_double((-1.0f32).to_bits()), (-1.0f64).to_bits());
    assert_eq!(double_to_single((-1.0f64).to_bits()), (-1.0f32).to_bits());
}

#[test]
fn zero_is_rebiased_like_any_other_exponent() {
    assert_eq!(single_to_double(0), 0x3800_0000_0000_0000);
    assert_eq!(double_to_single(0), 0x4000_0000);
}

proptest! {
    #[test]
    fn normal_single_round_trips(s in proptest::num::f32::NORMAL) {
        let d = single_to_double(s.to_bits());
        prop_assert_eq!(d, f64::from(s).to_bits());
        prop_assert_eq!(double_to_single(d), s.to_bits());
    }

    #[test]
    fn narrowing_never_rounds_away_from_zero(d in 1e-30f64..1e30) {
        let s = f32::from_bits(double_to_single(d.to_bits()));
        prop_assert!(f64::from(s) <= d);
        prop_assert!(d - f64::from(s) < d * f64::from(f32::EPSILON));
    }
}
