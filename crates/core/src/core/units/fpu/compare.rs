//! FPA compare (`cmf`).
//!
//! Orders two double patterns by inspecting their fields rather than by IEEE total
//! order:
//! 1. Identical patterns are equal.
//! 2. Differing signs decide by sign alone, so `+0` is greater than `-0`.
//! 3. Same signs compare exponent, then mantissa; when both are negative the pair
//!    is swapped first so the larger magnitude orders lower.
//!
//! NaNs and infinities order like any other exponent/mantissa pair.

use super::flags::Flags;
use crate::core::units::convert::{mantissa, sign, unbiased_exponent};

/// Compares `lhs` with `rhs` and returns the condition flags.
///
/// `Z|C` when the patterns are identical, `C` when `lhs` orders above `rhs`,
/// `N` when it orders below.
pub fn compare(lhs: u64, rhs: u64) -> Flags {
    if lhs == rhs {
        return Flags::Z | Flags::C;
    }

    match (sign(lhs), sign(rhs)) {
        (1, 0) => return Flags::N,
        (0, 1) => return Flags::C,
        _ => {}
    }

    // Both negative: a larger magnitude is the smaller value.
    let (left, right) = if sign(lhs) == 0 { (lhs, rhs) } else { (rhs, lhs) };
    let left_key = (unbiased_exponent(left), mantissa(left));
    let right_key = (unbiased_exponent(right), mantissa(right));

    if left_key > right_key { Flags::C } else { Flags::N }
}
