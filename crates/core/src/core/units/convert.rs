//! IEEE-754 Format Converter.
//!
//! Moves values between the 32-bit and 64-bit encodings by repositioning fields:
//! the exponent is rebiased by `1023 - 127` and the mantissa shifted by 29 bits.
//! Narrowing truncates the low 29 mantissa bits. Zero, denormals, infinities, and
//! NaNs get no special treatment; their exponents are rebiased like any other.

use crate::common::constants::{
    DOUBLE_EXP_BIAS, DOUBLE_EXP_MASK, DOUBLE_MANTISSA_BITS, DOUBLE_MANTISSA_MASK,
    SINGLE_EXP_BIAS, SINGLE_EXP_MASK, SINGLE_MANTISSA_BITS, SINGLE_MANTISSA_MASK,
    SINGLE_SIGN_BIT,
};

/// Distance between the two mantissa fields.
const MANTISSA_SHIFT: u32 = DOUBLE_MANTISSA_BITS - SINGLE_MANTISSA_BITS;

/// Difference between the two exponent biases.
const BIAS_DELTA: u32 = (DOUBLE_EXP_BIAS - SINGLE_EXP_BIAS) as u32;

/// Returns the sign bit (0 or 1) of a double pattern.
#[inline]
pub fn sign(bits: u64) -> u32 {
    (bits >> 63) as u32 & 1
}

/// Returns the unbiased exponent of a double pattern.
#[inline]
pub fn unbiased_exponent(bits: u64) -> i32 {
    ((bits >> DOUBLE_MANTISSA_BITS) & DOUBLE_EXP_MASK) as i32 - DOUBLE_EXP_BIAS
}

/// Returns the 52-bit mantissa field of a double pattern.
#[inline]
pub fn mantissa(bits: u64) -> u64 {
    bits & DOUBLE_MANTISSA_MASK
}

/// Narrows a double pattern to a single pattern.
///
/// The exponent is rebiased and wrapped to 8 bits; the mantissa keeps its top 23 bits.
#[inline]
pub fn double_to_single(bits: u64) -> u32 {
    let sign = (bits >> 32) as u32 & SINGLE_SIGN_BIT;
    let exp = ((unbiased_exponent(bits) + SINGLE_EXP_BIAS) as u32 & SINGLE_EXP_MASK)
        << SINGLE_MANTISSA_BITS;
    let mant = (bits >> MANTISSA_SHIFT) as u32 & SINGLE_MANTISSA_MASK;
    sign | exp | mant
}

/// Widens a single pattern to a double pattern.
///
/// Exact for every normal single-precision value.
#[inline]
pub fn single_to_double(bits: u32) -> u64 {
    let sign = u64::from(bits & SINGLE_SIGN_BIT) << 32;
    let exp = u64::from(((bits >> SINGLE_MANTISSA_BITS) & SINGLE_EXP_MASK) + BIAS_DELTA)
        << DOUBLE_MANTISSA_BITS;
    let mant = u64::from(bits & SINGLE_MANTISSA_MASK) << MANTISSA_SHIFT;
    sign | exp | mant
}
