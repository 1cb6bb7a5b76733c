//! FPA data operations.
//!
//! Only two data operations are modeled:
//! - `mvf`: copy the right-hand operand into the destination, bit for bit.
//! - `muf`: multiply by integer arithmetic on the significands, truncating.
//!
//! Precision only selects whether the instruction is accepted; the result is always
//! held as a double pattern. Zero, denormal, infinite, and NaN operands are not
//! special-cased by the multiply.

use crate::common::Fault;
use crate::common::constants::{
    DOUBLE_EXP_BIAS, DOUBLE_EXP_MASK, DOUBLE_MANTISSA_BITS, DOUBLE_MANTISSA_MASK,
    DOUBLE_SIGN_BIT,
};
use crate::core::arch::FloatRegisterFile;
use crate::core::units::convert::{mantissa, unbiased_exponent};
use crate::isa::decode::DataOp;
use crate::isa::disasm;
use crate::isa::opcodes::{MUF, MVF};

/// The implicit leading one of a normalized significand.
const IMPLICIT_ONE: u64 = 1 << DOUBLE_MANTISSA_BITS;

/// Shift taking the 106-bit significand product down to its top 64 bits.
const HOLD_SHIFT: u32 = 42;

/// Shift from the holding register to the mantissa field when bit 62 leads.
const NORMAL_SHIFT: u32 = 10;

/// Executes a data operation.
///
/// # Arguments
///
/// * `pc`  - Address of the instruction, for the diagnostic.
/// * `op`  - The decoded data operation.
/// * `fpr` - The floating register file; written only on success.
///
/// # Returns
///
/// A [`Fault`] for unmodeled precisions and for every opcode other than
/// unary `mvf` and binary `muf`.
pub fn execute(pc: u32, op: &DataOp, fpr: &mut FloatRegisterFile) -> Result<(), Fault> {
    if !op.precision.is_modeled() {
        return Err(Fault::UnsupportedPrecision {
            pc,
            listing: disasm::listing(pc, op.raw),
        });
    }

    let result = match (op.unary, op.opcode) {
        (true, MVF) => fpr.resolve(op.fm),
        (false, MUF) => multiply(fpr.read(op.fn_reg), fpr.resolve(op.fm)),
        _ => {
            return Err(Fault::UnimplementedOpcode {
                pc,
                listing: disasm::listing(pc, op.raw),
            });
        }
    };
    fpr.write(op.fd, result);
    Ok(())
}

/// Multiplies two double patterns.
///
/// Both 53-bit significands (implicit one restored) are multiplied into a 106-bit
/// product whose top 64 bits form the holding register. If the product reached
/// bit 63 of the holding register it is renormalized by an 11-bit shift and the
/// exponent bumped; otherwise a 10-bit shift aligns it. Bits below the mantissa
/// are dropped, so the result is the truncated product.
pub fn multiply(a: u64, b: u64) -> u64 {
    let sig_a = u128::from(mantissa(a) | IMPLICIT_ONE);
    let sig_b = u128::from(mantissa(b) | IMPLICIT_ONE);
    let hold = ((sig_a * sig_b) >> HOLD_SHIFT) as u64;

    let renorm = (hold >> 63) as u32;
    let frac = (hold >> (NORMAL_SHIFT + renorm)) & DOUBLE_MANTISSA_MASK;

    let exp = (unbiased_exponent(a) + unbiased_exponent(b) + renorm as i32 + DOUBLE_EXP_BIAS)
        as u64
        & DOUBLE_EXP_MASK;
    let sign = (a ^ b) & DOUBLE_SIGN_BIT;

    sign | (exp << DOUBLE_MANTISSA_BITS) | frac
}
