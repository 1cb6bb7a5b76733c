//! Floating-Point Unit (FPU).
//!
//! This module implements the data operations and compares of the emulated
//! coprocessor on raw double-precision bit patterns, using integer arithmetic only.
//!
//! Operations are organized into submodules:
//! - [`arithmetic`]: `mvf` and `muf`; every other data operation faults.
//! - [`compare`]: `cmf`, producing condition [`Flags`].
//! - [`flags`]: the condition flag type.

/// Data operations (move and multiply).
pub mod arithmetic;

/// Floating compare.
pub mod compare;

/// Condition flags.
pub mod flags;

pub use self::flags::Flags;

use crate::common::Fault;
use crate::core::arch::FloatRegisterFile;
use crate::isa::decode::{CompareOp, DataOp};

/// Floating-Point Unit for FPA data operations and compares.
#[derive(Debug)]
pub struct Fpu;

impl Fpu {
    /// Executes a data operation against the register file.
    ///
    /// Delegates to [`arithmetic::execute`]. The register file is untouched when
    /// a fault is returned.
    ///
    /// # Arguments
    ///
    /// * `pc`  - Address of the instruction, for the diagnostic.
    /// * `op`  - The decoded data operation.
    /// * `fpr` - The floating register file.
    pub fn execute(pc: u32, op: &DataOp, fpr: &mut FloatRegisterFile) -> Result<(), Fault> {
        arithmetic::execute(pc, op, fpr)
    }

    /// Compares two operands and returns the resulting condition flags.
    ///
    /// Delegates to [`compare::compare`].
    pub fn compare(op: &CompareOp, fpr: &FloatRegisterFile) -> Flags {
        compare::compare(fpr.read(op.fn_reg), fpr.resolve(op.fm))
    }
}
