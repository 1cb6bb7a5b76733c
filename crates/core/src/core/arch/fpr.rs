//! FPA Floating-Point Register File.
//!
//! This module implements the register file of the emulated coprocessor.
//! It performs the following:
//! 1. **Storage:** Maintains the eight floating registers (`f0`-`f7`) as raw 64-bit
//!    IEEE-754 patterns, whatever precision the program asked for.
//! 2. **Operand Resolution:** Resolves a right-hand operand to either a register or an
//!    entry of the immediate constant table.
//! 3. **Observability:** Formats the file for trace dumps.

use std::fmt;

use crate::common::constants::FPR_COUNT;
use crate::isa::decode::Operand;
use crate::isa::opcodes::CONSTANT_TABLE;

/// Floating-point register file.
///
/// Registers hold double-precision bit patterns; single-precision values are
/// widened on load and narrowed on store by the load/store unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloatRegisterFile {
    fregs: [u64; FPR_COUNT],
}

impl FloatRegisterFile {
    /// Creates a register file with every register holding `+0.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register as raw bits.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    #[inline]
    pub fn read(&self, idx: usize) -> u64 {
        self.fregs[idx]
    }

    /// Writes a register from raw bits.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The 64-bit IEEE-754 pattern.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u64) {
        self.fregs[idx] = val;
    }

    /// Resolves a right-hand operand to its bit pattern.
    #[inline]
    pub fn resolve(&self, operand: Operand) -> u64 {
        match operand {
            Operand::Register(idx) => self.fregs[idx],
            Operand::Constant(idx) => CONSTANT_TABLE[idx],
        }
    }
}

impl fmt::Display for FloatRegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bits) in self.fregs.iter().enumerate() {
            writeln!(f, "f{i}: {bits:016x} ({})", f64::from_bits(*bits))?;
        }
        Ok(())
    }
}
