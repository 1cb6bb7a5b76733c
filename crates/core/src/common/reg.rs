//! Saved general-purpose register context.
//!
//! The trap-handling layer owns the real saved context; this type is the view the
//! emulator works against. It provides:
//! 1. **Storage:** The sixteen 32-bit general registers as saved at the trap.
//! 2. **Flag Merging:** Read-modify-write of the status slot that leaves bits 0-27 untouched.
//! 3. **Observability:** A dump helper for diagnostics.

use std::fmt;

use super::constants::{CPSR, GPR_COUNT};
use crate::core::units::fpu::Flags;

/// Mask of the status bits owned by the host (everything below the flag nibble).
const HOST_STATUS_MASK: u32 = 0x0FFF_FFFF;

/// The saved register context of the trapping thread.
///
/// Slot 0 holds the accumulator `r0` handed to the entry point; slot 14 holds
/// the status word whose top nibble carries the condition flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SavedRegisters {
    regs: [u32; GPR_COUNT],
}

impl SavedRegisters {
    /// Creates a context with every register zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context holding only the accumulator, as the trap handler
    /// convention passes it.
    pub fn with_accumulator(r0: u32) -> Self {
        let mut regs = Self::default();
        regs.regs[0] = r0;
        regs
    }

    /// Creates a context from a full register array.
    pub fn from_array(regs: [u32; GPR_COUNT]) -> Self {
        Self { regs }
    }

    /// Reads a general register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    /// Writes a general register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    /// * `val` - The value to store.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx] = val;
    }

    /// Returns the saved status word.
    pub fn cpsr(&self) -> u32 {
        self.regs[CPSR]
    }

    /// Replaces the condition flags in the status word, preserving bits 0-27.
    pub fn merge_flags(&mut self, flags: Flags) {
        self.regs[CPSR] = (self.regs[CPSR] & HOST_STATUS_MASK) | flags.bits();
    }

    /// Returns the registers as an array, for handing back to the trap layer.
    pub fn as_array(&self) -> &[u32; GPR_COUNT] {
        &self.regs
    }
}

impl fmt::Display for SavedRegisters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, val) in self.regs.iter().enumerate() {
            let sep = if i % 4 == 3 { "\n" } else { "  " };
            write!(f, "r{i:<2} {val:#010x}{sep}")?;
        }
        Ok(())
    }
}
