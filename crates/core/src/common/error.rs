//! Fault and bus error definitions.
//!
//! This module defines the error handling for the emulator. It provides:
//! 1. **Fatal Faults:** Every way a recognized FPA instruction can fall outside the
//!    modeled subset. These are never recovered from; the entry point hands them to
//!    the configured fault policy.
//! 2. **Bus Errors:** Failures reported by the host memory while fetching words or
//!    performing a transfer.
//!
//! "Not a floating-point instruction" is deliberately not an error: the dispatcher
//! reports it by consuming zero words.

use thiserror::Error;

/// Errors reported by a [`Bus`](crate::soc::Bus) implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BusError {
    /// The address is not backed by memory.
    #[error("unmapped address {0:#010x}")]
    Unmapped(u32),

    /// The address is not aligned to the access size.
    #[error("misaligned access at {0:#010x}")]
    Misaligned(u32),
}

/// A recognized FPA instruction that this emulator does not model.
///
/// Each variant carries the address of the faulting instruction and the
/// disassembly listing printed in the fatal diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// Data-processing opcode other than `mvf` or `muf`.
    #[error("unsupported floating point instruction: {listing}")]
    UnimplementedOpcode {
        /// Address of the instruction.
        pc: u32,
        /// Disassembly of the instruction.
        listing: String,
    },

    /// Precision field encoding extended or an undefined precision.
    #[error("unsupported floating point precision: {listing}")]
    UnsupportedPrecision {
        /// Address of the instruction.
        pc: u32,
        /// Disassembly of the instruction.
        listing: String,
    },

    /// Register-transfer form other than a compare into the flags.
    #[error("unmodeled floating point register transfer: {listing}")]
    UnmodeledRegisterTransfer {
        /// Address of the instruction.
        pc: u32,
        /// Disassembly of the instruction.
        listing: String,
    },

    /// Load/store whose coprocessor, indexing, write-back, length, or base
    /// register falls outside the modeled subset.
    #[error("malformed floating point transfer ({reason}): {listing}")]
    MalformedTransfer {
        /// Address of the instruction.
        pc: u32,
        /// Which structural field mismatched.
        reason: &'static str,
        /// Disassembly of the instruction.
        listing: String,
    },

    /// Three-word window carried the idiom signature but not the idiom.
    #[error("unrecognized constant load sequence: {listing}")]
    IdiomMismatch {
        /// Address of the first word of the window.
        pc: u32,
        /// Listing of the three raw words.
        listing: String,
    },

    /// Memory access failed while emulating an instruction.
    #[error("bus error while emulating {pc:#010x}: {source}")]
    Bus {
        /// Address of the instruction being emulated.
        pc: u32,
        /// The underlying bus failure.
        #[source]
        source: BusError,
    },
}

impl Fault {
    /// Returns the address of the instruction that raised the fault.
    pub fn pc(&self) -> u32 {
        match self {
            Self::UnimplementedOpcode { pc, .. }
            | Self::UnsupportedPrecision { pc, .. }
            | Self::UnmodeledRegisterTransfer { pc, .. }
            | Self::MalformedTransfer { pc, .. }
            | Self::IdiomMismatch { pc, .. }
            | Self::Bus { pc, .. } => *pc,
        }
    }

    /// Returns the same fault reported against `pc`.
    ///
    /// Used when the faulting word is part of a larger sequence that the host must
    /// re-execute from its first word.
    pub fn at(mut self, pc: u32) -> Self {
        match &mut self {
            Self::UnimplementedOpcode { pc: at, .. }
            | Self::UnsupportedPrecision { pc: at, .. }
            | Self::UnmodeledRegisterTransfer { pc: at, .. }
            | Self::MalformedTransfer { pc: at, .. }
            | Self::IdiomMismatch { pc: at, .. }
            | Self::Bus { pc: at, .. } => *at = pc,
        }
        self
    }

    /// Wraps a bus error raised while emulating the instruction at `pc`.
    pub fn bus(pc: u32) -> impl FnOnce(BusError) -> Self {
        move |source| Self::Bus { pc, source }
    }
}
