//! Common types and constants shared by the decoder and the execution units.
//!
//! This module provides the fundamental building blocks used across the emulator:
//! 1. **Constants:** Register indices, IEEE-754 field layouts, and addressing offsets.
//! 2. **Error Handling:** Fatal emulation faults and bus access errors.
//! 3. **Register Context:** The saved general-purpose registers of the trapping thread.

/// Common constants used throughout the emulator.
pub mod constants;

/// Error types for fatal faults and memory access.
pub mod error;

/// Saved general-purpose register context.
pub mod reg;

pub use constants::{CPSR, WORD_BYTES};
pub use error::{BusError, Fault};
pub use reg::SavedRegisters;
