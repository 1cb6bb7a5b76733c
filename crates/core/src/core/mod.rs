//! Emulator core.
//!
//! This module contains the emulation session, the instruction classifier and
//! dispatcher, the architectural register file, and the execution units.

/// Architectural state (the FPA register file).
pub mod arch;

/// Emulation session, dispatcher, and trap entry point.
pub mod cpu;

/// Execution units (format converter, FPU, load/store, idiom recognizer).
pub mod units;

pub use self::cpu::{AbortHandler, Emulator, ProcessAbort};
