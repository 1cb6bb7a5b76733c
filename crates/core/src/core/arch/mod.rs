//! Architectural state of the emulated coprocessor.

/// FPA floating-point register file.
pub mod fpr;

pub use fpr::FloatRegisterFile;
