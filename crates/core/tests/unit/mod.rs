//! # Unit Components
//!
//! Fine-grained tests for each emulator component, organized like the crate.

/// Session configuration parsing and defaults.
pub mod config;


/// Field extraction, decoding, idiom templates, and disassembly.
pub mod isa;

/// Image loading.
pub mod sim;
