//! ARM FPA floating-point emulator library.
//!
//! This crate emulates the subset of ARM FPA coprocessor instructions a compiler
//! emits, for hosts whose CPU traps them as undefined. It provides the following:
//! 1. **Core:** The emulation session, FPA register file, FPU, LSU, and idiom recognizer.
//! 2. **ISA:** Field extraction, decoding, idiom templates, and a disassembler.
//! 3. **Memory:** The [`Bus`] trait a host implements and a flat [`Ram`] image.
//! 4. **Tools:** Configuration, statistics, and an image loader for the CLI.
//!
//! # Example
//!
//! ```
//! use armfpe_core::{Bus, Emulator, EmulatorConfig, Ram, SavedRegisters};
//!
//! // mvfd f0, #2.0 ; mufd f1, f0, f0 ; then a non-floating word.
//! let mut ram = Ram::new(0x1000, 64);
//! ram.load_words(0x1000, &[0xEE00_818A, 0xEE10_1180, 0xE1A0_0000]).unwrap();
//!
//! let mut emu = Emulator::new(EmulatorConfig::default());
//! let mut regs = SavedRegisters::new();
//! let resume = emu.emulate_trap(&mut ram, &mut regs, 0x1000);
//!
//! assert_eq!(resume, 0x1008);
//! assert_eq!(emu.fpr().read(1), 4.0f64.to_bits());
//! ```

/// Common types and constants (errors, saved registers, field widths).
pub mod common;
/// Session configuration (tracing, fault policy).
pub mod config;
/// Emulation core (session, register file, functional units).
pub mod core;
/// Instruction set (fields, decode, idiom templates, disassembly).
pub mod isa;
/// Image loading for tools.
pub mod sim;
/// Memory interface (bus trait, flat RAM).
pub mod soc;
/// Emulation statistics.
pub mod stats;

/// Session configuration; use `EmulatorConfig::default()` or parse from JSON.
pub use crate::config::EmulatorConfig;
/// Emulation session; holds the FPA register file across traps.
pub use crate::core::Emulator;
/// Fatal emulation fault.
pub use crate::common::Fault;
/// Saved integer registers of the trapping thread.
pub use crate::common::SavedRegisters;
/// Memory of the trapping thread.
pub use crate::soc::Bus;
/// Flat memory image.
pub use crate::soc::Ram;
