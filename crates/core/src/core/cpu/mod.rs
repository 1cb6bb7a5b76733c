//! Emulation Session.
//!
//! This module defines the [`Emulator`], the per-thread state that survives between
//! trap entries. It coordinates the following:
//! 1. **State:** The FPA register file, which persists across entries.
//! 2. **Configuration:** Tracing and fault policy, fixed for the session.
//! 3. **Dispatch:** Classification and execution of one instruction (see [`execution`]).
//! 4. **Entry:** The trap entry point and fault policy (see [`trap`]).

/// Instruction classification and single-step dispatch.
pub mod execution;

/// Trap entry point and fatal fault handling.
pub mod trap;

pub use self::execution::{InstructionClass, classify, classify_window};
pub use self::trap::{AbortHandler, ProcessAbort};

use crate::config::EmulatorConfig;
use crate::core::arch::FloatRegisterFile;
use crate::stats::EmulationStats;

/// An emulation session for one trapping thread.
///
/// The register file lives here rather than in the saved integer context, so one
/// `Emulator` must be kept per thread and reused for every trap that thread takes.
#[derive(Clone, Debug, Default)]
pub struct Emulator {
    /// Floating registers `f0`-`f7`.
    fpr: FloatRegisterFile,
    /// Session configuration.
    config: EmulatorConfig,
    /// Counters.
    stats: EmulationStats,
}

impl Emulator {
    /// Creates a session with every floating register zero.
    pub fn new(config: EmulatorConfig) -> Self {
        Self {
            fpr: FloatRegisterFile::new(),
            config,
            stats: EmulationStats::default(),
        }
    }

    /// Returns the floating register file.
    pub fn fpr(&self) -> &FloatRegisterFile {
        &self.fpr
    }

    /// Returns the floating register file for seeding or inspection by the host.
    pub fn fpr_mut(&mut self) -> &mut FloatRegisterFile {
        &mut self.fpr
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Returns the session counters.
    pub fn stats(&self) -> &EmulationStats {
        &self.stats
    }
}
