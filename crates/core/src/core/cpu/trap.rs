//! Trap Entry Point.
//!
//! The host calls in here from its undefined-instruction handler. Emulation runs
//! instruction by instruction until a word is not a floating instruction, then the
//! address to resume at is handed back. If nothing at all was emulated the host must
//! deliver the original trap.
//!
//! A [`Fault`] is fatal. The diagnostic goes out through `tracing` and, under the
//! default [`FaultPolicy::Abort`], the configured [`AbortHandler`] ends the process.

use std::io::{self, Write};

use tracing::{debug, error};

use super::Emulator;
use crate::common::{Fault, SavedRegisters, WORD_BYTES};
use crate::config::FaultPolicy;
use crate::soc::Bus;

/// Terminates the process after a fatal fault.
///
/// Hosts with their own crash reporting install a different handler through
/// [`Emulator::emulate_trap_with`].
pub trait AbortHandler {
    /// Never returns.
    fn abort(&self, fault: &Fault) -> !;
}

/// The default handler: prints the fault to stderr, then [`std::process::abort`].
///
/// The message goes out even when the host never installed a `tracing` subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessAbort;

impl ProcessAbort {
    /// Writes the one-line fatal diagnostic for `fault`.
    pub fn write_diagnostic(out: &mut dyn Write, fault: &Fault) -> io::Result<()> {
        writeln!(out, "fpe: fatal at {:#010x}: {fault}", fault.pc())
    }
}

impl AbortHandler for ProcessAbort {
    fn abort(&self, fault: &Fault) -> ! {
        let _ = Self::write_diagnostic(&mut io::stderr().lock(), fault);
        std::process::abort()
    }
}

impl Emulator {
    /// Emulates consecutive instructions starting at `pc`.
    ///
    /// Stops at the first word that consumes nothing and returns its address. On a
    /// fault, the instructions before the faulting one stay emulated.
    pub fn run(
        &mut self,
        bus: &mut dyn Bus,
        regs: &mut SavedRegisters,
        pc: u32,
    ) -> Result<u32, Fault> {
        let mut pc = pc;
        loop {
            let words = self.step(bus, regs, pc)?;
            if words == 0 {
                return Ok(pc);
            }
            self.stats.words_consumed += u64::from(words);
            pc = pc.wrapping_add(words * WORD_BYTES);
        }
    }

    /// Trap entry point with the default [`ProcessAbort`] handler.
    ///
    /// # Returns
    ///
    /// The address to resume at. Equal to `pc` when the trapping word is not an
    /// emulated floating instruction.
    pub fn emulate_trap(&mut self, bus: &mut dyn Bus, regs: &mut SavedRegisters, pc: u32) -> u32 {
        self.emulate_trap_with(bus, regs, pc, &ProcessAbort)
    }

    /// Trap entry point with a caller-supplied [`AbortHandler`].
    ///
    /// Under [`FaultPolicy::Stop`] a fault returns the faulting address instead of
    /// aborting, so the host resumes there and takes its own trap.
    pub fn emulate_trap_with(
        &mut self,
        bus: &mut dyn Bus,
        regs: &mut SavedRegisters,
        pc: u32,
        handler: &dyn AbortHandler,
    ) -> u32 {
        self.stats.entries += 1;
        match self.run(bus, regs, pc) {
            Ok(resume) => {
                if resume == pc {
                    self.stats.entries_without_progress += 1;
                }
                resume
            }
            Err(fault) => {
                self.stats.faults += 1;
                self.report(&fault);
                match self.config.fault_policy {
                    FaultPolicy::Abort => handler.abort(&fault),
                    FaultPolicy::Stop => {
                        if fault.pc() == pc {
                            self.stats.entries_without_progress += 1;
                        }
                        fault.pc()
                    }
                }
            }
        }
    }

    fn report(&self, fault: &Fault) {
        error!(pc = format_args!("{:#010x}", fault.pc()), "{fault}");
        debug!("\n{}", self.fpr);
    }
}
