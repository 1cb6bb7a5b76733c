//! Instruction Dispatch.
//!
//! This module implements one step of emulation. It performs the following:
//! 1. **Classification:** Sorts the word at `pc` into data transfer, compare, data
//!    operation, software interrupt, or "other" by its class bits.
//! 2. **Lookahead:** For "other" words, fetches two more words and checks the
//!    constant-load idiom signature.
//! 3. **Execution:** Hands the decoded instruction to the FPU, the LSU, or the idiom
//!    recognizer and reports how many words were consumed.
//! 4. **Observability:** Emits a per-instruction trace when tracing is enabled.

use tracing::{debug, info};

use super::Emulator;
use crate::common::{BusError, Fault, SavedRegisters, WORD_BYTES};
use crate::core::units::fpu::Fpu;
use crate::core::units::idiom::IdiomRecognizer;
use crate::core::units::lsu::Lsu;
use crate::isa::decode;
use crate::isa::disasm;
use crate::isa::idiom::{self, LENGTH, SIGNATURE};
use crate::isa::instruction::FpaBits;
use crate::isa::opcodes::{CLASS_DATA_TRANSFER, CLASS_OPERATION, CMF_MASK, CMF_VALUE};
use crate::soc::Bus;
use crate::stats::OpKind;

/// Target of the per-instruction trace.
const TRACE_TARGET: &str = "armfpe::trace";

/// What the dispatcher decided an instruction window is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstructionClass {
    /// Class `110`: `ldf`/`stf` (or another coprocessor's transfer, which faults).
    DataTransfer,
    /// Class `111`, bit 4 set, matching `cmf` into the flags.
    Compare,
    /// Class `111`, bit 4 set, any other register transfer.
    RegisterTransfer,
    /// Class `111`, bit 4 clear.
    DataOperation,
    /// Class `111`, bit 24 set.
    SoftwareInterrupt,
    /// Three-word window carrying the constant-load signature.
    ConstantLoad,
    /// Anything else. Not emulated.
    NotFloat,
}

impl InstructionClass {
    /// Words consumed when an instruction of this class is emulated.
    pub fn words(self) -> u32 {
        match self {
            Self::ConstantLoad => LENGTH as u32,
            Self::SoftwareInterrupt | Self::NotFloat => 0,
            _ => 1,
        }
    }
}

/// Classifies a single word.
///
/// Returns [`InstructionClass::NotFloat`] for words outside the coprocessor classes;
/// the caller decides whether to look ahead for the idiom.
pub fn classify(word: u32) -> InstructionClass {
    match word.class() {
        CLASS_DATA_TRANSFER => InstructionClass::DataTransfer,
        CLASS_OPERATION if word.bit24() => InstructionClass::SoftwareInterrupt,
        CLASS_OPERATION if word.is_register_transfer() => {
            if word & CMF_MASK == CMF_VALUE {
                InstructionClass::Compare
            } else {
                InstructionClass::RegisterTransfer
            }
        }
        CLASS_OPERATION => InstructionClass::DataOperation,
        _ => InstructionClass::NotFloat,
    }
}

/// Classifies a full three-word window, including the idiom signature check.
pub fn classify_window(words: [u32; LENGTH]) -> InstructionClass {
    match classify(words[0]) {
        InstructionClass::NotFloat if idiom::signature(words) == SIGNATURE => {
            InstructionClass::ConstantLoad
        }
        class => class,
    }
}

impl Emulator {
    /// Emulates the instruction (or idiom) at `pc`.
    ///
    /// # Arguments
    ///
    /// * `bus`  - Memory of the trapping thread.
    /// * `regs` - Saved integer registers; r11 and the CPSR flags may be updated.
    /// * `pc`   - Address of the instruction.
    ///
    /// # Returns
    ///
    /// The number of words consumed: 0 when the window is not emulated, 1 for a single
    /// instruction, 3 for the constant-load idiom. On a fault nothing has been changed.
    pub fn step(
        &mut self,
        bus: &mut dyn Bus,
        regs: &mut SavedRegisters,
        pc: u32,
    ) -> Result<u32, Fault> {
        let word = bus.read_u32(pc).map_err(Fault::bus(pc))?;
        // A window that runs off mapped memory cannot be the idiom.
        let (class, window) = match classify(word) {
            InstructionClass::NotFloat => match fetch_window(bus, pc, word) {
                Ok(window) => (classify_window(window), window),
                Err(_) => (InstructionClass::NotFloat, [word, 0, 0]),
            },
            class => (class, [word, 0, 0]),
        };

        match class {
            InstructionClass::DataTransfer => {
                let t = decode::decode_transfer(word);
                let addr = Lsu::execute(pc, &t, regs, &mut self.fpr, bus)?;
                self.stats
                    .record(if t.load { OpKind::Load } else { OpKind::Store });
                self.trace_transfer(&disasm::listing(pc, word), addr);
            }
            InstructionClass::Compare => {
                let op = decode::decode_compare(word);
                let flags = Fpu::compare(&op, &self.fpr);
                regs.merge_flags(flags);
                self.stats.record(OpKind::Compare);
                if self.config.trace {
                    info!(target: TRACE_TARGET, "{}  -> {flags}", disasm::listing(pc, word));
                }
            }
            InstructionClass::RegisterTransfer => {
                return Err(Fault::UnmodeledRegisterTransfer {
                    pc,
                    listing: disasm::listing(pc, word),
                });
            }
            InstructionClass::DataOperation => {
                let op = decode::decode_data_op(word);
                Fpu::execute(pc, &op, &mut self.fpr)?;
                self.stats.record(if op.unary {
                    OpKind::Move
                } else {
                    OpKind::Multiply
                });
                if self.config.trace {
                    info!(target: TRACE_TARGET, "{}", disasm::listing(pc, word));
                    debug!(target: TRACE_TARGET, "\n{}", self.fpr);
                }
            }
            InstructionClass::ConstantLoad => {
                let addr = IdiomRecognizer::execute(pc, window, regs, &mut self.fpr, bus)?;
                self.stats.record(OpKind::ConstantLoad);
                self.trace_transfer(&disasm::idiom_listing(pc, window), addr);
            }
            InstructionClass::SoftwareInterrupt | InstructionClass::NotFloat => {}
        }

        Ok(class.words())
    }

    fn trace_transfer(&self, listing: &str, addr: u32) {
        if self.config.trace {
            info!(target: TRACE_TARGET, "{listing}  @ {addr:#010x}");
            debug!(target: TRACE_TARGET, "\n{}", self.fpr);
        }
    }
}

/// Reads the two words following `word` to complete a lookahead window.
fn fetch_window(bus: &mut dyn Bus, pc: u32, word: u32) -> Result<[u32; LENGTH], BusError> {
    let second = bus.read_u32(pc.wrapping_add(WORD_BYTES))?;
    let third = bus.read_u32(pc.wrapping_add(2 * WORD_BYTES))?;
    Ok([word, second, third])
}
