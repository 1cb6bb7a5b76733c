//! Constant-Load Idiom Recognizer.
//!
//! Emulates the three-word `ldr r11, [pc, #imm]` / `add r11, r11, r12` / `ldf`
//! sequence as one operation. The window is walked by a small state machine, one
//! [`Template`] per state; the first word that does not fit its template is fatal.
//!
//! On a match the literal-pool slot at `pc + imm + 8` is read, relocated by r12, and
//! the result becomes r11, the base of the third word's transfer. The intermediate
//! r11 value has no meaning of its own, so the sequence is never split into three
//! separately emulated steps.

use crate::common::constants::{IDIOM_BASE_REGISTER, IDIOM_SCRATCH_REGISTER, PC_READ_OFFSET};
use crate::common::{Fault, SavedRegisters, WORD_BYTES};
use crate::core::arch::FloatRegisterFile;
use crate::core::units::lsu::Lsu;
use crate::isa::decode::{self, Transfer};
use crate::isa::disasm;
use crate::isa::idiom::{
    ADD_BASE, FP_TRANSFER, LENGTH, LOAD_DISPLACEMENT, SLOT_OFFSET_MASK, Template,
};
use crate::soc::Bus;

/// Position in the idiom while matching a window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MatchState {
    /// Waiting for the literal-pool load.
    Load,
    /// Waiting for the relocation add.
    Add,
    /// Waiting for the floating transfer.
    Transfer,
    /// All three words matched.
    Done,
}

impl MatchState {
    /// Template the next word must fit, if any.
    fn expected(self) -> Option<Template> {
        match self {
            Self::Load => Some(LOAD_DISPLACEMENT),
            Self::Add => Some(ADD_BASE),
            Self::Transfer => Some(FP_TRANSFER),
            Self::Done => None,
        }
    }

    /// Consumes one word, returning the next state or the template it missed.
    fn step(self, word: u32) -> Result<Self, Template> {
        let next = match self {
            Self::Load => Self::Add,
            Self::Add => Self::Transfer,
            Self::Transfer | Self::Done => Self::Done,
        };
        match self.expected() {
            Some(template) if template.matches(word) => Ok(next),
            Some(template) => Err(template),
            None => Ok(Self::Done),
        }
    }
}

/// A recognized constant load, before it is executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstantLoad {
    /// Address of the literal-pool slot holding the displacement.
    pub slot: u32,
    /// The floating transfer performed through r11.
    pub transfer: Transfer,
}

/// Recognizer and executor of the constant-load idiom.
#[derive(Debug)]
pub struct IdiomRecognizer;

impl IdiomRecognizer {
    /// Matches a window already known to carry the idiom signature.
    ///
    /// # Arguments
    ///
    /// * `pc`    - Address of the first word.
    /// * `words` - The three words of the window.
    pub fn recognize(pc: u32, words: [u32; LENGTH]) -> Result<ConstantLoad, Fault> {
        let mut state = MatchState::Load;
        for word in words {
            state = state.step(word).map_err(|missed| Fault::IdiomMismatch {
                pc,
                listing: format!("{} (expected {})", disasm::idiom_listing(pc, words), missed.shape),
            })?;
        }
        debug_assert_eq!(state, MatchState::Done);

        let slot = pc
            .wrapping_add(words[0] & SLOT_OFFSET_MASK)
            .wrapping_add(PC_READ_OFFSET);
        Ok(ConstantLoad {
            slot,
            transfer: decode::decode_transfer(words[2]),
        })
    }

    /// Recognizes and executes the idiom.
    ///
    /// r11 is committed to `regs` only once the transfer has succeeded, so a fault
    /// leaves both register contexts as they were. Every fault is reported against
    /// the first word: the two integer instructions have not run, so a host that
    /// resumes at the fault must resume there.
    ///
    /// # Arguments
    ///
    /// * `pc`    - Address of the first word.
    /// * `words` - The three words of the window.
    /// * `regs`  - Saved general registers (r12 read, r11 written).
    /// * `fpr`   - The floating register file.
    /// * `bus`   - Memory of the trapping thread.
    ///
    /// # Returns
    ///
    /// The effective address of the floating transfer.
    pub fn execute(
        pc: u32,
        words: [u32; LENGTH],
        regs: &mut SavedRegisters,
        fpr: &mut FloatRegisterFile,
        bus: &mut dyn Bus,
    ) -> Result<u32, Fault> {
        let load = Self::recognize(pc, words)?;
        let transfer_pc = pc.wrapping_add(2 * WORD_BYTES);
        Lsu::validate(transfer_pc, &load.transfer).map_err(|f| f.at(pc))?;

        let displacement = bus.read_u32(load.slot).map_err(Fault::bus(pc))?;
        let mut staged = *regs;
        staged.write(
            IDIOM_SCRATCH_REGISTER,
            displacement.wrapping_add(regs.read(IDIOM_BASE_REGISTER)),
        );

        let addr =
            Lsu::execute(transfer_pc, &load.transfer, &staged, fpr, bus).map_err(|f| f.at(pc))?;
        *regs = staged;
        Ok(addr)
    }
}
