//! Constant-Load Idiom Templates.
//!
//! A compiler without FPA support for PC-relative floating constants emits a
//! three-instruction sequence to materialise one:
//!
//! ```text
//! ldr  r11, [pc, #imm]     @ fetch the constant's displacement from the literal pool
//! add  r11, r11, r12       @ relocate it against the data base in r12
//! ldfs f0, [r11]           @ the floating transfer proper
//! ```
//!
//! Each instruction is described by a mask/value [`Template`]. The window is first
//! selected by its [`signature`] (bits 24-27 of the three words) and then checked
//! template by template.

use crate::isa::instruction::FpaBits;

/// Signature of the idiom: nibbles `0101`, `0000`, `1101`.
pub const SIGNATURE: u32 = 0x50D;

/// Number of words in the idiom.
pub const LENGTH: usize = 3;

/// Mask of the 12-bit literal-pool offset in the first word.
pub const SLOT_OFFSET_MASK: u32 = 0xFFF;

/// An expected instruction: `word & mask == value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Template {
    /// Bits that must match.
    pub mask: u32,
    /// Required value of the masked bits.
    pub value: u32,
    /// Assembler shape, for diagnostics.
    pub shape: &'static str,
}

impl Template {
    /// Whether `word` fits the template.
    #[inline]
    pub const fn matches(&self, word: u32) -> bool {
        word & self.mask == self.value
    }
}

/// `ldr r11, [pc, #+imm12]`, condition always.
pub const LOAD_DISPLACEMENT: Template = Template {
    mask: 0xFFFF_F000,
    value: 0xE59F_B000,
    shape: "ldr r11, [pc, #imm]",
};

/// `add r11, r11, r12`, condition always.
pub const ADD_BASE: Template = Template {
    mask: 0xFFFF_FFFF,
    value: 0xE08B_B00C,
    shape: "add r11, r11, r12",
};

/// FPA data transfer on coprocessor 1 with pre-indexing and base r11.
///
/// Direction, length, offset, and destination are left to the transfer decoder.
pub const FP_TRANSFER: Template = Template {
    mask: 0x0F0F_0F00,
    value: 0x0D0B_0100,
    shape: "ldf/stf fN, [r11, #off]",
};

/// The idiom's templates in program order.
pub const TEMPLATES: [Template; LENGTH] = [LOAD_DISPLACEMENT, ADD_BASE, FP_TRANSFER];

/// Builds the 12-bit lookahead signature from bits 24-27 of three consecutive words.
#[inline]
pub fn signature(words: [u32; LENGTH]) -> u32 {
    (words[0].top_nibble() << 8) | (words[1].top_nibble() << 4) | words[2].top_nibble()
}
