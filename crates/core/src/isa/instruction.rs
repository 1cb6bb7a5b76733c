//! Instruction field extraction.
//!
//! Provides bit extraction for every FPA field the decoder consumes. All fields are
//! derived by shifting and masking; the instruction word itself is never modified.

/// Bit mask for a 3-bit register field (FPA registers f0-f7).
pub const FREG_MASK: u32 = 0x7;
/// Bit mask for a 4-bit field (opcode, ARM register, operand specifier).
pub const NIBBLE_MASK: u32 = 0xF;
/// Bit mask for the 8-bit word offset of a data transfer.
pub const OFFSET_MASK: u32 = 0xFF;

/// Trait for extracting FPA instruction fields from an encoded word.
pub trait FpaBits {
    /// Coprocessor instruction class (bits 25-27).
    fn class(&self) -> u32;

    /// Bits 24-27, the nibble the idiom signature is built from.
    fn top_nibble(&self) -> u32;

    /// Bit 24: software interrupt in class `111`, pre-index in class `110`.
    fn bit24(&self) -> bool;

    /// Bit 4: register transfer (set) versus data operation (clear).
    fn is_register_transfer(&self) -> bool;

    /// Data-operation opcode (bits 20-23).
    fn opcode(&self) -> u32;

    /// Unary/monadic flag of a data operation (bit 15).
    fn unary(&self) -> bool;

    /// Destination floating register (bits 12-14).
    fn fd(&self) -> usize;

    /// Left-hand floating register (bits 16-18).
    fn fn_reg(&self) -> usize;

    /// Right-hand operand specifier (bits 0-3): bit 3 selects the constant table.
    fn fm(&self) -> u32;

    /// Two-bit precision of a data operation: bit 19 high, bit 7 low.
    fn precision_bits(&self) -> u32;

    /// Coprocessor number (bits 8-11).
    fn coproc(&self) -> u32;

    /// Up/down flag of a data transfer (bit 23).
    fn up(&self) -> bool;

    /// Two-bit transfer length: bit 22 high, bit 15 low.
    fn transfer_len_bits(&self) -> u32;

    /// Write-back flag of a data transfer (bit 21).
    fn write_back(&self) -> bool;

    /// Load/store flag of a data transfer (bit 20).
    fn load(&self) -> bool;

    /// ARM base register of a data transfer (bits 16-19).
    fn rn(&self) -> usize;

    /// ARM register of a register transfer (bits 12-15).
    fn rd(&self) -> usize;

    /// Unsigned byte offset of a data transfer: bits 0-7 scaled by four.
    fn byte_offset(&self) -> u32;
}

impl FpaBits for u32 {
    #[inline(always)]
    fn class(&self) -> u32 {
        (self >> 25) & FREG_MASK
    }

    #[inline(always)]
    fn top_nibble(&self) -> u32 {
        (self >> 24) & NIBBLE_MASK
    }

    #[inline(always)]
    fn bit24(&self) -> bool {
        (self >> 24) & 1 != 0
    }

    #[inline(always)]
    fn is_register_transfer(&self) -> bool {
        (self >> 4) & 1 != 0
    }

    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> 20) & NIBBLE_MASK
    }

    #[inline(always)]
    fn unary(&self) -> bool {
        (self >> 15) & 1 != 0
    }

    #[inline(always)]
    fn fd(&self) -> usize {
        ((self >> 12) & FREG_MASK) as usize
    }

    #[inline(always)]
    fn fn_reg(&self) -> usize {
        ((self >> 16) & FREG_MASK) as usize
    }

    #[inline(always)]
    fn fm(&self) -> u32 {
        self & NIBBLE_MASK
    }

    /// Bit 19 is the high bit and bit 7 the low bit, giving `00` single,
    /// `01` double, `10` extended, and `11` undefined.
    #[inline(always)]
    fn precision_bits(&self) -> u32 {
        ((self >> 18) & 0b10) | ((self >> 7) & 1)
    }

    #[inline(always)]
    fn coproc(&self) -> u32 {
        (self >> 8) & NIBBLE_MASK
    }

    #[inline(always)]
    fn up(&self) -> bool {
        (self >> 23) & 1 != 0
    }

    /// Bit 22 is the high bit and bit 15 the low bit, in the same order as the
    /// data-operation precision.
    #[inline(always)]
    fn transfer_len_bits(&self) -> u32 {
        ((self >> 21) & 0b10) | ((self >> 15) & 1)
    }

    #[inline(always)]
    fn write_back(&self) -> bool {
        (self >> 21) & 1 != 0
    }

    #[inline(always)]
    fn load(&self) -> bool {
        (self >> 20) & 1 != 0
    }

    #[inline(always)]
    fn rn(&self) -> usize {
        ((self >> 16) & NIBBLE_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 12) & NIBBLE_MASK) as usize
    }

    #[inline(always)]
    fn byte_offset(&self) -> u32 {
        (self & OFFSET_MASK) << 2
    }
}
