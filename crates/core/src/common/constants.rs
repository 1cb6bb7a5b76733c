//! Global Emulator Constants.
//!
//! This module defines the constants shared between the decoder and the units. It includes:
//! 1. **Register Constants:** Indices into the saved register context.
//! 2. **Format Constants:** IEEE-754 exponent biases and field masks.
//! 3. **Addressing Constants:** Word size and the pipeline offset of PC-relative loads.

/// Size of one instruction word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Number of general-purpose registers in the saved context.
pub const GPR_COUNT: usize = 16;

/// Index of the saved status register in the register context.
///
/// The condition flags live in its top nibble; bits 0-27 belong to the host.
pub const CPSR: usize = 14;

/// Highest general register allowed as a transfer base (r13, the stack pointer).
///
/// r14 holds the saved status word and r15 the program counter, neither of which
/// is a meaningful base in the emulated addressing mode.
pub const MAX_BASE_REGISTER: usize = 13;

/// Scratch register written by the constant-load idiom (r11).
pub const IDIOM_SCRATCH_REGISTER: usize = 11;

/// Register holding the relocation base added by the constant-load idiom (r12).
pub const IDIOM_BASE_REGISTER: usize = 12;

/// Distance between an instruction and the PC value it observes (two words of prefetch).
pub const PC_READ_OFFSET: u32 = 8;

/// Number of floating-point registers in the FPA register file.
pub const FPR_COUNT: usize = 8;

/// Exponent bias of the 64-bit IEEE-754 format.
pub const DOUBLE_EXP_BIAS: i32 = 1023;

/// Exponent bias of the 32-bit IEEE-754 format.
pub const SINGLE_EXP_BIAS: i32 = 127;

/// Sign bit of a 64-bit IEEE-754 pattern.
pub const DOUBLE_SIGN_BIT: u64 = 0x8000_0000_0000_0000;

/// Mantissa field of a 64-bit IEEE-754 pattern (52 bits).
pub const DOUBLE_MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;

/// Width of the 64-bit mantissa field.
pub const DOUBLE_MANTISSA_BITS: u32 = 52;

/// Exponent field of a 64-bit pattern after shifting it down (11 bits).
pub const DOUBLE_EXP_MASK: u64 = 0x7FF;

/// Sign bit of a 32-bit IEEE-754 pattern.
pub const SINGLE_SIGN_BIT: u32 = 0x8000_0000;

/// Mantissa field of a 32-bit IEEE-754 pattern (23 bits).
pub const SINGLE_MANTISSA_MASK: u32 = 0x007F_FFFF;

/// Width of the 32-bit mantissa field.
pub const SINGLE_MANTISSA_BITS: u32 = 23;

/// Exponent field of a 32-bit pattern after shifting it down (8 bits).
pub const SINGLE_EXP_MASK: u32 = 0xFF;
