//! FPA Instruction Decoder.
//!
//! Turns a 32-bit instruction word into one of three ephemeral records:
//! [`DataOp`] for data operations, [`CompareOp`] for `cmf`, and [`Transfer`] for
//! loads and stores. Decoding never fails; whether a record is inside the modeled
//! subset is decided by the execution units, which still have the full record at
//! hand for the diagnostic.

use std::fmt;

use crate::isa::instruction::FpaBits;
use crate::isa::opcodes::{self, CONSTANT_NAMES, PRECISION_SUFFIXES};

/// Bit of the operand specifier selecting the immediate constant table.
const CONSTANT_SELECTOR: u32 = 0x8;

/// A right-hand operand: one of the eight registers or one of the eight constants.
///
/// The two index ranges overlap numerically but never alias.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// Floating register `f0`-`f7`.
    Register(usize),
    /// Entry of the immediate constant table.
    Constant(usize),
}

impl Operand {
    /// Decodes a 4-bit operand specifier.
    #[inline]
    pub fn from_bits(fm: u32) -> Self {
        let idx = (fm & 0x7) as usize;
        if fm & CONSTANT_SELECTOR != 0 {
            Self::Constant(idx)
        } else {
            Self::Register(idx)
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register(idx) => write!(f, "f{idx}"),
            Self::Constant(idx) => write!(f, "#{}", CONSTANT_NAMES[*idx]),
        }
    }
}

/// Precision of a data operation or length of a data transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precision {
    /// 32-bit IEEE-754.
    Single,
    /// 64-bit IEEE-754.
    Double,
    /// 80-bit extended; recognized but not modeled.
    Extended,
    /// Undefined (data operations) or packed decimal (transfers); not modeled.
    Unknown,
}

impl Precision {
    /// Decodes a two-bit precision or transfer-length field.
    #[inline]
    pub fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0b00 => Self::Single,
            0b01 => Self::Double,
            0b10 => Self::Extended,
            _ => Self::Unknown,
        }
    }

    /// Returns the mnemonic suffix (`s`, `d`, `e`, or `?`).
    pub fn suffix(self) -> &'static str {
        PRECISION_SUFFIXES[self as usize]
    }

    /// Whether the emulator can execute operations of this precision.
    pub fn is_modeled(self) -> bool {
        matches!(self, Self::Single | Self::Double)
    }
}

/// A decoded data operation (CPDO).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataOp {
    /// Raw instruction word.
    pub raw: u32,
    /// Opcode (bits 20-23).
    pub opcode: u32,
    /// Unary (monadic) form.
    pub unary: bool,
    /// Destination register.
    pub fd: usize,
    /// Left-hand register; ignored by unary forms.
    pub fn_reg: usize,
    /// Right-hand operand.
    pub fm: Operand,
    /// Requested precision.
    pub precision: Precision,
}

impl DataOp {
    /// Returns the mnemonic without the precision suffix.
    pub fn mnemonic(&self) -> &'static str {
        opcodes::data_op_mnemonic(self.opcode, self.unary)
    }
}

/// A decoded compare into the status flags (`cmf`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompareOp {
    /// Raw instruction word.
    pub raw: u32,
    /// Left-hand register.
    pub fn_reg: usize,
    /// Right-hand operand.
    pub fm: Operand,
}

/// A decoded data transfer (CPDT) with every structural field kept for validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    /// Raw instruction word.
    pub raw: u32,
    /// Load (`ldf`) when set, store (`stf`) when clear.
    pub load: bool,
    /// Coprocessor number.
    pub coproc: u32,
    /// Pre-indexed addressing.
    pub pre_index: bool,
    /// Add the offset when set, subtract when clear.
    pub up: bool,
    /// Base register write-back requested.
    pub write_back: bool,
    /// Transfer length.
    pub length: Precision,
    /// ARM base register.
    pub base: usize,
    /// Floating register transferred.
    pub fd: usize,
    /// Unsigned byte offset.
    pub offset: u32,
}

impl Transfer {
    /// Returns `ldf` or `stf`.
    pub fn mnemonic(&self) -> &'static str {
        if self.load { "ldf" } else { "stf" }
    }

    /// Applies the offset to a base address.
    #[inline]
    pub fn effective_address(&self, base: u32) -> u32 {
        if self.up {
            base.wrapping_add(self.offset)
        } else {
            base.wrapping_sub(self.offset)
        }
    }
}

/// Decodes a data operation.
///
/// # Arguments
///
/// * `inst` - A word of class `111` with bit 4 clear.
pub fn decode_data_op(inst: u32) -> DataOp {
    DataOp {
        raw: inst,
        opcode: inst.opcode(),
        unary: inst.unary(),
        fd: inst.fd(),
        fn_reg: inst.fn_reg(),
        fm: Operand::from_bits(inst.fm()),
        precision: Precision::from_bits(inst.precision_bits()),
    }
}

/// Decodes a compare.
///
/// # Arguments
///
/// * `inst` - A word of class `111` with bit 4 set that matched the `cmf` mask.
pub fn decode_compare(inst: u32) -> CompareOp {
    CompareOp {
        raw: inst,
        fn_reg: inst.fn_reg(),
        fm: Operand::from_bits(inst.fm()),
    }
}

/// Decodes a data transfer.
///
/// # Arguments
///
/// * `inst` - A word of class `110`.
pub fn decode_transfer(inst: u32) -> Transfer {
    Transfer {
        raw: inst,
        load: inst.load(),
        coproc: inst.coproc(),
        pre_index: inst.bit24(),
        up: inst.up(),
        write_back: inst.write_back(),
        length: Precision::from_bits(inst.transfer_len_bits()),
        base: inst.rn(),
        fd: inst.fd(),
        offset: inst.byte_offset(),
    }
}
