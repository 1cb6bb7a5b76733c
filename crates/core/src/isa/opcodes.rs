//! FPA Opcodes and Tables.
//!
//! Opcode numbers, class encodings, and the mnemonic tables used by the decoder and
//! the disassembler. Only `mvf`, `muf`, `cmf`, `ldf`, and `stf` are executed; every
//! other mnemonic exists so fatal diagnostics can name the instruction.

/// Instruction class (bits 25-27) of a coprocessor data transfer.
pub const CLASS_DATA_TRANSFER: u32 = 0b110;

/// Instruction class (bits 25-27) of coprocessor data operations, register
/// transfers, and software interrupts.
pub const CLASS_OPERATION: u32 = 0b111;

/// Coprocessor number of the floating point unit.
pub const COPROC_FPA: u32 = 1;

/// Mask applied to a register transfer before matching it against [`CMF_VALUE`].
///
/// Keeps the opcode (bits 20-23), the ARM register (bits 12-15), and the
/// coprocessor number (bits 8-11).
pub const CMF_MASK: u32 = 0x00F0_FF00;

/// Masked value of `cmf` writing its result to the status flags (Rd = r15).
pub const CMF_VALUE: u32 = 0x0090_F100;

/// Unary data-operation opcode: move.
pub const MVF: u32 = 0x0;

/// Binary data-operation opcode: multiply.
pub const MUF: u32 = 0x1;

/// Binary (dyadic) data-operation mnemonics, indexed by opcode.
pub const BINARY_MNEMONICS: [&str; 16] = [
    "adf", "muf", "suf", "rsf", "dvf", "rdf", "pow", "rpw", "rmf", "fml", "fdv", "frd", "pol",
    "undef", "undef", "undef",
];

/// Unary (monadic) data-operation mnemonics, indexed by opcode.
pub const UNARY_MNEMONICS: [&str; 16] = [
    "mvf", "mnf", "abs", "rnd", "sqt", "log", "lgn", "exp", "sin", "cos", "tan", "asn", "acs",
    "atn", "urd", "nrm",
];

/// Register-transfer mnemonics, indexed by opcode (bits 20-23).
pub const TRANSFER_MNEMONICS: [&str; 16] = [
    "flt", "fix", "wfs", "rfs", "wfc", "rfc", "undef", "undef", "undef", "cmf", "undef", "cnf",
    "undef", "cmfe", "undef", "cnfe",
];

/// Precision suffixes, indexed by the two-bit precision field.
pub const PRECISION_SUFFIXES: [&str; 4] = ["s", "d", "e", "?"];

/// Double-precision bit patterns of the eight immediate constants.
pub const CONSTANT_TABLE: [u64; 8] = [
    0x0000_0000_0000_0000, // 0.0
    0x3FF0_0000_0000_0000, // 1.0
    0x4000_0000_0000_0000, // 2.0
    0x4008_0000_0000_0000, // 3.0
    0x4010_0000_0000_0000, // 4.0
    0x4014_0000_0000_0000, // 5.0
    0x3FE0_0000_0000_0000, // 0.5
    0x4024_0000_0000_0000, // 10.0
];

/// Assembler spelling of the immediate constants.
pub const CONSTANT_NAMES: [&str; 8] = ["0.0", "1.0", "2.0", "3.0", "4.0", "5.0", "0.5", "10.0"];

/// Returns the data-operation mnemonic for an opcode.
#[inline]
pub fn data_op_mnemonic(opcode: u32, unary: bool) -> &'static str {
    let table = if unary {
        &UNARY_MNEMONICS
    } else {
        &BINARY_MNEMONICS
    };
    table[(opcode & 0xF) as usize]
}
