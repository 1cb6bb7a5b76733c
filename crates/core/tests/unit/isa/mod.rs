/// Field extraction and decoded forms.
pub mod decode;

/// Disassembler output.
pub mod disasm;
