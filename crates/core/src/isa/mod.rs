//! FPA Instruction Set Definitions.
//!
//! Contains the field layout, opcode tables, decoding logic, and disassembly for
//! the ARM Floating Point Accelerator (coprocessor 1) instruction set, plus the
//! templates of the compiler-emitted constant-load idiom.
//!
//! # Instruction Classes
//!
//! * `CPDO`: coprocessor data operations (`mvf`, `muf`, ...), bits 25-27 = `111`, bit 4 clear.
//! * `CPRT`: coprocessor register transfers (`cmf`, ...), bits 25-27 = `111`, bit 4 set.
//! * `CPDT`: coprocessor data transfers (`ldf`, `stf`), bits 25-27 = `110`.

/// Instruction decoding into typed records.
pub mod decode;

/// Instruction disassembler for tracing and fatal diagnostics.
pub mod disasm;

/// Expected-instruction templates of the constant-load idiom.
pub mod idiom;

/// Instruction field extraction utilities.
pub mod instruction;

/// Opcode numbers, mnemonic tables, and the immediate constant table.
pub mod opcodes;
