//! Instruction Disassembler for the FPA instruction set.
//!
//! Converts instruction words into assembler text for the per-instruction trace and
//! for the one-line diagnostic printed before a fatal abort.
//!
//! # Usage
//!
//! ```
//! use armfpe_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0xEE10_0189), "mufd f0, f0, #1.0");
//! ```

use crate::isa::decode::{self, Operand, Precision};
use crate::isa::idiom;
use crate::isa::instruction::FpaBits;
use crate::isa::opcodes::{self, CMF_MASK, CMF_VALUE, TRANSFER_MNEMONICS};

/// Register-transfer opcode of `flt`.
const RT_FLT: u32 = 0x0;
/// Register-transfer opcode of `fix`.
const RT_FIX: u32 = 0x1;

/// Disassembles a 32-bit word as an FPA instruction.
///
/// Words outside the coprocessor classes render as `.word 0x...`.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    match inst.class() {
        opcodes::CLASS_DATA_TRANSFER => disasm_transfer(inst),
        opcodes::CLASS_OPERATION if inst.bit24() => format!("swi {:#x}", inst & 0x00FF_FFFF),
        opcodes::CLASS_OPERATION if inst.is_register_transfer() => disasm_register_transfer(inst),
        opcodes::CLASS_OPERATION => {
            let op = decode::decode_data_op(inst);
            let mn = op.mnemonic();
            let p = op.precision.suffix();
            if op.unary {
                format!("{mn}{p} f{}, {}", op.fd, op.fm)
            } else {
                format!("{mn}{p} f{}, f{}, {}", op.fd, op.fn_reg, op.fm)
            }
        }
        _ => format!(".word {inst:#010x}"),
    }
}

/// Formats one instruction as a trace or diagnostic line: address, raw word, text.
pub fn listing(pc: u32, inst: u32) -> String {
    format!("{pc:#010x} {inst:08x}  {}", disassemble(inst))
}

/// Formats a constant-load idiom window as a single line.
pub fn idiom_listing(pc: u32, words: [u32; idiom::LENGTH]) -> String {
    format!(
        "{pc:#010x} {:08x} {:08x} {:08x}  fpconst",
        words[0], words[1], words[2]
    )
}

fn disasm_transfer(inst: u32) -> String {
    let t = decode::decode_transfer(inst);
    let sign = if t.up { "" } else { "-" };
    let addressing = match (t.pre_index, t.write_back) {
        (true, false) => format!("[r{}, #{sign}{}]", t.base, t.offset),
        (true, true) => format!("[r{}, #{sign}{}]!", t.base, t.offset),
        (false, _) => format!("[r{}], #{sign}{}", t.base, t.offset),
    };
    if t.coproc == opcodes::COPROC_FPA {
        format!("{}{} f{}, {addressing}", t.mnemonic(), t.length.suffix(), t.fd)
    } else {
        let mn = if t.load { "ldc" } else { "stc" };
        format!("{mn} p{}, c{}, {addressing}", t.coproc, inst.rd())
    }
}

fn disasm_register_transfer(inst: u32) -> String {
    let opcode = inst.opcode();
    let mn = TRANSFER_MNEMONICS[opcode as usize];
    let fm = Operand::from_bits(inst.fm());
    if inst & CMF_MASK == CMF_VALUE || (opcode >= 0x9 && inst.rd() == 15) {
        return format!("{mn} f{}, {fm}", inst.fn_reg());
    }
    match opcode {
        RT_FLT => {
            let p = Precision::from_bits(inst.precision_bits()).suffix();
            format!("{mn}{p} f{}, r{}", inst.fn_reg(), inst.rd())
        }
        RT_FIX => format!("{mn} r{}, {fm}", inst.rd()),
        _ => format!("{mn} r{}", inst.rd()),
    }
}
