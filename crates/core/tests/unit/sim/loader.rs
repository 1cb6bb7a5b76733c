//! Image loader tests.

use std::io::Write;

use armfpe_core::sim::loader::{LoadError, load_elf, load_flat, parse_elf};
use armfpe_core::soc::Bus;

use crate::common::builder::instruction::{NOP, konst, mvfd};

/// Builds a little-endian ARM ELF32 executable with one loadable segment.
fn tiny_elf(vaddr: u32, entry: u32, payload: &[u8], memsz: u32) -> Vec<u8> {
    const EHSIZE: u16 = 52;
    const PHENTSIZE: u16 = 32;
    let offset = u32::from(EHSIZE + PHENTSIZE);

    let mut elf = vec![0x7F, b'E', b'L', b'F', 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    elf.extend(2u16.to_le_bytes()); // ET_EXEC
    elf.extend(40u16.to_le_bytes()); // EM_ARM
    elf.extend(1u32.to_le_bytes());
    elf.extend(entry.to_le_bytes());
    elf.extend(u32::from(EHSIZE).to_le_bytes()); // e_phoff
    elf.extend(0u32.to_le_bytes()); // e_shoff
    elf.extend(0u32.to_le_bytes()); // e_flags
    elf.extend(EHSIZE.to_le_bytes());
    elf.extend(PHENTSIZE.to_le_bytes());
    elf.extend(1u16.to_le_bytes()); // e_phnum
    elf.extend(40u16.to_le_bytes());
    elf.extend(0u16.to_le_bytes());
    elf.extend(0u16.to_le_bytes());

    for field in [1, offset, vaddr, vaddr, payload.len() as u32, memsz, 5, 4] {
        elf.extend(field.to_le_bytes());
    }
    elf.extend_from_slice(payload);
    elf
}

#[test]
fn flat_program_runs_from_base() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for word in [mvfd(0, konst(4)), NOP] {
        file.write_all(&word.to_le_bytes()).unwrap();
    }

    let mut ram = load_flat(file.path(), 0x4000, 0x100).unwrap();

    assert_eq!(ram.base(), 0x4000);
    assert_eq!(ram.read_u32(0x4000).unwrap(), mvfd(0, konst(4)));
    assert_eq!(ram.read_u32(0x4004).unwrap(), NOP);
}

#[test]
fn elf_segment_placed_at_vaddr() {
    let payload: Vec<u8> = [mvfd(1, konst(1)), NOP]
        .iter()
        .flat_map(|w| w.to_le_bytes())
        .collect();
    let bytes = tiny_elf(0x8000, 0x8000, &payload, 16);

    let mut image = parse_elf(&bytes, 0x40).unwrap();

    assert_eq!(image.entry, 0x8000);
    assert_eq!(image.ram.base(), 0x8000);
    assert_eq!(image.ram.len(), 16 + 0x40);
    assert_eq!(image.ram.read_u32(0x8000).unwrap(), mvfd(1, konst(1)));
    // Bytes past the file contents read as zero.
    assert_eq!(image.ram.read_u32(0x800C).unwrap(), 0);
}

#[test]
fn flat_file_is_not_an_elf() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0u8; 128]).unwrap();

    let err = load_elf(file.path(), 0).unwrap_err();
    assert!(matches!(err, LoadError::Elf(_)));
}
