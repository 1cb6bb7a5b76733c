//! Image Loader.
//!
//! This module builds memory images for the CLI and for tests. It performs:
//! 1. **Flat images:** Reads raw bytes from disk and places them at a base address.
//! 2. **ELF images:** Parses a 32-bit ELF executable with `object` and places every
//!    loadable segment at its virtual address, reporting the entry point.

use std::fs;
use std::path::{Path, PathBuf};

use object::read::elf::ElfFile32;
use object::{Endianness, Object, ObjectSegment};
use thiserror::Error;

use crate::common::BusError;
use crate::soc::Ram;

/// Reasons an image could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a parsable 32-bit ELF executable.
    #[error("invalid ELF image: {0}")]
    Elf(#[from] object::Error),

    /// The ELF image has no loadable bytes.
    #[error("ELF image has no loadable segments")]
    Empty,

    /// The image does not fit the requested region.
    #[error("image does not fit in memory: {0}")]
    Placement(#[from] BusError),
}

/// A loaded ELF executable.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    /// Memory covering every loadable segment.
    pub ram: Ram,
    /// Entry point from the ELF header.
    pub entry: u32,
}

/// Reads a file into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the file.
pub fn load_binary(path: &Path) -> Result<Vec<u8>, LoadError> {
    fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a flat binary at `base` into a region of `size` bytes.
///
/// The region is grown to hold the whole file if `size` is smaller.
pub fn load_flat(path: &Path, base: u32, size: usize) -> Result<Ram, LoadError> {
    let bytes = load_binary(path)?;
    let mut ram = Ram::new(base, size.max(bytes.len()));
    ram.load(base, &bytes)?;
    Ok(ram)
}

/// Loads a 32-bit ELF executable.
///
/// The returned region spans from the lowest segment address to the end of the
/// highest segment, plus `slack` bytes for stack and scratch data. Bytes a segment
/// reserves beyond its file contents read as zero.
pub fn load_elf(path: &Path, slack: usize) -> Result<LoadedImage, LoadError> {
    let bytes = load_binary(path)?;
    parse_elf(&bytes, slack)
}

/// Builds a [`LoadedImage`] from ELF bytes already in memory.
pub fn parse_elf(bytes: &[u8], slack: usize) -> Result<LoadedImage, LoadError> {
    let file = ElfFile32::<Endianness>::parse(bytes)?;

    let mut low = u64::MAX;
    let mut high = 0u64;
    for segment in file.segments() {
        if segment.size() == 0 {
            continue;
        }
        low = low.min(segment.address());
        high = high.max(segment.address() + segment.size());
    }
    if low >= high {
        return Err(LoadError::Empty);
    }

    let mut ram = Ram::new(low as u32, (high - low) as usize + slack);
    for segment in file.segments() {
        let data = segment.data()?;
        if !data.is_empty() {
            ram.load(segment.address() as u32, data)?;
        }
    }

    Ok(LoadedImage {
        ram,
        entry: file.entry() as u32,
    })
}

