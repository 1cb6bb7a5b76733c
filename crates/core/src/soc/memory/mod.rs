//! Flat RAM image.
//!
//! This module implements a contiguous, little-endian memory region mapped at a base
//! address. It provides:
//! 1. **Loading:** Placing raw images and ELF segments at arbitrary addresses.
//! 2. **Access:** The [`Bus`] implementation used by the CLI and the tests.

use crate::common::BusError;
use crate::soc::traits::Bus;

/// Alignment required of every word access.
const WORD_ALIGN: u32 = 4;

/// A contiguous memory region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ram {
    /// Backing bytes.
    data: Vec<u8>,
    /// Address of `data[0]`.
    base: u32,
}

impl Ram {
    /// Creates a zero-filled region.
    ///
    /// # Arguments
    ///
    /// * `base` - Address of the first byte.
    /// * `size` - Size of the region in bytes.
    pub fn new(base: u32, size: usize) -> Self {
        Self {
            data: vec![0; size],
            base,
        }
    }

    /// Returns the address of the first byte.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Returns the size of the region in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the region has no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copies `bytes` into the region starting at `addr`.
    pub fn load(&mut self, addr: u32, bytes: &[u8]) -> Result<(), BusError> {
        let start = self.offset(addr, bytes.len())?;
        self.data[start..start + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Writes a sequence of words starting at `addr`, e.g. a hand-assembled program.
    pub fn load_words(&mut self, addr: u32, words: &[u32]) -> Result<(), BusError> {
        let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        self.load(addr, &bytes)
    }

    /// Translates an address range into an index into `data`.
    fn offset(&self, addr: u32, len: usize) -> Result<usize, BusError> {
        let start = addr.wrapping_sub(self.base) as usize;
        if addr < self.base || start + len > self.data.len() {
            return Err(BusError::Unmapped(addr));
        }
        Ok(start)
    }

    /// Translates a word address, enforcing alignment.
    fn word_offset(&self, addr: u32) -> Result<usize, BusError> {
        if addr % WORD_ALIGN != 0 {
            return Err(BusError::Misaligned(addr));
        }
        self.offset(addr, WORD_ALIGN as usize)
    }
}

impl Bus for Ram {
    fn read_u32(&mut self, addr: u32) -> Result<u32, BusError> {
        let i = self.word_offset(addr)?;
        let mut word = [0; 4];
        word.copy_from_slice(&self.data[i..i + 4]);
        Ok(u32::from_le_bytes(word))
    }

    fn write_u32(&mut self, addr: u32, val: u32) -> Result<(), BusError> {
        let i = self.word_offset(addr)?;
        self.data[i..i + 4].copy_from_slice(&val.to_le_bytes());
        Ok(())
    }

    fn write_u64(&mut self, addr: u32, val: u64) -> Result<(), BusError> {
        let i = self.word_offset(addr)?;
        let hi = self.word_offset(addr.wrapping_add(WORD_ALIGN))?;
        self.data[i..i + 4].copy_from_slice(&(val as u32).to_le_bytes());
        self.data[hi..hi + 4].copy_from_slice(&((val >> 32) as u32).to_le_bytes());
        Ok(())
    }
}
