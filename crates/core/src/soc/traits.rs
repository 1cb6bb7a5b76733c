//! Bus trait for instruction fetch and floating data transfers.
//!
//! This module defines the `Bus` trait through which the emulator touches memory. It provides:
//! 1. **Word Access:** 32-bit reads and writes, the only width the coprocessor uses.
//! 2. **Doubleword Access:** 64-bit transfers built from two words, lower address first.
//!
//! Errors are reported rather than panicking so a bad address becomes an ordinary
//! fatal emulation fault with a diagnostic.

use crate::common::BusError;
use crate::common::WORD_BYTES;

/// Memory of the trapping thread.
pub trait Bus {
    /// Reads four bytes (little-endian) at `addr`.
    fn read_u32(&mut self, addr: u32) -> Result<u32, BusError>;

    /// Writes four bytes (little-endian) at `addr`.
    fn write_u32(&mut self, addr: u32, val: u32) -> Result<(), BusError>;

    /// Reads eight bytes at `addr`: the low word from `addr`, the high word from `addr + 4`.
    fn read_u64(&mut self, addr: u32) -> Result<u64, BusError> {
        let lo = self.read_u32(addr)?;
        let hi = self.read_u32(addr.wrapping_add(WORD_BYTES))?;
        Ok((u64::from(hi) << 32) | u64::from(lo))
    }

    /// Writes eight bytes at `addr`: the low word to `addr`, the high word to `addr + 4`.
    ///
    /// Either both words are written or neither is. The default probes the high word
    /// with a read first; implementations that can check the whole range at once
    /// should override it.
    fn write_u64(&mut self, addr: u32, val: u64) -> Result<(), BusError> {
        let hi_addr = addr.wrapping_add(WORD_BYTES);
        let _ = self.read_u32(hi_addr)?;
        self.write_u32(addr, val as u32)?;
        self.write_u32(hi_addr, (val >> 32) as u32)
    }
}
