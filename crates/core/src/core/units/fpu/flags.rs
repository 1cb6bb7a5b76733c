//! Condition flags produced by floating compares.
//!
//! The flags share the top nibble of the saved status word with the integer unit:
//!
//! | Bit | Flag | Meaning after `cmf fn, fm`          |
//! |-----|------|-------------------------------------|
//! | 31  | N    | `fn` less than `fm`                 |
//! | 30  | Z    | identical bit patterns              |
//! | 29  | C    | `fn` greater than or equal to `fm`  |
//! | 28  | V    | never set by the emulator           |
//!
//! After a compare, `lt`/`mi` branch on N, `eq` on Z, and `ge`/`hs` on C.

use std::fmt;
use std::ops::BitOr;

/// Condition flags in their status-word positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags(u32);

impl Flags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Negative.
    pub const N: Self = Self(1 << 31);
    /// Zero.
    pub const Z: Self = Self(1 << 30);
    /// Carry.
    pub const C: Self = Self(1 << 29);

    /// Returns the flags as a status-word fragment (bits 28-31 only).
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Extracts the flags from a status word.
    pub fn from_status(status: u32) -> Self {
        Self(status & (Self::N.0 | Self::Z.0 | Self::C.0))
    }

    /// Returns true if every flag in `other` is set.
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = if self.contains(Self::N) { 'N' } else { '-' };
        let z = if self.contains(Self::Z) { 'Z' } else { '-' };
        let c = if self.contains(Self::C) { 'C' } else { '-' };
        write!(f, "{n}{z}{c}")
    }
}
