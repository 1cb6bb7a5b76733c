//! Memory seen by the emulator.
//!
//! This module provides the memory interface used for instruction fetch and data
//! transfers:
//! 1. **Bus:** The trait a host implements to expose the trapping thread's memory.
//! 2. **Ram:** A flat little-endian memory image for tools and tests.

/// Flat RAM image.
pub mod memory;

/// Memory access trait.
pub mod traits;

pub use memory::Ram;
pub use traits::Bus;
