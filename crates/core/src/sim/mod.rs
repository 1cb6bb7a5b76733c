//! Program loading for tools.
//!
//! Provides utilities for building a [`Ram`](crate::soc::Ram) image from a file on
//! disk, either a flat binary or an ELF executable.

pub mod loader;
