//! Execution units.
//!
//! This module contains the units the dispatcher delegates to: the IEEE-754 format
//! converter, the floating-point unit (data operations and compares), the
//! load/store unit, and the constant-load idiom recognizer.

/// Bit-level conversion between single and double precision patterns.
pub mod convert;

/// Constant-load idiom recognizer.
pub mod idiom;

/// Floating-Point Unit for data operations and compares.
pub mod fpu;

/// Load/Store Unit for floating data transfers.
pub mod lsu;
