//! LS-8 architectural state.
//!
//! This module contains the programmer-visible state of the machine:
//! 1. **GPRs:** The eight 8-bit general-purpose registers, `R7` doubling as stack pointer.
//! 2. **Flags:** The `FL` condition codes written by `CMP` and read by conditional jumps.

/// Condition-code flags (`LT`, `GT`, `EQ`).
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use flags::Flags;
pub use gpr::Gpr;
