//! LS-8 General-Purpose Register File.
//!
//! This module implements the register file of the LS-8. It performs the following:
//! 1. **Storage:** Maintains 8 unsigned 8-bit registers (`R0`-`R7`).
//! 2. **Bounds Checking:** Rejects register indices taken from malformed operands.
//! 3. **Stack Pointer:** Exposes `R7` as the stack pointer by convention only.

use std::fmt;

use crate::common::constants::{NUM_REGISTERS, SP};
use crate::common::error::SimError;

/// General-Purpose Register file.
///
/// Registers hold 8-bit values; arithmetic on them wraps modulo 256. Nothing in
/// the hardware stops a program from using `R7` as an ordinary register.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Returns
    ///
    /// The register value, or [`SimError::RegisterOutOfRange`] for an index past `R7`.
    #[inline]
    pub fn read(&self, idx: usize) -> Result<u8, SimError> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(SimError::RegisterOutOfRange(idx))
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The 8-bit value to write.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), SimError> {
        let reg = self
            .regs
            .get_mut(idx)
            .ok_or(SimError::RegisterOutOfRange(idx))?;
        *reg = val;
        Ok(())
    }

    /// Current stack pointer (`R7`).
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[SP]
    }

    /// Overwrites the stack pointer (`R7`).
    #[inline]
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[SP] = val;
    }

    /// Returns a copy of all eight registers, `R0` first.
    pub const fn snapshot(&self) -> [u8; NUM_REGISTERS] {
        self.regs
    }
}

impl fmt::Display for Gpr {
    /// Formats the registers in pairs, the way a debugger dump reads.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.regs.chunks(2).enumerate() {
            writeln!(
                f,
                "R{}={:#04x} R{}={:#04x}",
                i * 2,
                pair[0],
                i * 2 + 1,
                pair[1]
            )?;
        }
        Ok(())
    }
}
