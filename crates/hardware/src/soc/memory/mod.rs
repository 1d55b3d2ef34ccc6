//! Main Memory.
//!
//! This module implements the LS-8 address space. It provides:
//! 1. **Storage:** 256 zero-initialised byte cells.
//! 2. **Bounds Checking:** Every read and write is validated against the address space.
//! 3. **Image Loading:** Copying an assembled program into memory starting at address 0.

use std::fmt;

use crate::common::constants::{MEMORY_SIZE, PROGRAM_START};
use crate::common::error::SimError;

/// Flat byte-addressable RAM.
///
/// Accesses outside `[0, MEMORY_SIZE)` are fatal and reported as
/// [`SimError::AddressOutOfRange`]; addresses never wrap.
#[derive(Clone, PartialEq, Eq)]
pub struct Ram {
    cells: [u8; MEMORY_SIZE],
}

impl Ram {
    /// Creates a zero-filled RAM.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address to read; must be below [`MEMORY_SIZE`].
    ///
    /// # Returns
    ///
    /// The stored byte, or [`SimError::AddressOutOfRange`].
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, SimError> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(SimError::AddressOutOfRange(addr))
    }

    /// Writes `val` to `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address to write; must be below [`MEMORY_SIZE`].
    /// * `val` - The byte to store.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), SimError> {
        let cell = self
            .cells
            .get_mut(addr)
            .ok_or(SimError::AddressOutOfRange(addr))?;
        *cell = val;
        Ok(())
    }

    /// Copies a program image into memory starting at [`PROGRAM_START`].
    ///
    /// Cells past the end of the image are left untouched. An image that does not
    /// fit is rejected with [`SimError::ProgramTooLarge`] before any cell changes.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), SimError> {
        let capacity = MEMORY_SIZE - PROGRAM_START;
        if image.len() > capacity {
            return Err(SimError::ProgramTooLarge {
                len: image.len(),
                capacity,
            });
        }
        self.cells[PROGRAM_START..PROGRAM_START + image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Zeroes every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Returns the whole address space as a slice.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Returns the capacity in bytes.
    pub const fn len(&self) -> usize {
        MEMORY_SIZE
    }

    /// Always false; RAM has a fixed, non-zero size.
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ram {
    /// Hex dump, sixteen bytes per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(16).enumerate() {
            write!(f, "{:02X}:", row * 16)?;
            for byte in chunk {
                write!(f, " {byte:02X}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
