//! Memory Access Helpers.
//!
//! This module provides the CPU's view of memory beyond plain loads and stores:
//! 1. **Operand Fetch:** Reads the operand bytes that follow an opcode.
//! 2. **Stack Discipline:** Pre-decrement push and post-increment pop through `R7`.

use super::Cpu;
use crate::common::constants::MAX_OPERANDS;
use crate::common::error::SimError;

impl Cpu {
    /// Fetches the operand bytes of the instruction at `pc`.
    ///
    /// Only the `count` bytes the opcode declares are read, so an instruction
    /// ending at the last address does not fault on a phantom operand. Missing
    /// operands read as zero.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the opcode byte.
    /// * `count` - Operand count decoded from the opcode.
    pub fn fetch_operands(
        &self,
        pc: usize,
        count: usize,
    ) -> Result<[u8; MAX_OPERANDS], SimError> {
        let mut operands = [0; MAX_OPERANDS];
        for (i, slot) in operands.iter_mut().enumerate().take(count) {
            *slot = self.ram.read(pc + 1 + i)?;
        }
        Ok(operands)
    }

    /// Pushes a byte onto the stack.
    ///
    /// The stack pointer is decremented first, then the value is stored at the
    /// new top. The pointer wraps modulo 256 like any other register.
    pub fn push(&mut self, val: u8) -> Result<(), SimError> {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        self.ram.write(usize::from(sp), val)
    }

    /// Pops the byte at the top of the stack.
    ///
    /// The value is read first, then the stack pointer is incremented.
    pub fn pop(&mut self) -> Result<u8, SimError> {
        let sp = self.regs.sp();
        let val = self.ram.read(usize::from(sp))?;
        self.regs.set_sp(sp.wrapping_add(1));
        Ok(val)
    }

    /// Returns the byte at the top of the stack without moving the pointer.
    pub fn peek(&self) -> Result<u8, SimError> {
        self.ram.read(usize::from(self.regs.sp()))
    }
}
