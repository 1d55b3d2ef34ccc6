//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Size of the flat address space and where programs load.
//! 2. **Register Constants:** Register count and the stack pointer convention.
//! 3. **Instruction Constants:** Field masks and shifts of the opcode byte.

/// Size of main memory in bytes. Every address must be below this value.
pub const MEMORY_SIZE: usize = 256;

/// Address at which the loader places the first program byte.
pub const PROGRAM_START: usize = 0;

/// Number of general-purpose registers (`R0`-`R7`).
pub const NUM_REGISTERS: usize = 8;

/// Register index reserved for the stack pointer by convention.
pub const SP: usize = 7;

/// Initial stack pointer value. The stack grows downward from here.
pub const STACK_INIT: u8 = 0xF4;

/// Bit position of the operand-count field in an opcode byte.
pub const OPERAND_COUNT_SHIFT: u32 = 6;

/// Mask of the bit marking an opcode as ALU-dispatched.
pub const ALU_MASK: u8 = 0b0010_0000;

/// Mask of the bit marking an opcode as one that may set the program counter.
pub const SETS_PC_MASK: u8 = 0b0001_0000;

/// Mask of the low nibble identifying the instruction within its group.
pub const INSTRUCTION_ID_MASK: u8 = 0b0000_1111;

/// Maximum number of operand bytes an instruction can carry.
pub const MAX_OPERANDS: usize = 2;

/// Diagnostic line written to the output stream when a division by zero halts the machine.
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Error: division by zero";

/// Character that starts a comment in the program text format.
pub const COMMENT_CHAR: char = '#';
