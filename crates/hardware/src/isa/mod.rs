//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode table, the opcode-byte field layout, decoding, and
//! a disassembler. Every opcode byte has the form `AABCDDDD`:
//!
//! * `AA`: number of operand bytes that follow (0-2).
//! * `B`: set for ALU operations.
//! * `C`: set for instructions that may set the program counter.
//! * `DDDD`: instruction identifier within its group.

/// Table-driven opcode decoding.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Opcode enumeration and opcode-byte field extraction.
pub mod instruction;

/// Raw opcode byte values.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{InstClass, Instruction, Opcode, OpcodeBits};
