//! Error definitions.
//!
//! This module defines the failure taxonomy of the simulator. It provides:
//! 1. **Execution Errors:** Fatal conditions raised by the fetch-decode-execute loop.
//! 2. **Load Errors:** Problems reading or parsing a program file.
//!
//! A division by zero is deliberately absent: it halts the machine cleanly and is
//! reported through [`HaltReason`](crate::core::cpu::execution::HaltReason) instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that abort a run.
///
/// None of these are recoverable: they indicate a malformed program or an
/// internal inconsistency, and the machine stops at the faulting instruction.
#[derive(Debug, Error)]
pub enum SimError {
    /// A memory access fell outside the 256-byte address space.
    ///
    /// The associated value is the offending address.
    #[error("memory address {0:#04x} out of range")]
    AddressOutOfRange(usize),

    /// An operand named a register that does not exist.
    ///
    /// The associated value is the register index taken from the operand byte.
    #[error("register index {0} out of range (R0-R7)")]
    RegisterOutOfRange(usize),

    /// An opcode that is not an ALU operation was routed to the ALU.
    #[error("opcode {0:#010b} is not an ALU operation")]
    UnsupportedAluOp(u8),

    /// An unrecognised opcode was fetched while strict decoding is enabled.
    #[error("illegal instruction {opcode:#010b} at {pc:#04x}")]
    IllegalInstruction {
        /// The raw opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: usize,
    },

    /// A program image is larger than memory.
    #[error("program image of {len} bytes does not fit in {capacity} bytes of memory")]
    ProgramTooLarge {
        /// Size of the rejected image.
        len: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },

    /// The configured cycle budget ran out before the program halted.
    #[error("cycle limit of {0} reached without halting")]
    CycleLimit(u64),

    /// Writing to the output stream failed.
    #[error("output stream failed: {0}")]
    Output(#[from] io::Error),
}

/// Errors raised while turning a program file into a memory image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program '{}': {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line held something other than an 8-bit base-2 literal.
    #[error("line {line}: '{text}' is not an 8-bit binary literal")]
    InvalidLiteral {
        /// One-based line number in the source text.
        line: usize,
        /// The offending token after comment stripping and trimming.
        text: String,
    },

    /// The program has more bytes than memory can hold.
    #[error("program does not fit in memory (more than {capacity} bytes)")]
    ProgramTooLarge {
        /// Memory capacity in bytes.
        capacity: usize,
    },

    /// The parsed image could not be placed into memory.
    #[error(transparent)]
    Sim(#[from] SimError),
}
