//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 8-bit ALU used by the execution engine. All
//! results wrap modulo 256, the way fixed-width register hardware behaves.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Mod, Inc, Dec
//! - [`logic`]:      And, Or, Xor, Not, Cmp
//! - [`shifts`]:     Shl, Shr

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations.
pub mod shifts;

use crate::common::error::SimError;
use crate::core::arch::flags::Flags;
use crate::isa::instruction::Opcode;

/// Operations the ALU can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum AluOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Inc,
    Dec,
    Cmp,
    And,
    Or,
    Xor,
    Not,
    Shl,
    Shr,
}

impl AluOp {
    /// Whether the operation only reads its first operand.
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Inc | Self::Dec | Self::Not)
    }
}

impl TryFrom<Opcode> for AluOp {
    type Error = SimError;

    /// Maps an ALU opcode to its operation; anything else is an internal error.
    fn try_from(op: Opcode) -> Result<Self, Self::Error> {
        Ok(match op {
            Opcode::Add => Self::Add,
            Opcode::Sub => Self::Sub,
            Opcode::Mul => Self::Mul,
            Opcode::Div => Self::Div,
            Opcode::Mod => Self::Mod,
            Opcode::Inc => Self::Inc,
            Opcode::Dec => Self::Dec,
            Opcode::Cmp => Self::Cmp,
            Opcode::And => Self::And,
            Opcode::Or => Self::Or,
            Opcode::Xor => Self::Xor,
            Opcode::Not => Self::Not,
            Opcode::Shl => Self::Shl,
            Opcode::Shr => Self::Shr,
            other => return Err(SimError::UnsupportedAluOp(other.byte())),
        })
    }
}

/// What an ALU operation produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOutput {
    /// A value to write back into the first operand register.
    Value(u8),
    /// New condition flags (from `CMP`); no register is written.
    Flags(Flags),
    /// The divisor was zero; nothing is written and the machine must halt.
    DivideByZero,
}

/// Arithmetic Logic Unit (ALU) for 8-bit register operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - Value of the first register operand (also the destination)
    /// * `b`  - Value of the second register operand; ignored by unary operations
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluOp, AluOutput};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 8, 9), AluOutput::Value(17));
    /// assert_eq!(Alu::execute(AluOp::Add, 250, 10), AluOutput::Value(4));
    /// assert_eq!(Alu::execute(AluOp::Mod, 7, 0), AluOutput::DivideByZero);
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> AluOutput {
        match op {
            AluOp::Add
            | AluOp::Sub
            | AluOp::Mul
            | AluOp::Div
            | AluOp::Mod
            | AluOp::Inc
            | AluOp::Dec => arithmetic::execute(op, a, b)
                .map_or(AluOutput::DivideByZero, AluOutput::Value),

            AluOp::Cmp => AluOutput::Flags(logic::compare(a, b)),

            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Not => {
                AluOutput::Value(logic::execute(op, a, b))
            }

            AluOp::Shl | AluOp::Shr => AluOutput::Value(shifts::execute(op, a, b)),
        }
    }
}
