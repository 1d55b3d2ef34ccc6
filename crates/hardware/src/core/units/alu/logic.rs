//! ALU logical and comparison operations.
//!
//! Implements bitwise AND, OR, XOR, NOT, and the unsigned compare that
//! drives the condition flags.

use super::AluOp;
use crate::core::arch::flags::Flags;

/// Executes a bitwise operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a bitwise variant).
/// * `a`  - First operand.
/// * `b`  - Second operand; ignored by `Not`.
///
/// # Returns
///
/// The 8-bit result. Returns `0` for non-logic opcodes.
pub fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Not => !a,
        _ => 0,
    }
}

/// Compares two register values as unsigned integers.
///
/// Exactly one flag is set in the result.
#[inline]
pub fn compare(a: u8, b: u8) -> Flags {
    Flags::compare(a, b)
}
