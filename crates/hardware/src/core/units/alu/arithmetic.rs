//! ALU arithmetic operations.
//!
//! Implements wrapping 8-bit addition, subtraction, multiplication, division,
//! remainder, increment, and decrement.

use super::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand; ignored by `Inc` and `Dec`.
///
/// # Returns
///
/// The 8-bit result, or `None` when `Div`/`Mod` is given a zero divisor.
/// Returns `Some(0)` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u8, b: u8) -> Option<u8> {
    match op {
        AluOp::Add => Some(a.wrapping_add(b)),
        AluOp::Sub => Some(a.wrapping_sub(b)),
        AluOp::Mul => Some(a.wrapping_mul(b)),
        AluOp::Div => a.checked_div(b),
        AluOp::Mod => a.checked_rem(b),
        AluOp::Inc => Some(a.wrapping_add(1)),
        AluOp::Dec => Some(a.wrapping_sub(1)),
        _ => Some(0),
    }
}
