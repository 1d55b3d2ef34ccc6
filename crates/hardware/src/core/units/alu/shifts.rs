//! ALU shift operations.
//!
//! Logical shifts of an 8-bit value. Shift amounts of 8 or more shift every
//! bit out and yield zero rather than being masked.

use super::AluOp;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount.
///
/// # Returns
///
/// The shifted value. Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    let amount = u32::from(b);
    match op {
        AluOp::Shl => a.checked_shl(amount).unwrap_or(0),
        AluOp::Shr => a.checked_shr(amount).unwrap_or(0),
        _ => 0,
    }
}
