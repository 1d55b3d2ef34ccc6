//! # ALU Shift Tests

use ls8_core::core::units::alu::{Alu, AluOp, AluOutput, shifts};
use rstest::rstest;

#[rstest]
#[case::shl(AluOp::Shl, 1, 3, 8)]
#[case::shl_drops_high_bit(AluOp::Shl, 0b1000_0001, 1, 0b0000_0010)]
#[case::shl_by_zero(AluOp::Shl, 0x5A, 0, 0x5A)]
#[case::shl_by_seven(AluOp::Shl, 1, 7, 0x80)]
#[case::shl_by_eight(AluOp::Shl, 0xFF, 8, 0)]
#[case::shl_huge(AluOp::Shl, 0xFF, 200, 0)]
#[case::shr(AluOp::Shr, 0x80, 7, 1)]
#[case::shr_is_logical(AluOp::Shr, 0xF0, 4, 0x0F)]
#[case::shr_by_eight(AluOp::Shr, 0xFF, 8, 0)]
#[case::shr_huge(AluOp::Shr, 0xFF, 255, 0)]
fn test_shift(#[case] op: AluOp, #[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(Alu::execute(op, a, b), AluOutput::Value(expected));
    assert_eq!(shifts::execute(op, a, b), expected);
}
