//! # ALU Logic Tests
//!
//! Bitwise operations and the compare that feeds the condition flags.

use ls8_core::core::arch::Flags;
use ls8_core::core::units::alu::{Alu, AluOp, AluOutput, logic};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case::and(AluOp::And, 0b1100_1100, 0b1010_1010, 0b1000_1000)]
#[case::or(AluOp::Or, 0b1100_1100, 0b1010_1010, 0b1110_1110)]
#[case::xor(AluOp::Xor, 0b1100_1100, 0b1010_1010, 0b0110_0110)]
#[case::not(AluOp::Not, 0b1010_0101, 0, 0b0101_1010)]
#[case::not_zero(AluOp::Not, 0, 0xFF, 0xFF)]
fn test_bitwise(#[case] op: AluOp, #[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(Alu::execute(op, a, b), AluOutput::Value(expected));
}

#[test]
fn test_cmp_produces_flags_only() {
    assert_eq!(
        Alu::execute(AluOp::Cmp, 3, 7),
        AluOutput::Flags(Flags::compare(3, 7))
    );
    assert_eq!(logic::compare(7, 7), Flags::compare(7, 7));
}

#[test]
fn test_logic_ignores_non_logic_ops() {
    assert_eq!(logic::execute(AluOp::Add, 1, 1), 0);
}

proptest! {
    #[test]
    fn prop_not_is_involution(a in any::<u8>()) {
        prop_assert_eq!(logic::execute(AluOp::Not, logic::execute(AluOp::Not, a, 0), 0), a);
    }

    #[test]
    fn prop_xor_self_is_zero(a in any::<u8>()) {
        prop_assert_eq!(logic::execute(AluOp::Xor, a, a), 0);
    }
}
