//! # Condition Flag Tests
//!
//! Tests for `CMP` flag computation and the packed `0b00000LGE` layout.

use ls8_core::core::arch::Flags;
use ls8_core::core::arch::flags::{FL_EQ, FL_GT, FL_LT};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_flags_power_on_clear() {
    assert_eq!(Flags::default(), Flags::CLEAR);
    assert_eq!(Flags::CLEAR.bits(), 0);
}

#[test]
fn test_compare_less() {
    let fl = Flags::compare(1, 2);
    assert_eq!(
        fl,
        Flags {
            lt: true,
            gt: false,
            eq: false
        }
    );
    assert_eq!(fl.bits(), FL_LT);
}

#[test]
fn test_compare_greater() {
    assert_eq!(Flags::compare(9, 2).bits(), FL_GT);
}

#[test]
fn test_compare_equal() {
    assert_eq!(Flags::compare(42, 42).bits(), FL_EQ);
}

#[test]
fn test_compare_is_unsigned() {
    // 0xFF would be -1 in two's complement.
    assert_eq!(Flags::compare(0xFF, 1).bits(), FL_GT);
}

#[test]
fn test_from_bits_ignores_upper_bits() {
    assert_eq!(
        Flags::from_bits(0b1111_1001),
        Flags {
            lt: false,
            gt: false,
            eq: true
        }
    );
}

#[test]
fn test_flags_display() {
    assert_eq!(Flags::compare(1, 2).to_string(), "L--");
    assert_eq!(Flags::compare(2, 1).to_string(), "-G-");
    assert_eq!(Flags::compare(2, 2).to_string(), "--E");
    assert_eq!(Flags::CLEAR.to_string(), "---");
}

proptest! {
    #[test]
    fn prop_compare_sets_exactly_one_flag(a in any::<u8>(), b in any::<u8>()) {
        let fl = Flags::compare(a, b);
        prop_assert_eq!(u8::from(fl.lt) + u8::from(fl.gt) + u8::from(fl.eq), 1);
        prop_assert_eq!(fl.lt, a < b);
        prop_assert_eq!(fl.gt, a > b);
        prop_assert_eq!(fl.eq, a == b);
    }

    #[test]
    fn prop_bits_round_trip(bits in 0u8..8) {
        prop_assert_eq!(Flags::from_bits(bits).bits(), bits);
    }
}
