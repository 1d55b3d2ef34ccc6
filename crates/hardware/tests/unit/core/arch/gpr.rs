//! # General-Purpose Register Tests
//!
//! Tests for the eight 8-bit registers and the `R7` stack pointer alias.

use ls8_core::common::SimError;
use ls8_core::core::arch::Gpr;
use proptest::prelude::*;

#[test]
fn test_gpr_new_initializes_to_zero() {
    let gpr = Gpr::new();
    for i in 0..8 {
        assert_eq!(gpr.read(i).unwrap(), 0);
    }
}

#[test]
fn test_gpr_write_all_registers() {
    let mut gpr = Gpr::new();
    for i in 0..8u8 {
        gpr.write(usize::from(i), i * 11).unwrap();
    }
    assert_eq!(gpr.snapshot(), [0, 11, 22, 33, 44, 55, 66, 77]);
}

#[test]
fn test_gpr_read_out_of_range() {
    let gpr = Gpr::new();
    assert!(matches!(gpr.read(8), Err(SimError::RegisterOutOfRange(8))));
    assert!(matches!(gpr.read(255), Err(SimError::RegisterOutOfRange(255))));
}

#[test]
fn test_gpr_write_out_of_range_leaves_file_untouched() {
    let mut gpr = Gpr::new();
    assert!(matches!(gpr.write(8, 1), Err(SimError::RegisterOutOfRange(8))));
    assert_eq!(gpr, Gpr::new());
}

#[test]
fn test_gpr_sp_aliases_r7() {
    let mut gpr = Gpr::new();
    gpr.set_sp(0xF4);
    assert_eq!(gpr.read(7).unwrap(), 0xF4);

    gpr.write(7, 0x10).unwrap();
    assert_eq!(gpr.sp(), 0x10);
}

#[test]
fn test_gpr_display_pairs() {
    let mut gpr = Gpr::new();
    gpr.set_sp(0xF4);
    let text = gpr.to_string();
    assert!(text.contains("R0=0x00 R1=0x00"));
    assert!(text.contains("R6=0x00 R7=0xf4"));
    assert_eq!(text.lines().count(), 4);
}

proptest! {
    #[test]
    fn prop_gpr_write_then_read(idx in 0usize..8, val in any::<u8>()) {
        let mut gpr = Gpr::new();
        gpr.write(idx, val).unwrap();
        prop_assert_eq!(gpr.read(idx).unwrap(), val);
    }
}
