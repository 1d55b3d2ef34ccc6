//! # Error Tests
//!
//! Display formatting and conversions of the simulator's error types.

use std::error::Error as _;
use std::io;
use std::path::PathBuf;

use ls8_core::common::{LoadError, SimError};

#[test]
fn test_address_out_of_range_display() {
    let err = SimError::AddressOutOfRange(0x100);
    assert_eq!(err.to_string(), "memory address 0x100 out of range");
}

#[test]
fn test_register_out_of_range_display() {
    let err = SimError::RegisterOutOfRange(9);
    assert!(err.to_string().contains("register index 9"));
}

#[test]
fn test_illegal_instruction_display() {
    let err = SimError::IllegalInstruction {
        opcode: 0b0100_1111,
        pc: 0x10,
    };
    assert_eq!(err.to_string(), "illegal instruction 0b01001111 at 0x10");
}

#[test]
fn test_cycle_limit_display() {
    let err = SimError::CycleLimit(5);
    assert_eq!(err.to_string(), "cycle limit of 5 reached without halting");
}

#[test]
fn test_io_error_converts_to_output() {
    let err = SimError::from(io::Error::other("pipe closed"));
    assert!(matches!(err, SimError::Output(_)));
    assert!(err.to_string().contains("pipe closed"));
}

#[test]
fn test_invalid_literal_display() {
    let err = LoadError::InvalidLiteral {
        line: 3,
        text: "2".to_string(),
    };
    assert_eq!(err.to_string(), "line 3: '2' is not an 8-bit binary literal");
}

#[test]
fn test_program_too_large_display() {
    let err = LoadError::ProgramTooLarge { capacity: 256 };
    assert!(err.to_string().contains("256 bytes"));
}

#[test]
fn test_oversized_image_display() {
    let err = SimError::ProgramTooLarge {
        len: 300,
        capacity: 256,
    };
    assert_eq!(
        err.to_string(),
        "program image of 300 bytes does not fit in 256 bytes of memory"
    );
}

#[test]
fn test_load_error_wraps_sim_error_transparently() {
    let err = LoadError::from(SimError::AddressOutOfRange(256));
    assert!(matches!(err, LoadError::Sim(SimError::AddressOutOfRange(256))));
    assert_eq!(err.to_string(), "memory address 0x100 out of range");
}

#[test]
fn test_load_io_error_keeps_source() {
    let err = LoadError::Io {
        path: PathBuf::from("missing.ls8"),
        source: io::Error::from(io::ErrorKind::NotFound),
    };
    assert!(err.to_string().contains("missing.ls8"));
    assert!(err.source().is_some());
}
