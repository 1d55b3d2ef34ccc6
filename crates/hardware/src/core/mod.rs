//! Core processor implementation.
//!
//! This module contains the LS-8 CPU: the architectural state, the ALU, and
//! the fetch-decode-execute engine that ties them together.

/// Architecture-specific components (register file, condition flags).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
