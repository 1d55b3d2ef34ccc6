//! # Unit Components
//!
//! Tests for each building block of the simulator, from the register file up
//! to whole programs running through the [`Simulator`](ls8_core::Simulator).

/// Machine constants and error types.
pub mod common;






/// Instruction-mix counters and reporting.
pub mod stats;
