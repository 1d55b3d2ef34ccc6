//! Execution units.
//!
//! The LS-8 has a single functional unit, the ALU. Memory, stack, and control
//! transfer effects are applied directly by the execution engine.

/// Arithmetic Logic Unit for register operations.
pub mod alu;
