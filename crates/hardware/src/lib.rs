//! LS-8 instruction-set simulator library.
//!
//! This crate implements an interpreter for the LS-8, an 8-bit teaching CPU with
//! 256 bytes of memory and eight registers:
//! 1. **Core:** Register file, condition flags, ALU, and the fetch-decode-execute loop.
//! 2. **Memory:** A flat, bounds-checked 256-byte RAM.
//! 3. **ISA:** The opcode table, opcode-byte field layout, decoding, and disassembly.
//! 4. **Simulation:** Program loader, run loop, configuration, and statistics.
//!
//! ```
//! use ls8_core::core::cpu::HaltReason;
//! use ls8_core::{Config, Simulator};
//!
//! // LDI R0,8; LDI R1,9; ADD R0,R1; PRN R0; HLT
//! let program = [
//!     0b1000_0010, 0, 8,
//!     0b1000_0010, 1, 9,
//!     0b1010_0000, 0, 1,
//!     0b0100_0111, 0,
//!     0b0000_0001,
//! ];
//! let mut sim = Simulator::new(&Config::default(), Vec::new());
//! sim.load_image(&program).unwrap();
//! assert_eq!(sim.run().unwrap(), HaltReason::Hlt);
//! assert_eq!(sim.output(), b"17\n");
//! ```

/// Common types and constants (machine geometry, errors).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (architectural state, ALU, execution).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader and run loop.
pub mod sim;
/// Memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, flags, pc, RAM, and stats.
pub use crate::core::Cpu;
/// Top-level driver owning a CPU and its output stream.
pub use crate::sim::Simulator;
