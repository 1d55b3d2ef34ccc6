//! System-on-Chip (SoC) Components.
//!
//! The LS-8 system is deliberately small: a single flat RAM with no bus,
//! devices, or memory-mapped I/O. Output is handled by the execution engine
//! writing to a host stream.

/// Main memory (256-byte flat RAM).
pub mod memory;

pub use memory::Ram;
