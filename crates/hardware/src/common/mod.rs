//! Common utilities and types used throughout the LS-8 simulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Memory geometry, register layout, and opcode field masks.
//! 2. **Error Handling:** The fatal error taxonomy of the engine and the loader.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for execution and program loading.
pub mod error;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, SP, STACK_INIT};
pub use error::{LoadError, SimError};
