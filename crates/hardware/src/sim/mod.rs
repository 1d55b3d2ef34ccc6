//! Simulation driver and program loading.
//!
//! Provides the text-format program loader and the [`Simulator`] that owns a
//! CPU together with its output stream and runs it to completion.

/// Program file parsing (one base-2 byte literal per line).
pub mod loader;

/// Run loop: tracing, cycle limits, and halting.
pub mod simulator;

pub use simulator::Simulator;
