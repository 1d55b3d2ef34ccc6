//! Configuration system for the LS-8 simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline machine constants (initial stack pointer).
//! 2. **Structures:** General run options and memory layout.
//! 3. **Loading:** JSON deserialization from a string or a file.
//!
//! Every field is optional in JSON; missing fields take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants for the simulator.
mod defaults {
    /// Initial stack pointer; the stack grows downward from here.
    pub const STACK_INIT: u8 = crate::common::constants::STACK_INIT;
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not read config '{}': {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file was not valid configuration JSON.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root configuration structure for the simulator.
///
/// # Examples
///
/// ```
/// use ls8_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_cycles": 10000 },
///     "memory": { "stack_init": 240 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert!(!config.general.strict_opcodes);
/// assert_eq!(config.general.max_cycles, Some(10_000));
/// assert_eq!(config.memory.stack_init, 0xF0);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory layout
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `TRACE:` line for every instruction before it executes
    #[serde(default)]
    pub trace_instructions: bool,

    /// Abort on unknown opcodes instead of skipping them with a warning
    #[serde(default)]
    pub strict_opcodes: bool,

    /// Abort once this many instructions have executed without a halt
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

/// Memory layout configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Initial value of the stack pointer (`R7`)
    #[serde(default = "MemoryConfig::default_stack_init")]
    pub stack_init: u8,
}

impl MemoryConfig {
    /// Returns the default initial stack pointer.
    const fn default_stack_init() -> u8 {
        defaults::STACK_INIT
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            stack_init: defaults::STACK_INIT,
        }
    }
}
