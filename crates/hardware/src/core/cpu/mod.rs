//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains registers, flags, the program counter, and RAM.
//! 2. **Lifecycle:** Power-on initialisation and reset between runs.
//! 3. **Observability:** Trace lines and state dumps for debugging.

/// Fetch-decode-execute cycle and instruction semantics.
pub mod execution;

/// Operand fetch and stack access helpers.
pub mod memory;

use std::fmt::Write as _;

use crate::config::Config;
use crate::core::arch::{Flags, Gpr};
use crate::soc::Ram;
use crate::stats::SimStats;

pub use self::execution::{HaltReason, StepOutcome};

/// Main CPU structure containing all processor state.
///
/// The CPU owns its memory exclusively for the duration of a run; nothing else
/// mutates RAM while instructions execute.
#[derive(Debug, Clone)]
pub struct Cpu {
    /// General Purpose Registers (`R7` is the stack pointer).
    pub regs: Gpr,
    /// Condition flags written by `CMP`.
    pub flags: Flags,
    /// Program Counter.
    pub pc: usize,
    /// Main memory.
    pub ram: Ram,
    /// Why the machine stopped, once it has.
    pub halt_reason: Option<HaltReason>,
    /// Treat unknown opcodes as fatal instead of skipping them.
    pub strict_opcodes: bool,
    /// Performance statistics.
    pub stats: SimStats,
    stack_init: u8,
}

impl Cpu {
    /// Creates a CPU in its start-of-execution state.
    ///
    /// Registers and flags are zero except the stack pointer, which is set to
    /// `config.memory.stack_init`. RAM is zero-filled.
    pub fn new(config: &Config) -> Self {
        let mut regs = Gpr::new();
        regs.set_sp(config.memory.stack_init);
        Self {
            regs,
            flags: Flags::CLEAR,
            pc: 0,
            ram: Ram::new(),
            halt_reason: None,
            strict_opcodes: config.general.strict_opcodes,
            stats: SimStats::default(),
            stack_init: config.memory.stack_init,
        }
    }

    /// Returns registers, flags, pc, and statistics to their start-of-execution
    /// state. Memory is left alone so a loaded program can be re-run.
    pub fn reset(&mut self) {
        self.regs = Gpr::new();
        self.regs.set_sp(self.stack_init);
        self.flags = Flags::CLEAR;
        self.pc = 0;
        self.halt_reason = None;
        self.stats = SimStats::default();
    }

    /// Whether the machine has stopped.
    pub const fn is_halted(&self) -> bool {
        self.halt_reason.is_some()
    }

    /// Formats the machine state about to execute as a single trace line.
    ///
    /// Layout: `TRACE: PC | OP A B | R0 R1 R2 R3 R4 R5 R6 R7`, all upper-case hex.
    /// Bytes past the end of memory read as `00`.
    pub fn trace(&self) -> String {
        let mem = self.ram.as_slice();
        let at = |addr: usize| mem.get(addr).copied().unwrap_or(0);
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            at(self.pc),
            at(self.pc + 1),
            at(self.pc + 2)
        );
        for val in self.regs.snapshot() {
            let _ = write!(line, " {val:02X}");
        }
        line
    }

    /// Renders pc, flags, and registers as a multi-line dump.
    pub fn dump_state(&self) -> String {
        format!(
            "PC = {:#04x}  FL = {}\n{}",
            self.pc, self.flags, self.regs
        )
    }
}
