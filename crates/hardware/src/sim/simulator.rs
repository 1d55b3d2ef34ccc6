//! Simulator: owns the CPU and the stream it prints to.
//!
//! The three externally visible steps of a run are construction, loading a
//! program, and [`Simulator::run`]. Everything else is for inspection.

use std::io::Write;
use std::path::Path;

use tracing::{debug, trace};

use crate::common::error::{LoadError, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::{HaltReason, StepOutcome};
use crate::sim::loader;
use crate::soc::Ram;

/// Tracing target used for per-instruction `TRACE:` lines.
pub const TRACE_TARGET: &str = "ls8::trace";

/// Top-level simulator: CPU state plus the output sink.
#[derive(Debug)]
pub struct Simulator<W: Write> {
    /// CPU architectural state (registers, flags, pc, RAM, stats).
    pub cpu: Cpu,
    out: W,
    trace_instructions: bool,
    max_cycles: Option<u64>,
}

impl<W: Write> Simulator<W> {
    /// Creates a simulator whose `PRN`/`PRA` output goes to `out`.
    pub fn new(config: &Config, out: W) -> Self {
        Self {
            cpu: Cpu::new(config),
            out,
            trace_instructions: config.general.trace_instructions,
            max_cycles: config.general.max_cycles,
        }
    }

    /// Loads a program file into memory and resets the CPU.
    ///
    /// # Returns
    ///
    /// The number of bytes loaded.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let image = loader::load_program(path)?;
        self.load_image(&image)?;
        Ok(image.len())
    }

    /// Copies an already assembled image into memory and resets the CPU.
    ///
    /// Memory past the image is cleared so nothing from a previous program
    /// survives. A rejected image leaves the machine exactly as it was.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), SimError> {
        let mut ram = Ram::new();
        ram.load_image(image)?;
        self.cpu.ram = ram;
        self.cpu.reset();
        Ok(())
    }

    /// Advances the machine by one instruction.
    pub fn tick(&mut self) -> Result<StepOutcome, SimError> {
        if self.trace_instructions && !self.cpu.is_halted() {
            trace!(target: TRACE_TARGET, "{}", self.cpu.trace());
        }
        self.cpu.step(&mut self.out)
    }

    /// Runs until the machine halts.
    ///
    /// # Errors
    ///
    /// Any fatal [`SimError`] from the engine, or [`SimError::CycleLimit`] when a
    /// configured cycle budget runs out first.
    pub fn run(&mut self) -> Result<HaltReason, SimError> {
        debug!("run start: pc={:#04x} sp={:#04x}", self.cpu.pc, self.cpu.regs.sp());
        let result = self.run_until_halt();
        let flushed = self.out.flush();
        let reason = result?;
        flushed?;
        debug!(
            "run stop: {:?} after {} cycle(s) at pc={:#04x}",
            reason, self.cpu.stats.cycles, self.cpu.pc
        );
        Ok(reason)
    }

    /// Steps until a halt, a fatal error, or the cycle budget runs out.
    fn run_until_halt(&mut self) -> Result<HaltReason, SimError> {
        loop {
            if let Some(limit) = self.max_cycles {
                if self.cpu.stats.cycles >= limit {
                    return Err(SimError::CycleLimit(limit));
                }
            }
            if let StepOutcome::Halted(reason) = self.tick()? {
                return Ok(reason);
            }
        }
    }

    /// The output sink.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the simulator and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}
