//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the LS-8 simulator. It provides:
//! 1. **Cycles:** Instructions executed (one per cycle) and host throughput.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, stack, branch, I/O, system).
//! 3. **Control flow:** How many control transfers were actually taken.

use std::time::Instant;

use serde::Serialize;

use crate::isa::instruction::InstClass;

/// Simulation statistics structure.
#[derive(Debug, Clone, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Total cycles elapsed; every instruction takes one cycle.
    pub cycles: u64,

    /// Count of ALU instructions executed.
    pub inst_alu: u64,
    /// Count of `LDI`/`LD` instructions executed.
    pub inst_load: u64,
    /// Count of `ST` instructions executed.
    pub inst_store: u64,
    /// Count of `PUSH`/`POP` instructions executed.
    pub inst_stack: u64,
    /// Count of calls, returns, and jumps executed.
    pub inst_branch: u64,
    /// Count of `PRN`/`PRA` instructions executed.
    pub inst_io: u64,
    /// Count of `NOP`/`HLT` instructions executed.
    pub inst_system: u64,
    /// Count of unknown opcodes skipped.
    pub inst_unknown: u64,

    /// Control transfers that changed the program counter.
    pub branches_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_io: 0,
            inst_system: 0,
            inst_unknown: 0,
            branches_taken: 0,
        }
    }
}

impl SimStats {
    /// Counts one executed instruction; `None` marks an unknown opcode.
    pub fn record(&mut self, class: Option<InstClass>) {
        self.cycles += 1;
        let counter = match class {
            Some(InstClass::Alu) => &mut self.inst_alu,
            Some(InstClass::Load) => &mut self.inst_load,
            Some(InstClass::Store) => &mut self.inst_store,
            Some(InstClass::Stack) => &mut self.inst_stack,
            Some(InstClass::Branch) => &mut self.inst_branch,
            Some(InstClass::Io) => &mut self.inst_io,
            Some(InstClass::System) => &mut self.inst_system,
            None => &mut self.inst_unknown,
        };
        *counter += 1;
    }

    /// Serializes the counters as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Renders the report printed by [`SimStats::print`].
    pub fn report(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;
        let pct = |n: u64| (n as f64 / cyc) * 100.0;
        let khz = if seconds > 0.0 {
            (self.cycles as f64 / seconds) / 1000.0
        } else {
            0.0
        };

        let mut lines = vec![
            "==========================================================".to_string(),
            "LS-8 SIMULATION STATISTICS".to_string(),
            "==========================================================".to_string(),
            format!("host_seconds             {seconds:.4} s"),
            format!("sim_cycles               {}", self.cycles),
            format!("sim_freq                 {khz:.2} kHz"),
            "----------------------------------------------------------".to_string(),
            "INSTRUCTION MIX".to_string(),
        ];
        for (name, count) in [
            ("op.alu", self.inst_alu),
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.stack", self.inst_stack),
            ("op.branch", self.inst_branch),
            ("op.io", self.inst_io),
            ("op.system", self.inst_system),
            ("op.unknown", self.inst_unknown),
        ] {
            lines.push(format!("  {name:<22} {count} ({:.2}%)", pct(count)));
        }
        lines.push("----------------------------------------------------------".to_string());
        lines.push(format!("  branches.taken         {}", self.branches_taken));
        lines.push("==========================================================".to_string());
        lines.join("\n")
    }

    /// Prints all statistics to stdout.
    pub fn print(&self) {
        println!("\n{}", self.report());
    }
}
