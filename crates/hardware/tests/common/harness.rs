use ls8_core::Simulator;
use ls8_core::common::SimError;
use ls8_core::config::Config;
use ls8_core::core::Cpu;
use ls8_core::core::cpu::{HaltReason, StepOutcome};
use tracing_subscriber::EnvFilter;

/// A simulator whose program output is captured in memory.
#[derive(Debug)]
pub struct TestContext {
    pub sim: Simulator<Vec<u8>>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            sim: Simulator::new(config, Vec::new()),
        }
    }

    /// A context that rejects unknown opcodes.
    pub fn strict() -> Self {
        let mut config = Config::default();
        config.general.strict_opcodes = true;
        Self::with_config(&config)
    }

    /// A context that aborts after `limit` instructions.
    pub fn with_cycle_limit(limit: u64) -> Self {
        let mut config = Config::default();
        config.general.max_cycles = Some(limit);
        Self::with_config(&config)
    }

    /// Load a program image at address 0 and reset the CPU.
    pub fn load_program(mut self, image: &[u8]) -> Self {
        self.sim.load_image(image).unwrap();
        self
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    pub fn set_reg(&mut self, reg: usize, val: u8) {
        self.sim.cpu.regs.write(reg, val).unwrap();
    }

    pub fn get_reg(&self, reg: usize) -> u8 {
        self.sim.cpu.regs.read(reg).unwrap()
    }

    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        self.sim.tick()
    }

    /// Step `n` times, panicking if the machine errors or halts early.
    pub fn step_n(&mut self, n: usize) {
        for i in 0..n {
            assert_eq!(
                self.step().unwrap(),
                StepOutcome::Running,
                "machine stopped at step {i}"
            );
        }
    }

    pub fn run(&mut self) -> Result<HaltReason, SimError> {
        self.sim.run()
    }

    /// Everything the program has printed so far.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(self.sim.output()).into_owned()
    }
}
