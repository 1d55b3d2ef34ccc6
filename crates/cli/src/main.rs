//! LS-8 simulator CLI.
//!
//! This binary provides a single entry point for working with LS-8 programs. It performs:
//! 1. **Run:** Load a program file, execute it to completion, and print its output.
//! 2. **Disassemble:** List a program file as LS-8 assembly without running it.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::Subscriber;
use tracing_subscriber::filter::{self, EnvFilter};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use ls8_core::config::Config;
use ls8_core::core::cpu::HaltReason;
use ls8_core::isa::disasm;
use ls8_core::sim::simulator::TRACE_TARGET;
use ls8_core::sim::{Simulator, loader};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 instruction-set simulator",
    long_about = "Run or disassemble LS-8 programs.\n\nPrograms are text files with one 8-bit binary literal per line; `#` starts a comment.\n\nExamples:\n  ls8 run demos/print8.ls8\n  ls8 run --trace --max-cycles 1000 demos/call.ls8\n  ls8 disasm demos/stack.ls8"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a program and run it until it halts.
    Run {
        /// Program file to execute.
        program: PathBuf,

        /// Print a TRACE line to stderr before every instruction.
        #[arg(short, long)]
        trace: bool,

        /// Treat unknown opcodes as fatal instead of skipping them.
        #[arg(long)]
        strict: bool,

        /// Abort after this many instructions without a halt.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// JSON configuration file; command-line flags override it.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print execution statistics after the run.
        #[arg(long)]
        stats: bool,

        /// Print execution statistics as JSON after the run.
        #[arg(long, conflicts_with = "stats")]
        stats_json: bool,
    },

    /// Disassemble a program file without running it.
    Disasm {
        /// Program file to list.
        program: PathBuf,
    },
}

/// Options of the `run` subcommand after parsing.
struct RunArgs {
    program: PathBuf,
    trace: bool,
    strict: bool,
    max_cycles: Option<u64>,
    config: Option<PathBuf>,
    stats: bool,
    stats_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            program,
            trace,
            strict,
            max_cycles,
            config,
            stats,
            stats_json,
        } => cmd_run(&RunArgs {
            program,
            trace,
            strict,
            max_cycles,
            config,
            stats,
            stats_json,
        }),
        Commands::Disasm { program } => {
            init_logging(false);
            cmd_disasm(&program)
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` controls the filter for ordinary logs (default `warn`). When
/// `trace` is set, per-instruction lines are written bare by a second layer.
fn init_logging(trace: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Ok(directive) = format!("{TRACE_TARGET}=off").parse() {
        filter = filter.add_directive(directive);
    }
    let log_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(log_layer)
        .with(trace.then(|| trace_layer(io::stderr)))
        .init();
}

/// Layer printing only the `TRACE:` lines, with no level, time, or colour.
fn trace_layer<S, W>(make_writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span> + 'static,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    fmt::layer()
        .with_writer(make_writer)
        .with_ansi(false)
        .with_level(false)
        .with_target(false)
        .without_time()
        .with_filter(filter::filter_fn(|meta| meta.target() == TRACE_TARGET))
}

/// Builds the run configuration: file (or defaults), then command-line overrides.
fn build_config(args: &RunArgs) -> Result<Config, String> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path).map_err(|e| e.to_string())?,
        None => Config::default(),
    };
    if args.trace {
        config.general.trace_instructions = true;
    }
    if args.strict {
        config.general.strict_opcodes = true;
    }
    if args.max_cycles.is_some() {
        config.general.max_cycles = args.max_cycles;
    }
    Ok(config)
}

/// Loads and runs a program, printing its output to stdout.
///
/// Exits with 0 when the machine halts (including a division-by-zero halt) and
/// 1 on a load or execution error, after dumping the machine state.
fn cmd_run(args: &RunArgs) -> ExitCode {
    let config = build_config(args);
    init_logging(
        config
            .as_ref()
            .is_ok_and(|config| config.general.trace_instructions),
    );
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[!] {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut sim = Simulator::new(&config, io::stdout().lock());
    if let Err(e) = sim.load(&args.program) {
        eprintln!("[!] {e}");
        return ExitCode::FAILURE;
    }

    let code = match sim.run() {
        Ok(HaltReason::Hlt) => ExitCode::SUCCESS,
        Ok(HaltReason::DivideByZero) => {
            tracing::info!("halted on division by zero");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            eprintln!("{}", sim.cpu.dump_state());
            ExitCode::FAILURE
        }
    };

    if args.stats {
        sim.cpu.stats.print();
    } else if args.stats_json {
        match sim.cpu.stats.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("[!] could not serialize stats: {e}"),
        }
    }
    code
}

/// Prints an address-annotated listing of a program file.
fn cmd_disasm(program: &Path) -> ExitCode {
    let image = match loader::load_program(program) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("[!] {e}");
            return ExitCode::FAILURE;
        }
    };
    for (addr, text) in disasm::disassemble_program(&image) {
        println!("{addr:02X}: {text}");
    }
    ExitCode::SUCCESS
}
