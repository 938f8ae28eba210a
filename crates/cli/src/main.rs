//! Command-line front end for the 32-bit ALU.
//!
//! This binary drives the execution unit from a shell. It provides:
//! 1. **Single evaluation:** `alu eval <OP> <A> <B>` prints one result row (or JSON).
//! 2. **Opcode table:** `alu table <A> <B>` prints the row for all 16 selector values.
//! 3. **Vector check:** `alu check <FILE>` evaluates a JSON vector file and reports mismatches.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;
use simple_alu_core::common::word::{parse_word, to_signed};
use simple_alu_core::config::Radix;
use simple_alu_core::report::format_line;
use simple_alu_core::{Config, ExecutionUnit, Opcode};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod vectors;

use vectors::{CliError, Mismatch, VectorFile};

#[derive(Parser, Debug)]
#[command(
    name = "alu",
    author,
    version,
    about = "32-bit combinational ALU",
    long_about = "Evaluate the 32-bit ALU from the command line.\n\nOperands accept decimal, negative decimal (two's complement), 0x hex and 0b binary.\nOperations accept mnemonics (add, sltu, ...) or selector numbers (0-15).\n\nExamples:\n  alu eval add 0x7fffffff 1\n  alu table 0x87654321 0x12345678 --radix dec\n  alu check vectors.json --stats"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number base for printed words (overrides the config file).
    #[arg(long, global = true)]
    radix: Option<Radix>,

    /// Print evaluation statistics when done.
    #[arg(long, global = true)]
    stats: bool,

    /// Debug-level logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one operation.
    Eval {
        /// Operation mnemonic or selector number.
        op: Opcode,

        /// First operand.
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        a: u32,

        /// Second operand.
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        b: u32,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Evaluate every selector value (including reserved ones) for one operand pair.
    Table {
        /// First operand.
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        a: u32,

        /// Second operand.
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        b: u32,
    },

    /// Check a JSON vector file; exits with status 1 on any mismatch.
    Check {
        /// Vector file path.
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr subscriber. `RUST_LOG` is honored unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let mut config = cli.config.as_ref().map_or_else(
        || Ok(Config::default()),
        |path| {
            info!(path = %path.display(), "loading config");
            Config::load(path)
        },
    )?;
    if let Some(radix) = cli.radix {
        config.report.radix = radix;
    }
    debug!(?config, "effective configuration");

    let mut unit = ExecutionUnit::new(&config);
    let code = match &cli.command {
        Commands::Eval { op, a, b, json } => {
            let out = unit.execute(*a, *b, *op);
            if *json {
                let record = json!({
                    "op": op.to_string(),
                    "a": a,
                    "b": b,
                    "result": out.result,
                    "signed": to_signed(out.result),
                    "zero": out.zero,
                    "carry": out.carry,
                    "overflow": out.overflow,
                });
                println!("{record}");
            } else {
                println!("{}", format_line(*a, *b, *op, &out, &config.report));
            }
            ExitCode::SUCCESS
        }
        Commands::Table { a, b } => {
            for op in Opcode::ALL {
                let out = unit.execute(*a, *b, op);
                println!("{}", format_line(*a, *b, op, &out, &config.report));
            }
            ExitCode::SUCCESS
        }
        Commands::Check { file } => check(&mut unit, file)?,
    };

    if cli.stats {
        unit.stats().print_sections(&config.report.stats_sections);
    }
    Ok(code)
}

/// Outcome of running a vector file.
#[derive(Debug)]
struct CheckReport {
    total: usize,
    failed: usize,
    mismatches: Vec<Mismatch>,
}

impl CheckReport {
    fn summary(&self) -> String {
        format!("{} of {} vectors passed", self.total - self.failed, self.total)
    }

    const fn exit_code(&self) -> ExitCode {
        if self.failed == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Evaluates every vector in `file` through `unit`, collecting mismatches.
fn run_vectors(unit: &mut ExecutionUnit, file: &Path) -> Result<CheckReport, CliError> {
    let cases = VectorFile::load(file)?.cases()?;
    info!(count = cases.len(), file = %file.display(), "checking vectors");

    let mut report = CheckReport {
        total: cases.len(),
        failed: 0,
        mismatches: Vec::new(),
    };
    for case in &cases {
        let out = unit.execute(case.a, case.b, case.op);
        let mismatches = case.compare(&out);
        if !mismatches.is_empty() {
            report.failed += 1;
        }
        report.mismatches.extend(mismatches);
    }
    Ok(report)
}

/// Runs every vector in `file` and prints one line per mismatching field.
fn check(unit: &mut ExecutionUnit, file: &Path) -> Result<ExitCode, CliError> {
    let report = run_vectors(unit, file)?;
    for m in &report.mismatches {
        println!("{m}");
    }
    println!("{}", report.summary());
    Ok(report.exit_code())
}
