//! AoC Puzzles CLI Application
//!
//! This is the command-line interface for the puzzle solvers.
//! It uses the aoc-puzzles library and adds:
//! - Argument parsing and TOML configuration
//! - Solving several input files in parallel
//! - Text or JSON output

use anyhow::{Context, Result};
use aoc_puzzles::{CountingMethod, Puzzle, RepeatRule, Solver, SolverConfig};
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use std::path::PathBuf;

mod config;
mod report;

use config::{AppConfig, OutputFormat};

/// AoC Puzzles - Solve dial and invalid-ID puzzle inputs
#[derive(Parser, Debug)]
#[command(name = "aoc")]
#[command(about = "Solve dial and invalid-ID puzzle inputs", long_about = None)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Print one JSON object per input instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count how often the dial pointer reaches zero
    Dial {
        /// Input file(s) of L<n>/R<n> rotation commands
        #[arg(required = true, value_name = "FILE")]
        inputs: Vec<PathBuf>,

        /// Starting position of the pointer
        #[arg(long, value_name = "POSITION")]
        start: Option<u64>,

        /// Number of positions on the dial
        #[arg(long, value_name = "POSITIONS")]
        size: Option<u64>,

        /// Which zero events to count
        #[arg(long, value_enum)]
        method: Option<MethodArg>,
    },

    /// Sum the invalid IDs inside comma-separated ranges
    Ids {
        /// Input file(s) of start-end ranges
        #[arg(required = true, value_name = "FILE")]
        inputs: Vec<PathBuf>,

        /// Which digit patterns make an ID invalid
        #[arg(long, value_enum)]
        rule: Option<RuleArg>,

        /// Count IDs shared by overlapping ranges only once
        #[arg(long)]
        merge_overlaps: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MethodArg {
    /// Every landing on or pass over zero
    PassOverZero,
    /// Only rotations that stop on zero
    EndOnZero,
}

impl From<MethodArg> for CountingMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::PassOverZero => CountingMethod::PassOverZero,
            MethodArg::EndOnZero => CountingMethod::EndOnZero,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RuleArg {
    /// A digit block repeated exactly twice
    Twice,
    /// A digit block repeated two or more times
    AtLeastTwice,
}

impl From<RuleArg> for RepeatRule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Twice => RepeatRule::Twice,
            RuleArg::AtLeastTwice => RepeatRule::AtLeastTwice,
        }
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("AoC Puzzles CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using puzzle library v{}", aoc_puzzles::VERSION);

    let app_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    let format = if args.json {
        OutputFormat::Json
    } else {
        app_config.output.format
    };

    let (puzzle, inputs, solver_config) = apply_overrides(&args.command, app_config.solver);
    let solver = Solver::with_config(solver_config);
    log::debug!("Solver configuration: {:?}", solver.config());

    let answers = inputs
        .par_iter()
        .map(|path| {
            solver
                .solve_file(puzzle, path)
                .with_context(|| format!("Failed to solve {} puzzle for {:?}", puzzle, path))
        })
        .collect::<Result<Vec<_>>>()?;

    let show_input = inputs.len() > 1;
    for (path, answer) in inputs.iter().zip(&answers) {
        println!(
            "{}",
            report::render(format, puzzle, path, answer, show_input)?
        );
    }

    Ok(())
}

/// Layer command-line flags over the file configuration
fn apply_overrides(
    command: &Command,
    mut config: SolverConfig,
) -> (Puzzle, &[PathBuf], SolverConfig) {
    match command {
        Command::Dial {
            inputs,
            start,
            size,
            method,
        } => {
            if let Some(start) = start {
                config = config.with_dial_start(*start);
            }
            if let Some(size) = size {
                config = config.with_dial_size(*size);
            }
            if let Some(method) = method {
                config = config.with_counting_method((*method).into());
            }
            (Puzzle::Dial, inputs.as_slice(), config)
        }
        Command::Ids {
            inputs,
            rule,
            merge_overlaps,
        } => {
            if let Some(rule) = rule {
                config = config.with_repeat_rule((*rule).into());
            }
            if *merge_overlaps {
                config = config.with_merged_overlaps(true);
            }
            (Puzzle::InvalidIds, inputs.as_slice(), config)
        }
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    // Answers go to stdout; keep stderr quiet unless asked.
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
