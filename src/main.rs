//! Quicksort demo and empirical analysis CLI.
//!
//! Without a subcommand it sorts the demo array with both variants, then runs the analysis with
//! default settings.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use quicksort_comp::analysis::{self, AnalysisConfig, Distribution};
use quicksort_comp::{patterns, sort_deterministic, sort_randomized, AnalysisError, SortLimits};

const DEMO_INPUT: [i32; 6] = [10, 7, 8, 9, 1, 5];

/// Deterministic vs randomized pivot quicksort
#[derive(Parser, Debug)]
#[command(name = "quicksort", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort a small array with both variants and print the results
    Demo {
        /// Values to sort [default: 10 7 8 9 1 5]
        #[arg(value_name = "VALUE", allow_negative_numbers = true)]
        values: Vec<i32>,
    },
    /// Time both variants over input sizes and distributions
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Input sizes, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = analysis::DEFAULT_LENS)]
    sizes: Vec<usize>,

    /// Input distributions, comma separated
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = Distribution::ALL)]
    distributions: Vec<Distribution>,

    /// Timed sorts per variant and input, the median is reported
    #[arg(long, default_value_t = 1)]
    samples: usize,

    /// Seed for input generation and randomized pivots, random if not given
    #[arg(long, env = "QUICKSORT_SEED")]
    seed: Option<u64>,

    /// Deepest recursion level a sort may reach before it is reported as failed
    #[arg(long, default_value_t = analysis::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Reject inputs longer than this
    #[arg(long)]
    max_len: Option<usize>,

    /// Also report mean comparison counts and the deepest recursion level per variant
    #[arg(long)]
    comparisons: bool,
}

impl AnalyzeArgs {
    fn to_config(&self) -> AnalysisConfig {
        let limits = SortLimits {
            max_len: self.max_len,
            max_depth: Some(self.max_depth),
        };

        AnalysisConfig {
            lens: self.sizes.clone(),
            distributions: self.distributions.clone(),
            samples: self.samples,
            limits,
            show_comparisons: self.comparisons,
        }
    }
}

fn main() -> ExitCode {
    // Initialize structured logging with env-based filter. Defaults to warn, the report goes to
    // stdout and should stay readable.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "quicksort failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AnalysisError> {
    match cli.command {
        None => {
            demo(&DEMO_INPUT);
            println!("\nEmpirical Analysis:");
            analyze(&AnalysisConfig::default(), None)
        }
        Some(Command::Demo { values }) => {
            if values.is_empty() {
                demo(&DEMO_INPUT);
            } else {
                demo(&values);
            }
            Ok(())
        }
        Some(Command::Analyze(args)) => analyze(&args.to_config(), args.seed),
    }
}

fn demo(values: &[i32]) {
    println!("Original array: {values:?}");

    let mut deterministic = values.to_vec();
    sort_deterministic(&mut deterministic);
    println!("Deterministic Quicksort: {deterministic:?}");

    let mut randomized = values.to_vec();
    sort_randomized(&mut randomized);
    println!("Randomized Quicksort: {randomized:?}");
}

fn analyze(config: &AnalysisConfig, seed: Option<u64>) -> Result<(), AnalysisError> {
    let seed_in_effect = patterns::init_seed(seed);
    tracing::debug!(seed = seed_in_effect, "input seed");

    let report = analysis::run(config)?;

    // Always write the seed, a run can be repeated by passing it back in.
    println!("Seed: {seed_in_effect}\n");
    print!("{report}");

    Ok(())
}
