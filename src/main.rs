//! Jumble Solver - CLI
//!
//! Prints every word of a word list that can be spelled from a jumble's letters.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use jumble_solver::{
    commands::{BenchmarkConfig, SolveConfig, encode_word, run_benchmark, solve_jumble},
    encoding::EncoderKind,
    output::{print_benchmark_result, print_encoding_report, print_solve_result},
    wordlists::{DEFAULT_WORDLIST, loader::load_from_file},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "jumble_solver",
    about = "Find the words hidden in a jumble of letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: prime (default) or histogram
    #[arg(short, long, global = true, default_value = "prime")]
    strategy: String,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every word list entry that fits the jumble
    Solve {
        /// The jumbled letters
        jumble: String,

        /// Test candidates on all cores
        #[arg(long)]
        parallel: bool,

        /// Print a summary with counts and timing to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the histogram and prime product of a word
    Encode {
        /// Word to encode
        word: String,
    },

    /// Compare both strategies on random jumbles
    Benchmark {
        /// Longest random jumble to test
        #[arg(long, default_value = "100")]
        max_length: usize,

        /// Random jumbles per length
        #[arg(short = 'n', long, default_value = "20")]
        trials: usize,

        /// Repetitions when timing the encode step alone
        #[arg(long, default_value = "100")]
        reps: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            jumble,
            parallel,
            verbose,
        } => run_solve_command(&cli.strategy, cli.wordlist, jumble, parallel, verbose),
        Commands::Encode { word } => run_encode_command(&word),
        Commands::Benchmark {
            max_length,
            trials,
            reps,
        } => run_benchmark_command(&cli.wordlist, max_length, trials, reps),
    }
}

fn parse_strategy(name: &str) -> Result<EncoderKind> {
    EncoderKind::from_name(name)
        .ok_or_else(|| anyhow!("Unknown strategy {name:?} (expected 'prime' or 'histogram')"))
}

fn run_solve_command(
    strategy_name: &str,
    wordlist: PathBuf,
    jumble: String,
    parallel: bool,
    verbose: bool,
) -> Result<()> {
    let mut config = SolveConfig::new(jumble);
    config.strategy = parse_strategy(strategy_name)?;
    config.wordlist = wordlist;
    config.parallel = parallel;

    let result = solve_jumble(&config)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_encode_command(word: &str) -> Result<()> {
    let report = encode_word(word)?;
    print_encoding_report(&report);
    Ok(())
}

fn run_benchmark_command(
    wordlist: &Path,
    max_length: usize,
    trials: usize,
    reps: usize,
) -> Result<()> {
    let words = load_from_file(wordlist)
        .with_context(|| format!("Failed to read word list {}", wordlist.display()))?;

    let config = BenchmarkConfig {
        max_length,
        trials,
        reps,
        ..BenchmarkConfig::new()
    };

    eprintln!(
        "Benchmarking {} candidates, jumbles of 1..={max_length} letters, {trials} trials each...",
        words.len()
    );
    let result = run_benchmark(&config, &words);
    print_benchmark_result(&result);
    Ok(())
}
