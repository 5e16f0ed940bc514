//! Benchmark command
//!
//! Compares both encodings on random jumbles of increasing length, timing a full
//! word list solve and the bare encoding step.

use crate::encoding::{Encoder, EncoderKind, HistogramEncoder, PrimeProductEncoder};
use crate::matcher::solve;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Longest jumble tested; lengths run from 1 up to this
    pub max_length: usize,
    /// Random jumbles per length
    pub trials: usize,
    /// Encodings per jumble when timing the encode step alone
    pub reps: usize,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_length: 100,
            trials: 20,
            reps: 100,
            show_progress: true,
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Average time per strategy for one jumble length
#[derive(Debug, Clone, Copy)]
pub struct TimingRow {
    pub length: usize,
    pub prime: Duration,
    pub histogram: Duration,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    /// Average full solve time per length
    pub solve_rows: Vec<TimingRow>,
    /// Average single encode time per length
    pub encode_rows: Vec<TimingRow>,
    pub candidates: usize,
    pub duration: Duration,
}

/// Generate a jumble of uniformly random letters
pub fn random_jumble<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(rng.random_range(b'a'..=b'z')))
        .collect()
}

/// Run the benchmark against a word list
pub fn run_benchmark(config: &BenchmarkConfig, words: &[String]) -> BenchmarkResult {
    let start = Instant::now();
    let mut rng = rand::rng();

    let pb = if config.show_progress {
        ProgressBar::new(config.max_length as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut solve_rows = Vec::with_capacity(config.max_length);
    let mut encode_rows = Vec::with_capacity(config.max_length);

    for length in 1..=config.max_length {
        pb.set_message(format!("length {length}"));

        let mut solve_prime = Duration::ZERO;
        let mut solve_hist = Duration::ZERO;
        let mut encode_prime = Duration::ZERO;
        let mut encode_hist = Duration::ZERO;

        for _ in 0..config.trials {
            let jumble = random_jumble(&mut rng, length);

            solve_prime += time(|| solve(EncoderKind::PrimeProduct, &jumble, words));
            solve_hist += time(|| solve(EncoderKind::Histogram, &jumble, words));

            encode_prime += time_reps(config.reps, || PrimeProductEncoder.encode(&jumble));
            encode_hist += time_reps(config.reps, || HistogramEncoder.encode(&jumble));
        }

        solve_rows.push(average_row(length, solve_prime, solve_hist, config.trials));
        encode_rows.push(average_row(length, encode_prime, encode_hist, config.trials));
        pb.inc(1);
    }

    pb.finish_with_message("done");

    BenchmarkResult {
        solve_rows,
        encode_rows,
        candidates: words.len(),
        duration: start.elapsed(),
    }
}

fn time<T>(f: impl FnOnce() -> T) -> Duration {
    let start = Instant::now();
    black_box(f());
    start.elapsed()
}

/// Mean duration of one call over `reps` calls
fn time_reps<T>(reps: usize, mut f: impl FnMut() -> T) -> Duration {
    let start = Instant::now();
    for _ in 0..reps {
        black_box(f());
    }
    average(start.elapsed(), reps)
}

fn average(total: Duration, count: usize) -> Duration {
    u32::try_from(count)
        .ok()
        .and_then(|count| total.checked_div(count))
        .unwrap_or_default()
}

fn average_row(length: usize, prime: Duration, histogram: Duration, trials: usize) -> TimingRow {
    TimingRow {
        length,
        prime: average(prime, trials),
        histogram: average(histogram, trials),
    }
}
