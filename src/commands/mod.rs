//! Command implementations

pub mod benchmark;
pub mod encode;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, TimingRow, run_benchmark};
pub use encode::{EncodingReport, encode_word};
pub use solve::{SolveConfig, SolveResult, solve_jumble};
