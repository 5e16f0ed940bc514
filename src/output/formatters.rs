//! Formatting utilities for terminal output

use std::fmt::Write;
use std::time::Duration;

/// Format a histogram as `letter:count` pairs
#[must_use]
pub fn format_histogram(counts: &[(char, u32)]) -> String {
    let mut out = String::with_capacity(counts.len() * 4);
    for (i, (letter, count)) in counts.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{letter}:{count}");
    }
    out
}

/// Format one CSV row of a timing table
#[must_use]
pub fn csv_row(length: usize, prime: f64, histogram: f64) -> String {
    format!("{length}, {prime:.4}, {histogram:.4}")
}

/// Duration in fractional milliseconds
#[must_use]
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

/// Duration in fractional microseconds
#[must_use]
pub fn as_micros_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000_000.0
}
