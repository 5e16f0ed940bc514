//! Display functions for command results

use super::formatters::{as_micros_f64, as_millis_f64, csv_row, format_histogram};
use crate::commands::{BenchmarkResult, EncodingReport, SolveResult};
use colored::Colorize;

/// Print the result of solving a jumble
///
/// Matches go to stdout one per line, exactly as they appeared in the word list.
/// The verbose summary goes to stderr so the match list stays pipeable.
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    for word in &result.matches {
        println!("{word}");
    }

    if verbose {
        eprintln!("\n{}", "─".repeat(60).cyan());
        eprintln!(
            "Jumble:     {}",
            result.jumble.to_uppercase().bright_yellow().bold()
        );
        eprintln!("Strategy:   {}", result.strategy);
        eprintln!(
            "Matches:    {} of {} candidates",
            result.matches.len().to_string().green().bold(),
            result.candidates
        );
        eprintln!("Time taken: {:.3} ms", as_millis_f64(result.duration));
        eprintln!("{}", "─".repeat(60).cyan());
    }
}

/// Print both encodings of a word
pub fn print_encoding_report(report: &EncodingReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENCODINGS:".bright_cyan().bold(),
        report.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Histogram:     {}", format_histogram(&report.histogram));
    println!(
        "   Prime product: {}",
        report.prime_product.to_string().bright_yellow()
    );
    println!("   Size:          {} bits", report.prime_bits);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    eprintln!("\n{}", "═".repeat(60).cyan());
    eprintln!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    eprintln!("{}", "═".repeat(60).cyan());
    eprintln!(
        "   Candidates: {}   Time taken: {:.2}s",
        result.candidates,
        result.duration.as_secs_f64()
    );

    println!("\nInput length, Prime factors (ms), Letter histograms (ms)");
    for row in &result.solve_rows {
        println!(
            "{}",
            csv_row(row.length, as_millis_f64(row.prime), as_millis_f64(row.histogram))
        );
    }

    println!("\nInput length, Prime products (us), Letter histograms (us)");
    for row in &result.encode_rows {
        println!(
            "{}",
            csv_row(row.length, as_micros_f64(row.prime), as_micros_f64(row.histogram))
        );
    }
}
