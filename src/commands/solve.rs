//! Jumble solving command
//!
//! Reads a word list from disk and returns every entry that fits the jumble.

use crate::encoding::{Encoder, EncoderKind, HistogramEncoder, PrimeProductEncoder};
use crate::matcher::Matcher;
use crate::wordlists::DEFAULT_WORDLIST;
use crate::wordlists::loader::{load_from_file, open_lines};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for solving a jumble
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub jumble: String,
    pub strategy: EncoderKind,
    pub wordlist: PathBuf,
    pub parallel: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(jumble: String) -> Self {
        Self {
            jumble,
            strategy: EncoderKind::default(),
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            parallel: false,
        }
    }
}

/// Result of solving a jumble
#[derive(Debug)]
pub struct SolveResult {
    /// Normalized jumble letters
    pub jumble: String,
    pub strategy: EncoderKind,
    /// Matching word list lines, in file order
    pub matches: Vec<String>,
    /// Number of word list lines tested
    pub candidates: usize,
    pub duration: Duration,
}

/// Solve a jumble against the configured word list
///
/// # Errors
///
/// Returns an error if:
/// - The jumble contains anything other than letters
/// - The word list cannot be opened or read
pub fn solve_jumble(config: &SolveConfig) -> Result<SolveResult> {
    match config.strategy {
        EncoderKind::Histogram => solve_with(HistogramEncoder, config),
        EncoderKind::PrimeProduct => solve_with(PrimeProductEncoder, config),
    }
}

fn solve_with<E>(encoder: E, config: &SolveConfig) -> Result<SolveResult>
where
    E: Encoder + Sync,
    E::Encoding: Sync,
{
    let start = Instant::now();
    let matcher = Matcher::new(encoder, &config.jumble)?;
    let wordlist = config.wordlist.display();

    let (matches, candidates) = if config.parallel {
        let lines = load_from_file(&config.wordlist)
            .with_context(|| format!("Failed to read word list {wordlist}"))?;
        (matcher.solve_parallel(&lines), lines.len())
    } else {
        let mut candidates = 0usize;
        let lines = open_lines(&config.wordlist)
            .with_context(|| format!("Failed to open word list {wordlist}"))?
            .inspect(|_| candidates += 1);
        let matches = matcher
            .try_solve(lines)
            .with_context(|| format!("Failed to read word list {wordlist}"))?;
        (matches, candidates)
    };

    Ok(SolveResult {
        jumble: matcher.context().letters().to_string(),
        strategy: config.strategy,
        matches,
        candidates,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn word_list(words: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for word in words {
            writeln!(file, "{word}").unwrap();
        }
        file
    }

    fn config(jumble: &str, file: &tempfile::NamedTempFile) -> SolveConfig {
        let mut config = SolveConfig::new(jumble.to_string());
        config.wordlist = file.path().to_path_buf();
        config
    }

    #[test]
    fn solve_config_defaults() {
        let config = SolveConfig::new("dog".to_string());
        assert_eq!(config.strategy, EncoderKind::PrimeProduct);
        assert_eq!(config.wordlist, PathBuf::from("word_list.txt"));
        assert!(!config.parallel);
    }

    #[test]
    fn solve_reads_word_list() {
        let file = word_list(&["do", "go", "god", "cat", "dogs", "DOG"]);
        let result = solve_jumble(&config(" Dog ", &file)).unwrap();

        assert_eq!(result.jumble, "dog");
        assert_eq!(result.matches, vec!["do", "go", "god"]);
        assert_eq!(result.candidates, 6);
    }

    #[test]
    fn every_mode_agrees() {
        let file = word_list(&["bat", "tab", "at", "ta", "bta", "tabs", "a's", "cat"]);

        let mut results = Vec::new();
        for strategy in [EncoderKind::Histogram, EncoderKind::PrimeProduct] {
            for parallel in [false, true] {
                let mut config = config("bat", &file);
                config.strategy = strategy;
                config.parallel = parallel;
                results.push(solve_jumble(&config).unwrap().matches);
            }
        }

        assert!(results.iter().all(|m| m == &vec!["tab", "at", "ta", "bta"]));
    }

    #[test]
    fn solve_invalid_jumble_returns_error() {
        let file = word_list(&["do"]);
        assert!(solve_jumble(&config("do g", &file)).is_err());
    }

    #[test]
    fn solve_missing_word_list_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SolveConfig::new("dog".to_string());
        config.wordlist = dir.path().join("nope.txt");

        let err = solve_jumble(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to open word list"));
    }

    #[test]
    fn solve_result_debug_lists_matches() {
        let file = word_list(&["do", "cat"]);
        let result = solve_jumble(&config("dog", &file)).unwrap();

        let debug = format!("{result:?}");
        assert!(debug.contains("SolveResult"));
        assert!(debug.contains("\"do\""));
        assert!(format!("{:?}", config("dog", &file)).contains("SolveConfig"));
    }
}
