// Integration tests for the jumble solver
// These run whole word lists through the public API and the command layer

use jumble_solver::commands::{SolveConfig, solve_jumble};
use jumble_solver::encoding::{HistogramEncoder, PrimeProductEncoder};
use jumble_solver::wordlists::loader::read_lines;
use jumble_solver::{EncoderKind, JumbleError, Matcher, solve};
use std::io::{Cursor, Write};

const KINDS: [EncoderKind; 2] = [EncoderKind::Histogram, EncoderKind::PrimeProduct];

const WORDS: &[&str] = &[
    "a", "ab", "at", "ba", "bat", "bats", "cat", "tab", "tabs", "tea", "zebra",
];

#[test]
fn test_dog_scenario() {
    for kind in KINDS {
        let found = solve(kind, "dog", ["do", "go", "god", "cat", "dogs", "DOG"]).unwrap();
        assert_eq!(found, vec!["do", "go", "god"]);
    }
}

#[test]
fn test_repeated_letter_scenario() {
    for kind in KINDS {
        let found = solve(kind, "aab", ["a", "aa", "ab", "aab", "b", "bb"]).unwrap();
        assert_eq!(found, vec!["a", "aa", "ab", "b"]);
    }
}

#[test]
fn test_empty_jumble_with_empty_candidate() {
    // The empty candidate equals the empty jumble and is excluded
    for kind in KINDS {
        assert_eq!(solve(kind, "", ["a", ""]).unwrap(), Vec::<String>::new());
    }
}

#[test]
fn test_solves_bat() {
    for kind in KINDS {
        let found = solve(kind, "bat", WORDS).unwrap();
        assert_eq!(found, vec!["a", "ab", "at", "ba", "tab"]);
        assert!(!found.contains(&"bat".to_string()));
    }
}

#[test]
fn test_rejects_inner_whitespace_in_jumble() {
    for jumble in ["a b", "aaa bbb", "aaa\nbbb"] {
        for kind in KINDS {
            assert!(matches!(
                solve(kind, jumble, WORDS),
                Err(JumbleError::InvalidInput { .. })
            ));
        }
    }
}

#[test]
fn test_rejects_punctuation_in_jumble() {
    for jumble in ["-", "_", "a-a", "a's"] {
        for kind in KINDS {
            assert!(solve(kind, jumble, WORDS).is_err(), "{jumble:?}");
        }
    }
}

#[test]
fn test_rejects_accented_jumble() {
    for kind in KINDS {
        assert!(solve(kind, "déjàvu", WORDS).is_err());
    }
}

#[test]
fn test_outer_whitespace_and_case_ignored() {
    for jumble in [" bat", "bat ", "BAT", "\tBaT\n"] {
        for kind in KINDS {
            assert_eq!(solve(kind, jumble, WORDS).unwrap().len(), 5, "{jumble:?}");
        }
    }
}

#[test]
fn test_long_jumble_matches_every_short_word() {
    let jumble = "abcdefghijklmnopqrstuvwxyz".repeat(5);
    for kind in KINDS {
        let found = solve(kind, &jumble, WORDS).unwrap();
        assert_eq!(found.len(), WORDS.len());
    }
}

#[test]
fn test_high_letter_stress() {
    let jumble = "zyx".repeat(10);
    let words = [
        "z".repeat(10),
        "zyx".repeat(9),
        "zyx".repeat(10),
        "z".repeat(11),
        format!("{}a", "zy".repeat(5)),
    ];

    for kind in KINDS {
        let found = solve(kind, &jumble, &words).unwrap();
        assert_eq!(found, vec!["z".repeat(10), "zyx".repeat(9)]);
    }
}

#[test]
fn test_streaming_word_list() {
    let input = "do\r\n go \nGOD\ncat\n\n12\ndogs\n";
    let matcher = Matcher::new(PrimeProductEncoder, "dog").unwrap();

    let found = matcher.try_solve(read_lines(Cursor::new(input))).unwrap();
    assert_eq!(found, vec!["do", " go ", "GOD"]);
}

#[test]
fn test_parallel_matches_sequential_on_large_list() {
    let words: Vec<String> = (0..5_000)
        .map(|i| WORDS[i % WORDS.len()].repeat(1 + i % 3))
        .collect();
    let matcher = Matcher::new(HistogramEncoder, "tabbaatt").unwrap();

    assert_eq!(matcher.solve_parallel(&words), matcher.solve(&words));
}

#[test]
fn test_solve_command_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for word in WORDS {
        writeln!(file, "{word}").unwrap();
    }

    for strategy in KINDS {
        let mut config = SolveConfig::new("TAB".to_string());
        config.strategy = strategy;
        config.wordlist = file.path().to_path_buf();

        let result = solve_jumble(&config).unwrap();
        assert_eq!(result.matches, vec!["a", "ab", "at", "ba", "bat"]);
        assert_eq!(result.candidates, WORDS.len());
    }
}
