//! Word list loading utilities
//!
//! Word lists are plain text with one candidate per line. Lines are handed to the
//! matcher untouched; normalization and filtering happen there.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open a word list for lazy, line-by-line reading
///
/// The file is closed when the returned iterator is dropped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened. Read errors surface later
/// as `Err` items of the iterator.
///
/// # Examples
/// ```no_run
/// use jumble_solver::wordlists::loader::open_lines;
///
/// for line in open_lines("word_list.txt").unwrap() {
///     println!("{}", line.unwrap());
/// }
/// ```
pub fn open_lines<P: AsRef<Path>>(path: P) -> io::Result<io::Lines<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(read_lines(BufReader::new(file)))
}

/// Adapt any buffered reader into a line iterator
///
/// Line terminators (`\n` or `\r\n`) are stripped; everything else is kept.
pub fn read_lines<R: BufRead>(reader: R) -> io::Lines<R> {
    reader.lines()
}

/// Load every line of a word list into memory
///
/// Used where random access is needed, such as parallel solving.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    open_lines(path)?.collect()
}
