//! Word list loading utilities
//!
//! Provides functions to load word lists from files or normalize embedded constants.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

/// Normalize a candidate word: trimmed, lowercase, alphabetic, exact length
///
/// Returns `None` for anything that cannot be played at `length`.
#[must_use]
pub fn normalize_word(raw: &str, length: usize) -> Option<String> {
    let word = raw.trim().to_lowercase();
    let valid = word.chars().count() == length && word.chars().all(char::is_alphabetic);
    valid.then_some(word)
}

/// Load words of one length from a file
///
/// Returns normalized words in file order, skipping blank or invalid lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_daily::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers_5.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path.as_ref())?;
    let words = words_from_lines(content.lines(), length);
    debug!(count = words.len(), "Loaded word list");
    Ok(words)
}

/// Convert an embedded string slice to normalized words
///
/// # Examples
/// ```
/// use wordle_daily::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "SLATE"], 5);
/// assert_eq!(words, vec!["crane".to_string(), "slate".to_string()]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<String> {
    words_from_lines(slice.iter().copied(), length)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>, length: usize) -> Vec<String> {
    lines
        .filter_map(|line| normalize_word(line, length))
        .collect()
}
