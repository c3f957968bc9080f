//! Word lists for the daily game
//!
//! Answers and accepted guesses per word length. The bundled lists are compiled
//! into the binary; a custom answers file can replace them for one length.

pub mod embedded;
pub mod loader;

pub use embedded::{allowed, answers};

use rustc_hash::{FxHashMap, FxHashSet};
use std::io;
use std::path::Path;
use tracing::{info, instrument};

/// Source of answers and accepted guesses
pub trait WordListProvider {
    /// Answer candidates for a length, lowercase; empty if none are known
    fn answers(&self, length: usize) -> &[String];

    /// True if `word` (any case) may be submitted as a guess at this length
    fn is_accepted_guess(&self, length: usize, word: &str) -> bool;

    fn answer_count(&self, length: usize) -> usize {
        self.answers(length).len()
    }
}

/// Answers plus accepted guesses for one length
#[derive(Debug, Clone, Default)]
struct WordList {
    answers: Vec<String>,
    accepted: FxHashSet<String>,
}

impl WordList {
    /// Accepted guesses always include every answer
    fn new(answers: Vec<String>, allowed: impl IntoIterator<Item = String>) -> Self {
        let mut accepted: FxHashSet<String> = allowed.into_iter().collect();
        accepted.extend(answers.iter().cloned());
        Self { answers, accepted }
    }
}

/// In-memory word lists keyed by length
///
/// # Examples
/// ```
/// use wordle_daily::wordlists::{WordListProvider, WordLists};
///
/// let lists = WordLists::embedded();
/// assert!(lists.answer_count(5) > 0);
/// assert!(lists.is_accepted_guess(5, "CRANE"));
/// assert!(!lists.is_accepted_guess(5, "zzzzz"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    lists: FxHashMap<usize, WordList>,
}

impl WordLists {
    /// Empty provider; every guess is rejected until lists are inserted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The lists bundled at build time for every supported length
    #[must_use]
    pub fn embedded() -> Self {
        let mut lists = Self::new();
        for length in crate::core::SUPPORTED_LENGTHS {
            lists.insert(
                length,
                loader::words_from_slice(answers(length), length),
                loader::words_from_slice(allowed(length), length),
            );
        }
        lists
    }

    /// Set the lists for one length, replacing any previous ones
    ///
    /// Words are expected to be normalized already (see [`loader::normalize_word`]).
    pub fn insert(&mut self, length: usize, answers: Vec<String>, allowed: Vec<String>) {
        self.lists.insert(length, WordList::new(answers, allowed));
    }

    /// Replace the answers for `length` with the words in a file
    ///
    /// The previous accepted guesses stay accepted, so a custom answer list
    /// does not shrink the dictionary.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn with_answers_file<P: AsRef<Path>>(mut self, length: usize, path: P) -> io::Result<Self> {
        let answers = loader::load_from_file(path, length)?;
        let allowed = self
            .lists
            .remove(&length)
            .map(|list| list.accepted.into_iter().collect())
            .unwrap_or_default();
        info!(length, count = answers.len(), "Using custom answer list");
        self.insert(length, answers, allowed);
        Ok(self)
    }
}

impl WordListProvider for WordLists {
    fn answers(&self, length: usize) -> &[String] {
        self.lists
            .get(&length)
            .map_or(&[], |list| list.answers.as_slice())
    }

    fn is_accepted_guess(&self, length: usize, word: &str) -> bool {
        self.lists
            .get(&length)
            .is_some_and(|list| list.accepted.contains(&word.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SUPPORTED_LENGTHS;
    use std::fs;

    #[test]
    fn embedded_counts_match_consts() {
        assert_eq!(answers(4).len(), embedded::ANSWERS_4_COUNT);
        assert_eq!(answers(5).len(), embedded::ANSWERS_5_COUNT);
        assert_eq!(answers(6).len(), embedded::ANSWERS_6_COUNT);
        assert_eq!(answers(7).len(), embedded::ANSWERS_7_COUNT);
        assert_eq!(allowed(5).len(), embedded::ALLOWED_5_COUNT);
    }

    #[test]
    fn expected_counts() {
        assert_eq!(answers(4).len(), 97);
        assert_eq!(answers(5).len(), 362);
        assert_eq!(answers(6).len(), 110);
        assert_eq!(answers(7).len(), 89);
        assert_eq!(allowed(4).len(), 137);
        assert_eq!(allowed(5).len(), 379);
        assert_eq!(allowed(6).len(), 126);
        assert_eq!(allowed(7).len(), 105);
    }

    #[test]
    fn unsupported_length_is_empty() {
        assert!(answers(3).is_empty());
        assert!(allowed(8).is_empty());
    }

    #[test]
    fn embedded_words_are_valid() {
        for length in SUPPORTED_LENGTHS {
            for &word in answers(length).iter().chain(allowed(length)) {
                assert_eq!(word.chars().count(), length, "Word '{word}' has wrong length");
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "Word '{word}' contains non-lowercase chars"
                );
            }
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        for length in SUPPORTED_LENGTHS {
            let allowed_set: FxHashSet<_> = allowed(length).iter().collect();
            for answer in answers(length) {
                assert!(
                    allowed_set.contains(answer),
                    "Answer '{answer}' not in allowed list"
                );
            }
        }
    }

    #[test]
    fn provider_accepts_case_insensitively() {
        let lists = WordLists::embedded();
        assert!(lists.is_accepted_guess(5, "hello"));
        assert!(lists.is_accepted_guess(5, "HeLLo"));
        assert!(!lists.is_accepted_guess(4, "hello"));
        assert!(!lists.is_accepted_guess(9, "hello"));
    }

    #[test]
    fn answers_are_always_accepted() {
        let mut lists = WordLists::new();
        lists.insert(4, vec!["tree".to_string()], vec!["bird".to_string()]);
        assert!(lists.is_accepted_guess(4, "tree"));
        assert!(lists.is_accepted_guess(4, "bird"));
        assert_eq!(lists.answer_count(4), 1);
        assert_eq!(lists.answer_count(5), 0);
    }

    #[test]
    fn custom_answers_file_keeps_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.txt");
        fs::write(&path, "crane\nslate\n").unwrap();

        let lists = WordLists::embedded().with_answers_file(5, &path).unwrap();
        assert_eq!(lists.answers(5), ["crane".to_string(), "slate".to_string()]);
        assert!(lists.is_accepted_guess(5, "hello"));
        assert_eq!(lists.answer_count(6), answers(6).len());
    }
}
