//! Answer selection
//!
//! Daily answers are a pure function of date, word length and row count.
//! Free-play answers are drawn uniformly at random.

use super::rng::seeded_index;
use crate::core::GameError;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Build the seed string for a daily puzzle
///
/// All three values participate; dropping any one changes every selected word.
///
/// # Examples
/// ```
/// use wordle_daily::daily::daily_seed;
///
/// assert_eq!(daily_seed("2024-01-01", 5, 6), "2024-01-01:5:6");
/// ```
#[must_use]
pub fn daily_seed(date_iso: &str, length: usize, max_rows: usize) -> String {
    format!("{date_iso}:{length}:{max_rows}")
}

/// Picks answers from an ordered word list
///
/// Holds no state, so the same inputs always give the same daily answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordSelector;

impl WordSelector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Select the daily answer
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `answers` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::daily::WordSelector;
    ///
    /// let answers = ["crane", "slate", "irate"];
    /// let word = WordSelector::new().select_daily(5, 6, "2024-01-01", &answers).unwrap();
    /// assert!(answers.contains(&word));
    /// ```
    pub fn select_daily<'a, S: AsRef<str>>(
        &self,
        length: usize,
        max_rows: usize,
        date_iso: &str,
        answers: &'a [S],
    ) -> Result<&'a str, GameError> {
        if answers.is_empty() {
            return Err(GameError::EmptyWordList { length });
        }

        let seed = daily_seed(date_iso, length, max_rows);
        let index = seeded_index(&seed, answers.len());
        Ok(answers[index].as_ref())
    }

    /// Select a free-play answer uniformly at random
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `answers` is empty.
    pub fn select_free<'a, S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        length: usize,
        answers: &'a [S],
        rng: &mut R,
    ) -> Result<&'a str, GameError> {
        answers
            .choose(rng)
            .map(|word| word.as_ref())
            .ok_or(GameError::EmptyWordList { length })
    }
}
