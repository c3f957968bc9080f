//! One-time hint selection
//!
//! A hint reveals one answer letter at a position that no guess has yet
//! matched exactly.

use crate::core::{GameError, TileState};
use serde::{Deserialize, Serialize};

/// Board coordinate of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A revealed column and its answer letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintChoice {
    pub col: usize,
    pub letter: char,
}

/// Chooses which letter a hint reveals
///
/// Picks the leftmost column not yet marked correct in any feedback row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HintProvider;

impl HintProvider {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Pick the column to reveal
    ///
    /// # Errors
    /// Returns `GameError::HintUnavailable` if every column is already correct.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::game::{HintProvider, evaluate};
    ///
    /// let feedback = vec![evaluate("HELLO", "HELPS")];
    /// let hint = HintProvider::new().pick("HELLO", &feedback).unwrap();
    /// assert_eq!((hint.col, hint.letter), (3, 'L'));
    /// ```
    pub fn pick(&self, answer: &str, feedback: &[Vec<TileState>]) -> Result<HintChoice, GameError> {
        answer
            .to_uppercase()
            .chars()
            .enumerate()
            .find(|&(col, _)| !is_revealed(feedback, col))
            .map(|(col, letter)| HintChoice { col, letter })
            .ok_or(GameError::HintUnavailable)
    }
}

/// True if any row marks `col` as correct
#[must_use]
pub fn is_revealed(feedback: &[Vec<TileState>], col: usize) -> bool {
    feedback
        .iter()
        .any(|row| row.get(col) == Some(&TileState::Correct))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileState::{Absent, Correct, Present};
    use crate::game::evaluate;

    #[test]
    fn no_guesses_reveals_first_letter() {
        let hint = HintProvider::new().pick("crane", &[]).unwrap();
        assert_eq!(hint, HintChoice { col: 0, letter: 'C' });
    }

    #[test]
    fn skips_columns_correct_in_any_row() {
        let feedback = vec![
            vec![Correct, Absent, Absent, Absent, Absent],
            vec![Absent, Correct, Present, Absent, Absent],
        ];
        let hint = HintProvider::new().pick("crane", &feedback).unwrap();
        assert_eq!(hint, HintChoice { col: 2, letter: 'A' });
    }

    #[test]
    fn present_does_not_count_as_revealed() {
        let feedback = vec![vec![Present, Present, Present, Present, Present]];
        let hint = HintProvider::new().pick("crane", &feedback).unwrap();
        assert_eq!(hint.col, 0);
    }

    #[test]
    fn never_picks_a_correct_column() {
        let feedback = vec![evaluate("crane", "crate")];
        let hint = HintProvider::new().pick("crane", &feedback).unwrap();
        assert_eq!(hint, HintChoice { col: 3, letter: 'N' });
        assert!(!is_revealed(&feedback, hint.col));
    }

    #[test]
    fn all_correct_is_unavailable() {
        let feedback = vec![evaluate("crane", "crane")];
        assert_eq!(
            HintProvider::new().pick("crane", &feedback),
            Err(GameError::HintUnavailable)
        );
    }

    #[test]
    fn correct_spread_over_rows_is_unavailable() {
        let feedback = vec![
            vec![Correct, Correct, Absent, Absent],
            vec![Absent, Absent, Correct, Correct],
        ];
        assert_eq!(
            HintProvider::new().pick("tree", &feedback),
            Err(GameError::HintUnavailable)
        );
    }
}
