//! One-shot guess evaluation
//!
//! Scores a guess against a known answer without starting a game.

use crate::core::TileState;
use crate::game::evaluate;
use anyhow::{Result, bail};

/// Result of checking a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub answer: String,
    pub guess: String,
    pub tiles: Vec<TileState>,
}

impl CheckResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        TileState::is_solved_row(&self.tiles)
    }
}

/// Evaluate `guess` against `answer`
///
/// # Errors
///
/// Returns an error if:
/// - Either word is empty or contains non-alphabetic characters
/// - The words differ in length
///
/// # Examples
/// ```
/// use wordle_daily::commands::check_guess;
/// use wordle_daily::core::TileState::{Absent, Present};
///
/// let result = check_guess("hello", "llama").unwrap();
/// assert_eq!(result.tiles, vec![Present, Present, Absent, Absent, Absent]);
/// ```
pub fn check_guess(answer: &str, guess: &str) -> Result<CheckResult> {
    let answer = normalize("answer", answer)?;
    let guess = normalize("guess", guess)?;

    let (expected, actual) = (answer.chars().count(), guess.chars().count());
    if expected != actual {
        bail!("Guess has {actual} letters but the answer has {expected}");
    }

    let tiles = evaluate(&answer, &guess);
    Ok(CheckResult {
        answer,
        guess,
        tiles,
    })
}

fn normalize(what: &str, word: &str) -> Result<String> {
    let word = word.trim();
    if word.is_empty() {
        bail!("The {what} is empty");
    }
    if !word.chars().all(char::is_alphabetic) {
        bail!("The {what} '{word}' must contain only letters");
    }
    Ok(word.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileState::{Absent, Correct, Present};

    #[test]
    fn check_valid_pair() {
        let result = check_guess("hello", "helps").unwrap();
        assert_eq!(result.answer, "HELLO");
        assert_eq!(result.guess, "HELPS");
        assert_eq!(result.tiles, vec![Correct, Correct, Correct, Absent, Absent]);
        assert!(!result.is_solved());
    }

    #[test]
    fn check_solved() {
        assert!(check_guess(" Crane ", "CRANE").unwrap().is_solved());
    }

    #[test]
    fn check_other_lengths() {
        let result = check_guess("tree", "reef").unwrap();
        assert_eq!(result.tiles, vec![Present, Present, Correct, Absent]);
    }

    #[test]
    fn check_length_mismatch() {
        let err = check_guess("hello", "help").unwrap_err();
        assert_eq!(err.to_string(), "Guess has 4 letters but the answer has 5");
    }

    #[test]
    fn check_rejects_non_letters() {
        assert!(check_guess("hello", "he1lo").is_err());
        assert!(check_guess("", "hello").is_err());
    }
}
