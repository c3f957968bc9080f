//! Guess evaluation
//!
//! Implements the feedback rules including duplicate letters:
//! 1. First pass: mark exact matches and tally the unmatched answer letters
//! 2. Second pass, left to right: mark present while the tally for that letter lasts
//!
//! When a guess repeats a letter more often than the answer has it spare, only
//! the leftmost extra occurrences become present; the rest are absent.

use crate::core::TileState;
use rustc_hash::FxHashMap;

/// Maps an (answer, guess) pair to per-letter feedback
pub trait Evaluator {
    /// Evaluate `guess` against `answer`
    ///
    /// Returns one tile state per letter of `guess`. Both inputs are compared
    /// case-insensitively. Equal lengths are the caller's responsibility.
    fn evaluate(&self, answer: &str, guess: &str) -> Vec<TileState>;
}

/// Standard two-pass evaluator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardEvaluator;

impl Evaluator for StandardEvaluator {
    fn evaluate(&self, answer: &str, guess: &str) -> Vec<TileState> {
        evaluate(answer, guess)
    }
}

/// Evaluate `guess` against `answer` with the standard rules
///
/// # Examples
/// ```
/// use wordle_daily::core::TileState::{Absent, Correct, Present};
/// use wordle_daily::game::evaluate;
///
/// // Both L's of HELLO are claimed by the two leading L's of the guess
/// assert_eq!(
///     evaluate("hello", "LLAMA"),
///     vec![Present, Present, Absent, Absent, Absent]
/// );
/// ```
#[must_use]
pub fn evaluate(answer: &str, guess: &str) -> Vec<TileState> {
    let answer: Vec<char> = answer.to_uppercase().chars().collect();
    let guess: Vec<char> = guess.to_uppercase().chars().collect();

    let mut result = vec![TileState::Absent; guess.len()];
    let mut remaining: FxHashMap<char, usize> = FxHashMap::default();

    // First pass: exact matches, tally the rest of the answer
    for (i, &letter) in answer.iter().enumerate() {
        if guess.get(i) == Some(&letter) {
            result[i] = TileState::Correct;
        } else {
            *remaining.entry(letter).or_insert(0) += 1;
        }
    }

    // Second pass: claim remaining letters left to right
    for (i, letter) in guess.iter().enumerate() {
        if result[i] == TileState::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(letter)
            && *count > 0
        {
            result[i] = TileState::Present;
            *count -= 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileState::{Absent, Correct, Present};

    #[test]
    fn all_absent() {
        assert_eq!(evaluate("abcde", "fghij"), vec![Absent; 5]);
    }

    #[test]
    fn exact_match_is_all_correct() {
        for word in ["crane", "slate", "aaaaa", "zzzz", "rhythm", "kitchen"] {
            let row = evaluate(word, word);
            assert_eq!(row.len(), word.len());
            assert!(row.iter().all(|&t| t == Correct));
        }
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(evaluate("Crane", "cRANE"), vec![Correct; 5]);
    }

    #[test]
    fn hello_helps() {
        assert_eq!(
            evaluate("HELLO", "HELPS"),
            vec![Correct, Correct, Correct, Absent, Absent]
        );
    }

    #[test]
    fn real_example_crane_slate() {
        // C R A N E vs SLATE: R is absent because SLATE has no R
        assert_eq!(
            evaluate("slate", "crane"),
            vec![Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn duplicate_letters_correct_takes_priority() {
        // ROBOT vs FLOOR: first O present, second O correct
        assert_eq!(
            evaluate("floor", "robot"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn duplicate_letters_both_present() {
        // SPEED vs ERASE: ERASE has two E's, both claimable
        assert_eq!(
            evaluate("erase", "speed"),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn extra_copies_leftmost_present() {
        // One B of ABBEY is matched exactly, one is spare for the leftmost extra B
        assert_eq!(
            evaluate("abbey", "bbxbb"),
            vec![Present, Correct, Absent, Absent, Absent]
        );
        // Only one E in the answer: leftmost E is present, the rest absent
        assert_eq!(
            evaluate("crane", "eeezz"),
            vec![Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn exact_match_consumes_before_present() {
        // The E at position 4 is correct, so the leading E finds nothing left
        assert_eq!(
            evaluate("crane", "eerie"),
            vec![Absent, Absent, Present, Absent, Correct]
        );
    }

    #[test]
    fn output_length_follows_guess() {
        assert_eq!(evaluate("cat", "cats").len(), 4);
        assert_eq!(evaluate("cats", "cat").len(), 3);
    }

    #[test]
    fn trait_delegates_to_function() {
        let evaluator = StandardEvaluator;
        assert_eq!(
            evaluator.evaluate("hello", "llama"),
            evaluate("hello", "llama")
        );
    }
}
