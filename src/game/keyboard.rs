//! Cumulative keyboard state
//!
//! Tracks the best-known tile state of every guessed letter across the whole
//! guess history. Updates only ever upgrade a letter (`absent < present < correct`).

use crate::core::TileState;
use rustc_hash::FxHashMap;

/// Best-known state per uppercase letter
///
/// Immutable: `accumulate` returns a new value and leaves the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStates {
    states: FxHashMap<char, TileState>,
}

impl KeyboardStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one feedback row into the known states
    ///
    /// Letters pair up with `row` by position; extra letters or tiles are ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::TileState::{Absent, Correct, Present};
    /// use wordle_daily::game::KeyboardStates;
    ///
    /// let keys = KeyboardStates::new()
    ///     .accumulate(&[Correct, Absent], "ab")
    ///     .accumulate(&[Present, Present], "ba");
    ///
    /// assert_eq!(keys.get('A'), Some(Correct)); // never downgraded
    /// assert_eq!(keys.get('B'), Some(Present));
    /// ```
    #[must_use]
    pub fn accumulate(&self, row: &[TileState], guess: &str) -> Self {
        let upper = guess.to_uppercase();
        let mut states = self.states.clone();

        for (letter, &candidate) in upper.chars().zip(row) {
            states
                .entry(letter)
                .and_modify(|known| *known = (*known).max(candidate))
                .or_insert(candidate);
        }

        Self { states }
    }

    /// Fold an entire guess history, oldest row first
    #[must_use]
    pub fn from_history<S: AsRef<str>>(guesses: &[S], feedback: &[Vec<TileState>]) -> Self {
        guesses
            .iter()
            .zip(feedback)
            .fold(Self::new(), |keys, (guess, row)| {
                keys.accumulate(row, guess.as_ref())
            })
    }

    /// Best-known state of a letter, case-insensitive
    #[must_use]
    pub fn get(&self, letter: char) -> Option<TileState> {
        let upper = letter.to_uppercase().next().unwrap_or(letter);
        self.states.get(&upper).copied()
    }

    /// Iterate over (letter, state) pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (char, TileState)> + '_ {
        self.states.iter().map(|(&letter, &state)| (letter, state))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
