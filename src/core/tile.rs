//! Per-letter feedback classification
//!
//! Each guessed letter is classified as one of three tile states:
//! - Absent (letter not in the word, after multiplicities are claimed)
//! - Present (letter in the word, wrong position)
//! - Correct (letter in the correct position)
//!
//! The derived ordering is `Absent < Present < Correct`, which is the ranking
//! used for "best known" keyboard comparisons.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileState {
    /// Letter does not occur (or all its occurrences are already claimed)
    Absent,
    /// Letter occurs elsewhere in the answer
    Present,
    /// Letter matches this position exactly
    Correct,
}

impl TileState {
    /// Emoji used in share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    /// Lowercase name, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    /// True if every tile in the row is correct
    #[must_use]
    pub fn is_solved_row(row: &[Self]) -> bool {
        !row.is_empty() && row.iter().all(|&t| t == Self::Correct)
    }
}

impl fmt::Display for TileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
