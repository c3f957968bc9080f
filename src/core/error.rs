//! Game rule violations
//!
//! Every variant is a contract violation raised synchronously at the point of
//! misuse. None of them is transient, so nothing in the crate retries.

use std::fmt;

/// Error type for game configuration and session transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A guess was submitted to a session that is already won or lost
    GameOver,
    /// The session's single hint has already been spent
    HintAlreadyUsed,
    /// Every position is already revealed as correct
    HintUnavailable,
    /// Unsupported length, zero rows, or a missing/malformed daily date
    InvalidConfiguration(String),
    /// No answers are available for the requested length
    EmptyWordList { length: usize },
    /// A persisted snapshot violates a session invariant
    InvalidSnapshot(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "Game is already over"),
            Self::HintAlreadyUsed => write!(f, "Hint has already been used"),
            Self::HintUnavailable => write!(f, "No hint available: every letter is already revealed"),
            Self::InvalidConfiguration(reason) => write!(f, "Invalid configuration: {reason}"),
            Self::EmptyWordList { length } => {
                write!(f, "No answer words available for length {length}")
            }
            Self::InvalidSnapshot(reason) => write!(f, "Invalid session snapshot: {reason}"),
        }
    }
}

impl std::error::Error for GameError {}
