//! Game configuration
//!
//! A `GameConfig` is validated once at construction and never changes afterwards.

use super::GameError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Word lengths with bundled word lists
pub const SUPPORTED_LENGTHS: [usize; 4] = [4, 5, 6, 7];

/// Default word length
pub const DEFAULT_LENGTH: usize = 5;

/// Default number of guess rows
pub const DEFAULT_MAX_ROWS: usize = 6;

/// Date format used for daily puzzles and seed strings
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How the answer of a game is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Answer keyed by calendar date, shared by all players
    Daily,
    /// Answer not tied to a date
    Free,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Free => write!(f, "free"),
        }
    }
}

/// Immutable configuration of a single game
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameConfig {
    length: usize,
    max_rows: usize,
    mode: GameMode,
    date_iso: Option<String>,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// `date_iso` is required in daily mode and dropped in free mode.
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if:
    /// - `length` is not in [`SUPPORTED_LENGTHS`]
    /// - `max_rows` is zero
    /// - mode is daily and the date is missing or not `YYYY-MM-DD`
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{GameConfig, GameMode};
    ///
    /// let config = GameConfig::new(5, 6, GameMode::Daily, Some("2024-01-01".into())).unwrap();
    /// assert_eq!(config.date_iso(), Some("2024-01-01"));
    ///
    /// assert!(GameConfig::new(3, 6, GameMode::Free, None).is_err());
    /// assert!(GameConfig::new(5, 0, GameMode::Free, None).is_err());
    /// ```
    pub fn new(
        length: usize,
        max_rows: usize,
        mode: GameMode,
        date_iso: Option<String>,
    ) -> Result<Self, GameError> {
        if !SUPPORTED_LENGTHS.contains(&length) {
            return Err(GameError::InvalidConfiguration(format!(
                "word length {length} is not one of {SUPPORTED_LENGTHS:?}"
            )));
        }

        if max_rows == 0 {
            return Err(GameError::InvalidConfiguration(
                "max rows must be at least 1".to_string(),
            ));
        }

        let date_iso = match mode {
            GameMode::Free => None,
            GameMode::Daily => {
                let date = date_iso.ok_or_else(|| {
                    GameError::InvalidConfiguration("daily mode requires a date".to_string())
                })?;
                let parsed = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|e| {
                    GameError::InvalidConfiguration(format!("invalid date '{date}': {e}"))
                })?;
                // Seeds use the zero-padded form
                Some(parsed.format(DATE_FORMAT).to_string())
            }
        };

        Ok(Self {
            length,
            max_rows,
            mode,
            date_iso,
        })
    }

    /// Daily configuration for a calendar date
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` for an unsupported length or zero rows.
    pub fn daily(length: usize, max_rows: usize, date: NaiveDate) -> Result<Self, GameError> {
        Self::new(
            length,
            max_rows,
            GameMode::Daily,
            Some(date.format(DATE_FORMAT).to_string()),
        )
    }

    /// Free-play configuration
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` for an unsupported length or zero rows.
    pub fn free(length: usize, max_rows: usize) -> Result<Self, GameError> {
        Self::new(length, max_rows, GameMode::Free, None)
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// The puzzle date, present only in daily mode
    #[inline]
    #[must_use]
    pub fn date_iso(&self) -> Option<&str> {
        self.date_iso.as_deref()
    }
}
