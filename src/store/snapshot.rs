//! Serialized session state
//!
//! A snapshot mirrors the session's data model field for field. The keyboard
//! state is derived data and is rebuilt on restore.

use crate::core::{GameConfig, GameMode, TileState};
use crate::game::{Cell, GameStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted form of a `GameSession`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub length: usize,
    pub max_rows: usize,
    pub mode: GameMode,
    #[serde(rename = "dateISO")]
    pub date_iso: Option<String>,
    pub answer: String,
    pub guesses: Vec<String>,
    pub feedback: Vec<Vec<TileState>>,
    pub status: GameStatus,
    pub hint_used: bool,
    pub hinted_cell: Option<Cell>,
    pub hinted_letter: Option<char>,
}

impl SessionSnapshot {
    /// True if this snapshot was taken from a game with `config`
    #[must_use]
    pub fn matches_config(&self, config: &GameConfig) -> bool {
        self.length == config.length()
            && self.max_rows == config.max_rows()
            && self.mode == config.mode()
            && self.date_iso.as_deref() == config.date_iso()
    }

    /// Completion key for a daily snapshot
    #[must_use]
    pub fn daily_key(&self) -> Option<DailyKey> {
        match (self.mode, &self.date_iso) {
            (GameMode::Daily, Some(date)) => Some(DailyKey::new(self.length, self.max_rows, date)),
            _ => None,
        }
    }
}

/// Identifies one daily puzzle: length, row count and date
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyKey {
    pub length: usize,
    pub max_rows: usize,
    #[serde(rename = "dateISO")]
    pub date_iso: String,
}

impl DailyKey {
    #[must_use]
    pub fn new(length: usize, max_rows: usize, date_iso: &str) -> Self {
        Self {
            length,
            max_rows,
            date_iso: date_iso.to_string(),
        }
    }
}

impl fmt::Display for DailyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.date_iso, self.length, self.max_rows)
    }
}
