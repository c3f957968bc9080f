//! Immutable game session
//!
//! Every transition returns a new `GameSession`; the receiver is never modified.
//! Status only moves forward: `Playing` to `Won` or `Lost`, both terminal.

use super::evaluator::{Evaluator, StandardEvaluator};
use super::hint::{Cell, is_revealed};
use super::keyboard::KeyboardStates;
use crate::core::{GameConfig, GameError, GameMode, TileState};
use crate::store::SessionSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Status after a row has been played
    ///
    /// A fully correct row wins; otherwise using the last row loses.
    #[must_use]
    pub fn after_row(row: &[TileState], rows_used: usize, max_rows: usize) -> Self {
        if TileState::is_solved_row(row) {
            Self::Won
        } else if rows_used >= max_rows {
            Self::Lost
        } else {
            Self::Playing
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// One game over a fixed configuration and secret answer
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession<E = StandardEvaluator> {
    config: GameConfig,
    answer: String,
    guesses: Vec<String>,
    feedback: Vec<Vec<TileState>>,
    status: GameStatus,
    hint_used: bool,
    hinted_cell: Option<Cell>,
    hinted_letter: Option<char>,
    keyboard: KeyboardStates,
    evaluator: E,
}

impl<E: Evaluator + Clone> GameSession<E> {
    /// Start a new game
    ///
    /// The answer is stored uppercased.
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if the answer length differs
    /// from the configured word length.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::GameConfig;
    /// use wordle_daily::game::{GameSession, GameStatus, StandardEvaluator};
    ///
    /// let config = GameConfig::free(5, 6).unwrap();
    /// let session = GameSession::create(config, "hello", StandardEvaluator).unwrap();
    /// assert_eq!(session.answer(), "HELLO");
    /// assert_eq!(session.status(), GameStatus::Playing);
    /// assert_eq!(session.remaining_guesses(), 6);
    /// ```
    pub fn create(config: GameConfig, answer: &str, evaluator: E) -> Result<Self, GameError> {
        let answer = answer.to_uppercase();
        let letters = answer.chars().count();
        if letters != config.length() {
            return Err(GameError::InvalidConfiguration(format!(
                "answer has {letters} letters, expected {}",
                config.length()
            )));
        }

        Ok(Self {
            config,
            answer,
            guesses: Vec::new(),
            feedback: Vec::new(),
            status: GameStatus::Playing,
            hint_used: false,
            hinted_cell: None,
            hinted_letter: None,
            keyboard: KeyboardStates::new(),
            evaluator,
        })
    }

    /// Play one guess
    ///
    /// Word validity is not checked here; that belongs to the caller.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the session is already won or lost.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{GameConfig, TileState::{Absent, Correct}};
    /// use wordle_daily::game::{GameSession, GameStatus, StandardEvaluator};
    ///
    /// let config = GameConfig::free(5, 6).unwrap();
    /// let session = GameSession::create(config, "HELLO", StandardEvaluator).unwrap();
    /// let next = session.submit_guess("helps").unwrap();
    ///
    /// assert_eq!(next.feedback()[0], vec![Correct, Correct, Correct, Absent, Absent]);
    /// assert_eq!(next.status(), GameStatus::Playing);
    /// assert_eq!(session.current_row(), 0); // original untouched
    /// ```
    pub fn submit_guess(&self, guess: &str) -> Result<Self, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let guess = guess.to_uppercase();
        let row = self.evaluator.evaluate(&self.answer, &guess);

        let mut next = self.clone();
        next.keyboard = self.keyboard.accumulate(&row, &guess);
        next.status = GameStatus::after_row(&row, self.guesses.len() + 1, self.config.max_rows());
        next.guesses.push(guess);
        next.feedback.push(row);

        Ok(next)
    }

    /// Record the outcome of the session's single hint
    ///
    /// The cell and letter are chosen by [`HintProvider`](super::HintProvider).
    ///
    /// # Errors
    /// Returns `GameError::HintAlreadyUsed` on a second call.
    pub fn use_hint(&self, cell: Cell, letter: char) -> Result<Self, GameError> {
        if self.hint_used {
            return Err(GameError::HintAlreadyUsed);
        }

        let mut next = self.clone();
        next.hint_used = true;
        next.hinted_cell = Some(cell);
        next.hinted_letter = Some(letter.to_uppercase().next().unwrap_or(letter));

        Ok(next)
    }

    /// Rebuild a session from its persisted form
    ///
    /// The keyboard state is recomputed by folding the stored history.
    ///
    /// # Errors
    /// Returns `GameError::InvalidSnapshot` if the snapshot breaks any session
    /// invariant: invalid configuration, mismatched sequence lengths, rows of
    /// the wrong width, feedback that does not match the answer, a status that
    /// does not follow from the feedback, or inconsistent hint fields.
    pub fn restore(snapshot: SessionSnapshot, evaluator: E) -> Result<Self, GameError> {
        let invalid = |reason: String| GameError::InvalidSnapshot(reason);

        let config = GameConfig::new(
            snapshot.length,
            snapshot.max_rows,
            snapshot.mode,
            snapshot.date_iso,
        )
        .map_err(|e| invalid(e.to_string()))?;

        let answer = snapshot.answer.to_uppercase();
        if answer.chars().count() != config.length() {
            return Err(invalid(format!(
                "answer has {} letters, expected {}",
                answer.chars().count(),
                config.length()
            )));
        }

        if snapshot.guesses.len() != snapshot.feedback.len() {
            return Err(invalid(format!(
                "{} guesses but {} feedback rows",
                snapshot.guesses.len(),
                snapshot.feedback.len()
            )));
        }

        if snapshot.guesses.len() > config.max_rows() {
            return Err(invalid(format!(
                "{} guesses exceed {} rows",
                snapshot.guesses.len(),
                config.max_rows()
            )));
        }

        let guesses: Vec<String> = snapshot.guesses.iter().map(|g| g.to_uppercase()).collect();
        let mut status = GameStatus::Playing;

        for (i, (guess, row)) in guesses.iter().zip(&snapshot.feedback).enumerate() {
            if status != GameStatus::Playing {
                return Err(invalid(format!("row {i} played after the game ended")));
            }
            if guess.chars().count() != config.length() {
                return Err(invalid(format!("guess '{guess}' has the wrong length")));
            }
            if evaluator.evaluate(&answer, guess) != *row {
                return Err(invalid(format!("feedback for '{guess}' does not match the answer")));
            }
            status = GameStatus::after_row(row, i + 1, config.max_rows());
        }

        if status != snapshot.status {
            return Err(invalid(format!(
                "stored status '{}' but history implies '{status}'",
                snapshot.status
            )));
        }

        let hint_recorded = snapshot.hinted_cell.is_some() && snapshot.hinted_letter.is_some();
        let hint_absent = snapshot.hinted_cell.is_none() && snapshot.hinted_letter.is_none();
        if (snapshot.hint_used && !hint_recorded) || (!snapshot.hint_used && !hint_absent) {
            return Err(invalid("hint fields disagree with hintUsed".to_string()));
        }

        let keyboard = KeyboardStates::from_history(&guesses, &snapshot.feedback);

        Ok(Self {
            config,
            answer,
            guesses,
            feedback: snapshot.feedback,
            status,
            hint_used: snapshot.hint_used,
            hinted_cell: snapshot.hinted_cell,
            hinted_letter: snapshot.hinted_letter,
            keyboard,
            evaluator,
        })
    }
}

impl<E> GameSession<E> {
    /// Persisted form of this session
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            length: self.config.length(),
            max_rows: self.config.max_rows(),
            mode: self.config.mode(),
            date_iso: self.config.date_iso().map(str::to_string),
            answer: self.answer.clone(),
            guesses: self.guesses.clone(),
            feedback: self.feedback.clone(),
            status: self.status,
            hint_used: self.hint_used,
            hinted_cell: self.hinted_cell,
            hinted_letter: self.hinted_letter,
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The secret answer, uppercased
    #[inline]
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Submitted guesses in row order, uppercased
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// Feedback rows, parallel to `guesses`
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[Vec<TileState>] {
        &self.feedback
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Index of the next row to play, equal to the number of guesses
    #[inline]
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub const fn hint_used(&self) -> bool {
        self.hint_used
    }

    #[inline]
    #[must_use]
    pub const fn hinted_cell(&self) -> Option<Cell> {
        self.hinted_cell
    }

    #[inline]
    #[must_use]
    pub const fn hinted_letter(&self) -> Option<char> {
        self.hinted_letter
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStates {
        &self.keyboard
    }

    #[inline]
    #[must_use]
    pub fn can_submit_guess(&self) -> bool {
        self.status == GameStatus::Playing
    }

    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    #[inline]
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.config.max_rows().saturating_sub(self.current_row())
    }

    /// Columns marked correct by at least one guess
    #[must_use]
    pub fn revealed_columns(&self) -> Vec<usize> {
        (0..self.config.length())
            .filter(|&col| is_revealed(&self.feedback, col))
            .collect()
    }

    /// Score line: `rows/max` when won, `X/max` when lost, `-/max` while playing
    #[must_use]
    pub fn score(&self) -> String {
        let max = self.config.max_rows();
        match self.status {
            GameStatus::Won => format!("{}/{max}", self.current_row()),
            GameStatus::Lost => format!("X/{max}"),
            GameStatus::Playing => format!("-/{max}"),
        }
    }

    /// Shareable result text
    ///
    /// First line is the title and score (with `*` after a hint), followed by
    /// one emoji row per guess.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::GameConfig;
    /// use wordle_daily::game::{GameSession, StandardEvaluator};
    ///
    /// let config = GameConfig::free(5, 6).unwrap();
    /// let session = GameSession::create(config, "HELLO", StandardEvaluator)
    ///     .unwrap()
    ///     .submit_guess("HELPS").unwrap()
    ///     .submit_guess("HELLO").unwrap();
    ///
    /// let share = session.to_share_string();
    /// assert_eq!(share.lines().next(), Some("Wordle 2/6"));
    /// assert!(share.ends_with("🟩🟩🟩⬛⬛\n🟩🟩🟩🟩🟩"));
    /// ```
    #[must_use]
    pub fn to_share_string(&self) -> String {
        let hint_marker = if self.hint_used { "*" } else { "" };
        let title = match (self.config.mode(), self.config.date_iso()) {
            (GameMode::Daily, Some(date)) => format!("Wordle {date} {}{hint_marker}", self.score()),
            _ => format!("Wordle {}{hint_marker}", self.score()),
        };

        if self.feedback.is_empty() {
            return title;
        }

        let rows: Vec<String> = self
            .feedback
            .iter()
            .map(|row| row.iter().map(|tile| tile.emoji()).collect())
            .collect();

        format!("{title}\n\n{}", rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileState::{Absent, Correct, Present};
    use chrono::NaiveDate;

    fn session(answer: &str, max_rows: usize) -> GameSession {
        let config = GameConfig::free(answer.len(), max_rows).unwrap();
        GameSession::create(config, answer, StandardEvaluator).unwrap()
    }

    #[test]
    fn create_rejects_answer_of_wrong_length() {
        let config = GameConfig::free(5, 6).unwrap();
        assert!(matches!(
            GameSession::create(config.clone(), "tree", StandardEvaluator),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameSession::create(config, "hellos", StandardEvaluator),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn create_starts_playing() {
        let s = session("hello", 6);
        assert_eq!(s.answer(), "HELLO");
        assert_eq!(s.status(), GameStatus::Playing);
        assert_eq!(s.current_row(), 0);
        assert!(s.guesses().is_empty());
        assert!(s.feedback().is_empty());
        assert!(!s.hint_used());
        assert_eq!(s.hinted_cell(), None);
        assert_eq!(s.hinted_letter(), None);
        assert!(s.keyboard().is_empty());
        assert!(s.can_submit_guess());
        assert!(!s.is_game_over());
    }

    #[test]
    fn submit_non_matching_guess() {
        let next = session("HELLO", 6).submit_guess("HELPS").unwrap();
        assert_eq!(
            next.feedback()[0],
            vec![Correct, Correct, Correct, Absent, Absent]
        );
        assert_eq!(next.status(), GameStatus::Playing);
        assert_eq!(next.current_row(), 1);
        assert_eq!(next.remaining_guesses(), 5);
    }

    #[test]
    fn guess_is_uppercased() {
        let next = session("HELLO", 6).submit_guess("helps").unwrap();
        assert_eq!(next.guesses(), ["HELPS".to_string()]);
    }

    #[test]
    fn exact_answer_wins() {
        let next = session("HELLO", 6)
            .submit_guess("HELPS")
            .unwrap()
            .submit_guess("hello")
            .unwrap();
        assert_eq!(next.status(), GameStatus::Won);
        assert_eq!(next.current_row(), 2);
        assert_eq!(next.remaining_guesses(), 6 - 2);
        assert!(next.is_game_over());
        assert!(!next.can_submit_guess());
    }

    #[test]
    fn win_on_last_row_is_won_not_lost() {
        let next = session("HELLO", 2)
            .submit_guess("HELPS")
            .unwrap()
            .submit_guess("HELLO")
            .unwrap();
        assert_eq!(next.status(), GameStatus::Won);
        assert_eq!(next.remaining_guesses(), 0);
    }

    #[test]
    fn max_rows_misses_loses() {
        let mut s = session("HELLO", 6);
        for _ in 0..6 {
            assert_eq!(s.status(), GameStatus::Playing);
            s = s.submit_guess("WORLD").unwrap();
        }
        assert_eq!(s.status(), GameStatus::Lost);
        assert_eq!(s.remaining_guesses(), 0);
        assert_eq!(s.current_row(), 6);
        assert_eq!(s.guesses().len(), s.feedback().len());
    }

    #[test]
    fn single_row_game() {
        let lost = session("HELLO", 1).submit_guess("WORLD").unwrap();
        assert_eq!(lost.status(), GameStatus::Lost);
    }

    #[test]
    fn submit_after_win_is_game_over() {
        let won = session("HELLO", 6).submit_guess("HELLO").unwrap();
        assert_eq!(won.submit_guess("HELPS"), Err(GameError::GameOver));
    }

    #[test]
    fn submit_after_loss_is_game_over() {
        let lost = session("HELLO", 1).submit_guess("WORLD").unwrap();
        assert_eq!(lost.submit_guess("HELLO"), Err(GameError::GameOver));
    }

    #[test]
    fn submit_leaves_original_unchanged() {
        let original = session("HELLO", 6);
        let before = original.clone();
        let next = original.submit_guess("HELPS").unwrap();

        assert_eq!(original, before);
        assert_ne!(original, next);
        assert_eq!(original.current_row(), 0);
        assert!(original.keyboard().is_empty());
    }

    #[test]
    fn keyboard_tracks_best_state_across_guesses() {
        let s = session("HELLO", 6)
            .submit_guess("HELPS")
            .unwrap()
            .submit_guess("LLAMA")
            .unwrap();
        assert_eq!(s.feedback()[1], vec![Present, Present, Absent, Absent, Absent]);
        assert_eq!(s.keyboard().get('L'), Some(Correct));
        assert_eq!(s.keyboard().get('S'), Some(Absent));
    }

    #[test]
    fn use_hint_records_outcome() {
        let s = session("HELLO", 6);
        let hinted = s.use_hint(Cell::new(0, 3), 'l').unwrap();

        assert!(hinted.hint_used());
        assert_eq!(hinted.hinted_cell(), Some(Cell::new(0, 3)));
        assert_eq!(hinted.hinted_letter(), Some('L'));
        assert!(!s.hint_used());
        assert_eq!(s.hinted_cell(), None);
    }

    #[test]
    fn use_hint_twice_fails() {
        let hinted = session("HELLO", 6).use_hint(Cell::new(0, 0), 'H').unwrap();
        assert_eq!(
            hinted.use_hint(Cell::new(0, 1), 'E'),
            Err(GameError::HintAlreadyUsed)
        );
    }

    #[test]
    fn hint_survives_later_guesses() {
        let s = session("HELLO", 6)
            .use_hint(Cell::new(0, 4), 'O')
            .unwrap()
            .submit_guess("HELPS")
            .unwrap();
        assert!(s.hint_used());
        assert_eq!(s.hinted_letter(), Some('O'));
    }

    #[test]
    fn revealed_columns_union_of_rows() {
        let s = session("HELLO", 6)
            .submit_guess("HXXXX")
            .unwrap()
            .submit_guess("XXXXO")
            .unwrap();
        assert_eq!(s.revealed_columns(), vec![0, 4]);
    }

    #[test]
    fn share_string_won() {
        let s = session("HELLO", 6)
            .submit_guess("HELPS")
            .unwrap()
            .submit_guess("HELLO")
            .unwrap();
        let share = s.to_share_string();
        let lines: Vec<&str> = share.lines().collect();
        assert_eq!(lines[0], "Wordle 2/6");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "🟩🟩🟩⬛⬛");
        assert_eq!(lines[3], "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_string_lost() {
        let s = session("HELLO", 2)
            .submit_guess("WORLD")
            .unwrap()
            .submit_guess("WORLD")
            .unwrap();
        assert_eq!(s.to_share_string().lines().next(), Some("Wordle X/2"));
    }

    #[test]
    fn share_string_daily_with_hint() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let config = GameConfig::daily(5, 6, date).unwrap();
        let s = GameSession::create(config, "HELLO", StandardEvaluator)
            .unwrap()
            .use_hint(Cell::new(0, 0), 'H')
            .unwrap()
            .submit_guess("HELLO")
            .unwrap();
        assert_eq!(
            s.to_share_string().lines().next(),
            Some("Wordle 2024-01-01 1/6*")
        );
    }

    #[test]
    fn share_string_no_guesses() {
        assert_eq!(session("HELLO", 6).to_share_string(), "Wordle -/6");
    }

    #[test]
    fn snapshot_restore_preserves_session() {
        let s = session("HELLO", 6)
            .submit_guess("HELPS")
            .unwrap()
            .use_hint(Cell::new(1, 3), 'L')
            .unwrap()
            .submit_guess("LLAMA")
            .unwrap();

        let restored = GameSession::restore(s.snapshot(), StandardEvaluator).unwrap();
        assert_eq!(restored, s);
        assert_eq!(restored.keyboard().get('L'), Some(Correct));
    }

    #[test]
    fn restore_rejects_mismatched_lengths() {
        let mut snapshot = session("HELLO", 6).submit_guess("HELPS").unwrap().snapshot();
        snapshot.feedback.clear();
        assert!(matches!(
            GameSession::restore(snapshot, StandardEvaluator),
            Err(GameError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn restore_rejects_wrong_status() {
        let mut snapshot = session("HELLO", 6).submit_guess("HELLO").unwrap().snapshot();
        snapshot.status = GameStatus::Playing;
        assert!(matches!(
            GameSession::restore(snapshot, StandardEvaluator),
            Err(GameError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn restore_rejects_tampered_feedback() {
        let mut snapshot = session("HELLO", 6).submit_guess("HELPS").unwrap().snapshot();
        snapshot.feedback[0] = vec![Correct; 5];
        assert!(GameSession::restore(snapshot, StandardEvaluator).is_err());
    }

    #[test]
    fn restore_rejects_rows_after_win() {
        let mut snapshot = session("HELLO", 6).submit_guess("HELLO").unwrap().snapshot();
        snapshot.guesses.push("HELPS".to_string());
        snapshot
            .feedback
            .push(vec![Correct, Correct, Correct, Absent, Absent]);
        assert!(GameSession::restore(snapshot, StandardEvaluator).is_err());
    }

    #[test]
    fn restore_rejects_inconsistent_hint() {
        let mut snapshot = session("HELLO", 6).snapshot();
        snapshot.hinted_letter = Some('H');
        assert!(GameSession::restore(snapshot, StandardEvaluator).is_err());
    }

    #[test]
    fn restore_rejects_invalid_config() {
        let mut snapshot = session("HELLO", 6).snapshot();
        snapshot.max_rows = 0;
        assert!(GameSession::restore(snapshot, StandardEvaluator).is_err());
    }
}
