//! Game orchestration
//!
//! [`GameContext`] wires the pure game core to its collaborators: a word-list
//! provider, a session store and a completion store. Everything is passed in
//! explicitly, so tests build a context over in-memory stores and the binary
//! builds one over files.

use crate::core::{GameConfig, GameError};
use crate::daily::WordSelector;
use crate::game::{Cell, Evaluator, GameSession, HintProvider, StandardEvaluator};
use crate::store::{CompletionStore, DailyKey, SessionStore, StoreError};
use crate::wordlists::WordListProvider;
use chrono::NaiveDate;
use rand::Rng;
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Why a guess was refused before reaching the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessRejection {
    WrongLength { expected: usize, actual: usize },
    NotInWordList(String),
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Guess must be {expected} letters, got {actual}")
            }
            Self::NotInWordList(word) => write!(f, "'{word}' is not in the word list"),
        }
    }
}

/// Error type for orchestration use cases
#[derive(Debug)]
pub enum AppError {
    /// The daily puzzle for this key has already been finished
    AlreadyPlayed(DailyKey),
    /// The guess was refused; the session is unchanged
    InvalidGuess(GuessRejection),
    Game(GameError),
    Store(StoreError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyPlayed(key) => write!(
                f,
                "Daily puzzle for {} ({} letters, {} rows) is already completed",
                key.date_iso, key.length, key.max_rows
            ),
            Self::InvalidGuess(reason) => write!(f, "Invalid guess: {reason}"),
            Self::Game(e) => write!(f, "{e}"),
            Self::Store(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Game(e) => Some(e),
            Self::Store(e) => Some(e),
            Self::AlreadyPlayed(_) | Self::InvalidGuess(_) => None,
        }
    }
}

impl From<GameError> for AppError {
    fn from(e: GameError) -> Self {
        Self::Game(e)
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// Owns the collaborators of one player's games
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::context::GameContext;
/// use wordle_daily::store::MemoryStore;
/// use wordle_daily::wordlists::WordLists;
///
/// let mut ctx = GameContext::new(WordLists::embedded(), MemoryStore::new(), MemoryStore::new());
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let session = ctx.start_daily(5, 6, date).unwrap();
/// assert_eq!(session.config().date_iso(), Some("2024-01-01"));
/// ```
#[derive(Debug)]
pub struct GameContext<W, S, C, E = StandardEvaluator> {
    words: W,
    sessions: S,
    completions: C,
    evaluator: E,
    selector: WordSelector,
    hints: HintProvider,
}

impl<W, S, C> GameContext<W, S, C> {
    /// Context using the standard evaluation rules
    #[must_use]
    pub const fn new(words: W, sessions: S, completions: C) -> Self {
        Self::with_evaluator(words, sessions, completions, StandardEvaluator)
    }
}

impl<W, S, C, E> GameContext<W, S, C, E> {
    #[must_use]
    pub const fn with_evaluator(words: W, sessions: S, completions: C, evaluator: E) -> Self {
        Self {
            words,
            sessions,
            completions,
            evaluator,
            selector: WordSelector::new(),
            hints: HintProvider::new(),
        }
    }

    #[must_use]
    pub const fn words(&self) -> &W {
        &self.words
    }

    #[must_use]
    pub const fn sessions(&self) -> &S {
        &self.sessions
    }

    #[must_use]
    pub const fn completions(&self) -> &C {
        &self.completions
    }
}

impl<W, S, C, E> GameContext<W, S, C, E>
where
    W: WordListProvider,
    S: SessionStore,
    C: CompletionStore,
    E: Evaluator + Clone,
{
    /// Start or continue the daily puzzle for `date`
    ///
    /// A stored in-progress session with the same configuration is resumed. A
    /// stored finished one is recorded as completed and refused. A stored
    /// session that cannot be decoded or restored is discarded. Otherwise the
    /// daily answer is selected and a fresh session is saved.
    ///
    /// # Errors
    /// - `AppError::AlreadyPlayed` if this daily is already finished
    /// - `GameError::InvalidConfiguration` or `GameError::EmptyWordList`
    /// - `StoreError` if the stores cannot be read or written
    #[instrument(skip(self))]
    pub fn start_daily(
        &mut self,
        length: usize,
        max_rows: usize,
        date: NaiveDate,
    ) -> Result<GameSession<E>, AppError> {
        let config = GameConfig::daily(length, max_rows, date)?;
        let date_iso = config.date_iso().unwrap_or_default().to_string();
        let key = DailyKey::new(length, max_rows, &date_iso);

        if self.completions.is_completed(&key)? {
            info!(%key, "Daily already completed");
            return Err(AppError::AlreadyPlayed(key));
        }

        match self.sessions.load() {
            Ok(Some(snapshot)) if snapshot.matches_config(&config) => {
                match GameSession::restore(snapshot, self.evaluator.clone()) {
                    Ok(session) if session.can_submit_guess() => {
                        info!(%key, row = session.current_row(), "Resuming daily");
                        return Ok(session);
                    }
                    Ok(session) => {
                        warn!(%key, status = %session.status(), "Finished daily was not recorded");
                        self.completions.mark_completed(&key)?;
                        return Err(AppError::AlreadyPlayed(key));
                    }
                    Err(e) => warn!(error = %e, "Discarding unusable stored session"),
                }
            }
            Ok(_) => debug!("No stored session for this daily"),
            Err(StoreError::Serde(e)) => warn!(error = %e, "Discarding unreadable stored session"),
            Err(e) => return Err(e.into()),
        }

        let answer = self
            .selector
            .select_daily(length, max_rows, &date_iso, self.words.answers(length))?;
        let session = GameSession::create(config, answer, self.evaluator.clone())?;
        self.sessions.save(&session.snapshot())?;

        info!(%key, "Started daily");
        Ok(session)
    }

    /// Start a free-play game with a random answer
    ///
    /// # Errors
    /// Same as [`start_free_with_rng`](Self::start_free_with_rng).
    pub fn start_free(&mut self, length: usize, max_rows: usize) -> Result<GameSession<E>, AppError> {
        self.start_free_with_rng(length, max_rows, &mut rand::rng())
    }

    /// Start a free-play game, drawing the answer from `rng`
    ///
    /// Replaces any stored session.
    ///
    /// # Errors
    /// - `GameError::InvalidConfiguration` or `GameError::EmptyWordList`
    /// - `StoreError` if the session cannot be saved
    #[instrument(skip(self, rng))]
    pub fn start_free_with_rng<R: Rng + ?Sized>(
        &mut self,
        length: usize,
        max_rows: usize,
        rng: &mut R,
    ) -> Result<GameSession<E>, AppError> {
        let config = GameConfig::free(length, max_rows)?;
        let answer = self
            .selector
            .select_free(length, self.words.answers(length), rng)?;
        let session = GameSession::create(config, answer, self.evaluator.clone())?;
        self.sessions.save(&session.snapshot())?;

        info!("Started free game");
        Ok(session)
    }

    /// Restore the stored session, if any
    ///
    /// # Errors
    /// - `StoreError` if the store cannot be read
    /// - `GameError::InvalidSnapshot` if the stored session is inconsistent
    #[instrument(skip(self))]
    pub fn resume(&self) -> Result<Option<GameSession<E>>, AppError> {
        let Some(snapshot) = self.sessions.load()? else {
            debug!("Nothing to resume");
            return Ok(None);
        };
        let session = GameSession::restore(snapshot, self.evaluator.clone())?;
        debug!(row = session.current_row(), status = %session.status(), "Resumed session");
        Ok(Some(session))
    }

    /// Validate and play a guess, then persist the new session
    ///
    /// A daily that ends with this guess is recorded as completed before the
    /// session is saved.
    ///
    /// # Errors
    /// - `GameError::GameOver` if the session is already finished
    /// - `AppError::InvalidGuess` for a wrong length or unknown word
    /// - `StoreError` if the result cannot be saved
    #[instrument(skip(self, session), fields(row = session.current_row()))]
    pub fn submit_guess(
        &mut self,
        session: &GameSession<E>,
        text: &str,
    ) -> Result<GameSession<E>, AppError> {
        if session.is_game_over() {
            return Err(GameError::GameOver.into());
        }

        let guess = text.trim();
        let length = session.config().length();
        self.validate_guess(length, guess)?;

        let next = session.submit_guess(guess)?;
        let snapshot = next.snapshot();

        // Completion first: a stored finished daily must never lack its record
        if next.is_game_over() {
            info!(status = %next.status(), score = %next.score(), "Game finished");
            if let Some(key) = snapshot.daily_key() {
                self.completions.mark_completed(&key)?;
            }
        }
        self.sessions.save(&snapshot)?;

        Ok(next)
    }

    /// Spend the session's hint on the current row
    ///
    /// # Errors
    /// - `GameError::GameOver` if the session is already finished
    /// - `GameError::HintAlreadyUsed` on a second hint
    /// - `GameError::HintUnavailable` if every column is already correct
    /// - `StoreError` if the result cannot be saved
    #[instrument(skip(self, session), fields(row = session.current_row()))]
    pub fn use_hint(&mut self, session: &GameSession<E>) -> Result<GameSession<E>, AppError> {
        if session.is_game_over() {
            return Err(GameError::GameOver.into());
        }
        if session.hint_used() {
            return Err(GameError::HintAlreadyUsed.into());
        }

        let choice = self.hints.pick(session.answer(), session.feedback())?;
        let cell = Cell::new(session.current_row(), choice.col);
        let next = session.use_hint(cell, choice.letter)?;
        self.sessions.save(&next.snapshot())?;

        info!(col = choice.col, "Hint used");
        Ok(next)
    }

    /// Drop the stored session
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be modified.
    #[instrument(skip(self))]
    pub fn abandon(&mut self) -> Result<(), AppError> {
        self.sessions.clear()?;
        info!("Stored session cleared");
        Ok(())
    }

    /// Completed daily dates for `length`, sorted
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be read.
    pub fn completed_dates(&self, length: usize) -> Result<Vec<String>, AppError> {
        Ok(self.completions.completed_dates(length)?)
    }

    fn validate_guess(&self, length: usize, guess: &str) -> Result<(), AppError> {
        let actual = guess.chars().count();
        if actual != length {
            return Err(AppError::InvalidGuess(GuessRejection::WrongLength {
                expected: length,
                actual,
            }));
        }
        if !self.words.is_accepted_guess(length, guess) {
            return Err(AppError::InvalidGuess(GuessRejection::NotInWordList(
                guess.to_uppercase(),
            )));
        }
        Ok(())
    }
}
