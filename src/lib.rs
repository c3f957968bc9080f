//! Wordle Daily
//!
//! A Wordle-style word game: deterministic daily puzzles shared by every player
//! on the same date, free play with random answers, one hint per game, and
//! resumable sessions.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::{GameConfig, TileState};
//! use wordle_daily::game::{GameSession, GameStatus, StandardEvaluator};
//!
//! let config = GameConfig::free(5, 6).unwrap();
//! let session = GameSession::create(config, "hello", StandardEvaluator).unwrap();
//!
//! // Transitions return a new session
//! let next = session.submit_guess("llama").unwrap();
//! assert_eq!(next.feedback()[0][0], TileState::Present);
//! assert_eq!(next.status(), GameStatus::Playing);
//! assert_eq!(session.current_row(), 0);
//! ```

// Core domain types
pub mod core;

// Seeded hashing and answer selection
pub mod daily;

// Evaluation, keyboard, hints and the session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Session and completion persistence
pub mod store;

// Use-case orchestration
pub mod context;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
