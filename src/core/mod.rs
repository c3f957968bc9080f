//! Core domain types
//!
//! Tile states, game configuration and the error taxonomy. Everything here is
//! a plain value type with no I/O.

mod config;
mod error;
mod tile;

pub use config::{
    DATE_FORMAT, DEFAULT_LENGTH, DEFAULT_MAX_ROWS, GameConfig, GameMode, SUPPORTED_LENGTHS,
};
pub use error::GameError;
pub use tile::TileState;
