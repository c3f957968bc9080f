//! Persistence of sessions and daily completions
//!
//! The game core never touches storage directly. Orchestration code hands
//! snapshots to a [`SessionStore`] and records finished dailies in a
//! [`CompletionStore`]. Both assume a single writer.

mod error;
mod file;
mod memory;
mod snapshot;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use snapshot::{DailyKey, SessionSnapshot};

/// Holds at most one in-progress session snapshot
pub trait SessionStore {
    /// Load the stored snapshot, if any
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be read or decoded.
    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError>;

    /// Replace the stored snapshot
    ///
    /// # Errors
    /// Returns `StoreError` if the snapshot cannot be written.
    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), StoreError>;

    /// Remove the stored snapshot; a no-op when nothing is stored
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be modified.
    fn clear(&mut self) -> Result<(), StoreError>;

    /// True if a snapshot is stored
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be read.
    fn exists(&self) -> Result<bool, StoreError> {
        Ok(self.load()?.is_some())
    }
}

/// Records which daily puzzles have been finished
pub trait CompletionStore {
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be read.
    fn is_completed(&self, key: &DailyKey) -> Result<bool, StoreError>;

    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be written.
    fn mark_completed(&mut self, key: &DailyKey) -> Result<(), StoreError>;

    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be written.
    fn clear_completed(&mut self, key: &DailyKey) -> Result<(), StoreError>;

    /// Sorted, de-duplicated dates completed for `length`, across all row counts
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be read.
    fn completed_dates(&self, length: usize) -> Result<Vec<String>, StoreError>;
}
