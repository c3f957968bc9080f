//! In-memory stores

use super::{CompletionStore, DailyKey, SessionSnapshot, SessionStore, StoreError};
use std::collections::BTreeSet;

/// Session and completion store kept in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    session: Option<SessionSnapshot>,
    completed: BTreeSet<DailyKey>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        Ok(self.session.clone())
    }

    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        self.session = Some(snapshot.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.session = None;
        Ok(())
    }
}

impl CompletionStore for MemoryStore {
    fn is_completed(&self, key: &DailyKey) -> Result<bool, StoreError> {
        Ok(self.completed.contains(key))
    }

    fn mark_completed(&mut self, key: &DailyKey) -> Result<(), StoreError> {
        self.completed.insert(key.clone());
        Ok(())
    }

    fn clear_completed(&mut self, key: &DailyKey) -> Result<(), StoreError> {
        self.completed.remove(key);
        Ok(())
    }

    fn completed_dates(&self, length: usize) -> Result<Vec<String>, StoreError> {
        Ok(dates_for_length(&self.completed, length))
    }
}

/// Dates in `keys` for one word length, sorted and de-duplicated
pub(super) fn dates_for_length(keys: &BTreeSet<DailyKey>, length: usize) -> Vec<String> {
    let dates: BTreeSet<&str> = keys
        .iter()
        .filter(|key| key.length == length)
        .map(|key| key.date_iso.as_str())
        .collect();
    dates.into_iter().map(str::to_string).collect()
}
