//! JSON file stores
//!
//! Layout under the data directory:
//! - `session.json`: the current session snapshot
//! - `completed.json`: list of finished daily puzzles

use super::memory::dates_for_length;
use super::{CompletionStore, DailyKey, SessionSnapshot, SessionStore, StoreError};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const SESSION_FILE: &str = "session.json";
const COMPLETED_FILE: &str = "completed.json";

/// Session and completion store backed by JSON files in one directory
///
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    fn completed_path(&self) -> PathBuf {
        self.dir.join(COMPLETED_FILE)
    }

    fn write_json<T: serde::Serialize + ?Sized>(
        &self,
        path: &Path,
        value: &T,
    ) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(value)?;

        // Readers see either the old file or the new one, never a partial write
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        debug!(path = %path.display(), "Wrote store file");
        Ok(())
    }

    fn load_completed(&self) -> Result<BTreeSet<DailyKey>, StoreError> {
        match read_optional(&self.completed_path())? {
            Some(content) => Ok(serde_json::from_str(&content)?),
            None => Ok(BTreeSet::new()),
        }
    }

    fn save_completed(&self, keys: &BTreeSet<DailyKey>) -> Result<(), StoreError> {
        self.write_json(&self.completed_path(), keys)
    }
}

/// Read a file, mapping "not found" to `None`
fn read_optional(path: &Path) -> Result<Option<String>, StoreError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl SessionStore for FileStore {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        let Some(content) = read_optional(&self.session_path())? else {
            debug!("No stored session");
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    #[instrument(skip(self, snapshot), fields(dir = %self.dir.display(), rows = snapshot.guesses.len()))]
    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        self.write_json(&self.session_path(), snapshot)
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(self.session_path()) {
            Ok(()) => {
                debug!("Cleared stored session");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self) -> Result<bool, StoreError> {
        Ok(self.session_path().is_file())
    }
}

impl CompletionStore for FileStore {
    fn is_completed(&self, key: &DailyKey) -> Result<bool, StoreError> {
        Ok(self.load_completed()?.contains(key))
    }

    #[instrument(skip(self, key), fields(key = %key))]
    fn mark_completed(&mut self, key: &DailyKey) -> Result<(), StoreError> {
        let mut keys = self.load_completed()?;
        if keys.insert(key.clone()) {
            self.save_completed(&keys)?;
        }
        Ok(())
    }

    #[instrument(skip(self, key), fields(key = %key))]
    fn clear_completed(&mut self, key: &DailyKey) -> Result<(), StoreError> {
        let mut keys = self.load_completed()?;
        if keys.remove(key) {
            self.save_completed(&keys)?;
        }
        Ok(())
    }

    fn completed_dates(&self, length: usize) -> Result<Vec<String>, StoreError> {
        Ok(dates_for_length(&self.load_completed()?, length))
    }
}
