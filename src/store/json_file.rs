//! Flat-file JSON progress store
//!
//! Keeps one `<data_dir>/<user>.json` document per user. Saves take an
//! exclusive lock and go through a temp file plus rename, so a crash never
//! leaves a half-written record behind.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{ProgressRecord, ProgressStore};
use crate::error::StoreError;

/// Progress store backed by one JSON file per user
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open the store at the default location (~/.focusquest/progress)
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".focusquest")
            .join("progress");
        Self::open(&dir)
    }

    /// Open the store at a specific directory, creating it if needed
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn record_path(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_user_id(user_id)))
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self, user_id: &str) -> Result<Option<ProgressRecord>, StoreError> {
        let path = self.record_path(user_id);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, user_id: &str, record: &ProgressRecord) -> Result<(), StoreError> {
        let path = self.record_path(user_id);
        let content = serde_json::to_string_pretty(record)?;

        // Separate lock file so the rename below never replaces the lock
        let lock_path = path.with_extension("json.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)?;

        // Exclusive lock against concurrent writers (blocks until available)
        lock_file.lock_exclusive()?;

        // Write to temp file first (atomic write pattern)
        let temp_path = path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.sync_all()?;
        drop(temp_file);

        std::fs::rename(&temp_path, &path)?;

        // Lock is released when lock_file is dropped
        Ok(())
    }
}

/// Filesystem-safe token for a user id
fn sanitize_user_id(user_id: &str) -> String {
    user_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        let mut record = ProgressRecord::default();
        record.total_xp = 250;
        record.level = 3;
        record.total_sessions = 5;

        store.save("alice", &record).unwrap();
        let loaded = store.load("alice").unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn unknown_user_loads_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert!(store.load("nobody").unwrap().is_none());
    }

    #[test]
    fn corrupt_record_is_an_error() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        std::fs::write(dir.path().join("alice.json"), "not json {").unwrap();
        let err = store.load("alice").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn save_overwrites_whole_record() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        let mut record = ProgressRecord::default();
        record.total_xp = 50;
        store.save("alice", &record).unwrap();

        record.total_xp = 100;
        record.unlocked_achievements.push("first_session".to_string());
        store.save("alice", &record).unwrap();

        let loaded = store.load("alice").unwrap().unwrap();
        assert_eq!(loaded.total_xp, 100);
        assert_eq!(loaded.unlocked_achievements.len(), 1);
    }

    #[test]
    fn user_ids_map_to_safe_file_names() {
        assert_eq!(sanitize_user_id("alice"), "alice");
        assert_eq!(sanitize_user_id("a/b:c"), "a_b_c");
        assert_eq!(sanitize_user_id("user-1_x.y"), "user-1_x.y");
    }
}
