//! In-memory progress store
//!
//! Backs tests and embedded use. Counts loads and saves so tests can assert
//! that rejected inputs never touch storage.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{ProgressRecord, ProgressStore};
use crate::error::StoreError;

/// Progress store held entirely in memory
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, ProgressRecord>>,
    loads: AtomicU64,
    saves: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `load` calls observed
    pub fn load_count(&self) -> u64 {
        self.loads.load(Ordering::SeqCst)
    }

    /// Number of `save` calls observed
    pub fn save_count(&self) -> u64 {
        self.saves.load(Ordering::SeqCst)
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self, user_id: &str) -> Result<Option<ProgressRecord>, StoreError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.lock().expect("lock").get(user_id).cloned())
    }

    fn save(&self, user_id: &str, record: &ProgressRecord) -> Result<(), StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.records
            .lock()
            .expect("lock")
            .insert(user_id.to_string(), record.clone());
        Ok(())
    }
}
