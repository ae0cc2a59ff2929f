//! Durable per-user progress records
//!
//! The engine loads and saves whole records through the [`ProgressStore`]
//! trait; persistence mechanics stay behind it. [`JsonFileStore`] keeps one
//! JSON document per user, [`MemoryStore`] backs tests and embedded use.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// One completed focus session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEntry {
    /// Completion instant (UTC)
    pub completed_at: DateTime<Utc>,
    /// Configured focus duration of the session
    pub focus_seconds: u32,
}

/// Per-user gamification state, loaded and saved as a whole
///
/// Mutated only inside the engine's completion handling. `total_xp` and
/// `unlocked_achievements` only ever grow; `longest_streak` never drops
/// below `current_streak`; `session_history` is append-only chronological.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressRecord {
    pub total_xp: u32,
    pub level: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// UTC calendar date of the most recent completion
    pub last_session_date: Option<NaiveDate>,
    pub total_sessions: u64,
    pub total_focus_seconds: u64,
    /// Unlock order; ids are never removed
    pub unlocked_achievements: Vec<String>,
    pub session_history: Vec<SessionEntry>,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            total_xp: 0,
            level: 1,
            current_streak: 0,
            longest_streak: 0,
            last_session_date: None,
            total_sessions: 0,
            total_focus_seconds: 0,
            unlocked_achievements: Vec::new(),
            session_history: Vec::new(),
        }
    }
}

impl ProgressRecord {
    /// Whether the achievement id has already been unlocked
    pub fn has_achievement(&self, id: &str) -> bool {
        self.unlocked_achievements.iter().any(|u| u == id)
    }
}

/// Durable whole-record storage keyed by user id
///
/// Both operations are atomic over the whole record. A user without history
/// is a valid state: `load` answers `Ok(None)`, never an error.
pub trait ProgressStore: Send + Sync {
    /// Load the record for a user, `None` if the user has no history yet
    fn load(&self, user_id: &str) -> Result<Option<ProgressRecord>, StoreError>;

    /// Replace the stored record for a user
    fn save(&self, user_id: &str, record: &ProgressRecord) -> Result<(), StoreError>;
}
