//! Gamification engine
//!
//! Orchestrates the completion flow: load the user's record, award XP,
//! advance the streak, append history, evaluate achievements, save, and
//! report what changed. Exactly one load and one save per completion;
//! concurrent completions for the same user are serialized behind a per-user
//! lock.

pub mod achievements;
pub mod levels;
pub mod streaks;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::error::EngineError;
use crate::store::{ProgressStore, SessionEntry};

use achievements::AchievementDef;
use levels::{Level, XP_PER_SESSION};

/// A newly unlocked achievement, as reported to the caller
#[derive(Debug, Clone, Serialize)]
pub struct NewAchievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl From<&'static AchievementDef> for NewAchievement {
    fn from(def: &'static AchievementDef) -> Self {
        Self {
            id: def.id,
            name: def.name,
            description: def.description,
            icon: def.icon,
        }
    }
}

/// Deltas produced by one completion event
#[derive(Debug, Clone, Serialize)]
pub struct CompletionOutcome {
    pub xp_gained: u32,
    pub total_xp: u32,
    pub level: u32,
    pub leveled_up: bool,
    pub current_streak: u32,
    pub new_achievements: Vec<NewAchievement>,
}

/// Core gamification engine
///
/// Holds no per-user session state; every operation takes the user id
/// explicitly, so the engine is safe under concurrent multi-user access.
pub struct GamificationEngine {
    store: Arc<dyn ProgressStore>,
    clock: Arc<dyn Clock>,
    /// One mutex per user id; serializes load-mutate-save per user
    user_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl GamificationEngine {
    /// Create an engine over the given store with the system clock
    pub fn new(store: Arc<dyn ProgressStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create an engine with an explicit clock (fixed clocks in tests)
    pub fn with_clock(store: Arc<dyn ProgressStore>, clock: Arc<dyn Clock>) -> Self {
        levels::validate_table();
        achievements::validate_catalog();

        Self {
            store,
            clock,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    fn user_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().expect("lock");
        locks.entry(user_id.to_string()).or_default().clone()
    }

    /// Process one completed focus session.
    ///
    /// `occurred_at` defaults to the current time. Invalid input is rejected
    /// before any store traffic; if the save fails the mutated record is
    /// discarded, so nothing partial is ever persisted.
    pub fn record_completion(
        &self,
        user_id: &str,
        focus_seconds: u32,
        occurred_at: Option<DateTime<Utc>>,
    ) -> Result<CompletionOutcome, EngineError> {
        if user_id.trim().is_empty() {
            return Err(EngineError::InvalidInput(
                "user id must not be empty".to_string(),
            ));
        }
        if focus_seconds == 0 {
            return Err(EngineError::InvalidInput(
                "focus duration must be positive".to_string(),
            ));
        }

        let occurred_at = occurred_at.unwrap_or_else(|| self.clock.now());
        let today = occurred_at.date_naive();

        let lock = self.user_lock(user_id);
        let _guard = lock.lock().expect("lock");

        let mut record = self.store.load(user_id)?.unwrap_or_default();
        let old_level = record.level;

        // XP award and level recompute; the level never decreases
        record.total_xp += XP_PER_SESSION;
        let new_level = Level::for_xp(record.total_xp).level;
        let leveled_up = new_level > old_level;
        record.level = new_level.max(old_level);

        // Streak bookkeeping on UTC calendar days
        record.current_streak =
            streaks::advance(record.current_streak, record.last_session_date, today);
        record.longest_streak = record.longest_streak.max(record.current_streak);
        record.last_session_date = Some(today);

        // Lifetime counters and session history
        record.total_sessions += 1;
        record.total_focus_seconds += u64::from(focus_seconds);
        record.session_history.push(SessionEntry {
            completed_at: occurred_at,
            focus_seconds,
        });

        // Union newly true predicates; already-unlocked ids are never
        // re-reported
        let newly_unlocked = achievements::evaluate(&record);
        for def in &newly_unlocked {
            record.unlocked_achievements.push(def.id.to_string());
        }

        self.store.save(user_id, &record)?;

        if leveled_up {
            info!(user = user_id, level = record.level, "leveled up");
        }
        for def in &newly_unlocked {
            info!(user = user_id, achievement = def.id, "achievement unlocked");
        }
        debug!(
            user = user_id,
            xp = record.total_xp,
            streak = record.current_streak,
            "completion recorded"
        );

        Ok(CompletionOutcome {
            xp_gained: XP_PER_SESSION,
            total_xp: record.total_xp,
            level: record.level,
            leveled_up,
            current_streak: record.current_streak,
            new_achievements: newly_unlocked
                .into_iter()
                .map(NewAchievement::from)
                .collect(),
        })
    }
}
