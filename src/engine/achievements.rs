//! Achievement catalog
//!
//! Every badge is an `(id, predicate)` pair over the accumulated record and
//! the catalog is evaluated as one uniform sweep. Predicates read only fields
//! the engine has already folded into the record — never the clock or
//! per-call inputs — so re-evaluating an unchanged record yields nothing new.

use crate::store::ProgressRecord;

/// Achievement definition with unlock predicate
#[derive(Debug, Clone)]
pub struct AchievementDef {
    /// Stable storage key
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub predicate: fn(&ProgressRecord) -> bool,
}

/// All achievement definitions, in dashboard display order
pub static ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: "first_session",
        name: "First Steps",
        description: "Complete your first focus session",
        icon: "🎯",
        predicate: |r| r.total_sessions >= 1,
    },
    AchievementDef {
        id: "total_10",
        name: "Getting Started",
        description: "Complete 10 focus sessions",
        icon: "📈",
        predicate: |r| r.total_sessions >= 10,
    },
    AchievementDef {
        id: "total_50",
        name: "Productive",
        description: "Complete 50 focus sessions",
        icon: "💪",
        predicate: |r| r.total_sessions >= 50,
    },
    AchievementDef {
        id: "total_100",
        name: "Century Club",
        description: "Complete 100 focus sessions",
        icon: "💯",
        predicate: |r| r.total_sessions >= 100,
    },
    AchievementDef {
        id: "streak_3",
        name: "On Fire",
        description: "Complete sessions on 3 consecutive days",
        icon: "🔥",
        predicate: |r| r.current_streak >= 3,
    },
    AchievementDef {
        id: "streak_7",
        name: "Week Warrior",
        description: "Complete sessions on 7 consecutive days",
        icon: "📅",
        predicate: |r| r.current_streak >= 7,
    },
    AchievementDef {
        id: "streak_30",
        name: "Monthly Master",
        description: "Complete sessions on 30 consecutive days",
        icon: "👑",
        predicate: |r| r.current_streak >= 30,
    },
    AchievementDef {
        id: "focus_10h",
        name: "Deep Worker",
        description: "Accumulate 10 hours of focused time",
        icon: "🧠",
        predicate: |r| r.total_focus_seconds >= 36_000,
    },
    AchievementDef {
        id: "focus_100h",
        name: "Focus Master",
        description: "Accumulate 100 hours of focused time",
        icon: "🏆",
        predicate: |r| r.total_focus_seconds >= 360_000,
    },
];

impl AchievementDef {
    /// Get achievement definition by id
    pub fn get(id: &str) -> Option<&'static AchievementDef> {
        ACHIEVEMENTS.iter().find(|a| a.id == id)
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }
}

/// Definitions whose predicate holds and that the record has not unlocked
/// yet, in catalog order. Idempotent over an unchanged record.
pub fn evaluate(record: &ProgressRecord) -> Vec<&'static AchievementDef> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| !record.has_achievement(a.id))
        .filter(|a| (a.predicate)(record))
        .collect()
}

/// Validate the catalog: ids must be unique and non-empty.
///
/// Called once at engine construction; a malformed catalog is a programming
/// error, not a runtime condition.
pub fn validate_catalog() {
    for (i, def) in ACHIEVEMENTS.iter().enumerate() {
        assert!(!def.id.is_empty(), "achievement id must not be empty");
        assert!(
            ACHIEVEMENTS[i + 1..].iter().all(|other| other.id != def.id),
            "duplicate achievement id: {}",
            def.id
        );
    }
}
