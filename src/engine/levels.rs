//! XP and level system
//!
//! Defines level thresholds and XP-progress calculations.

use serde::Serialize;

/// XP awarded for each completed focus session.
///
/// The sole XP source. Sessions have a configured target duration, so the
/// award is flat rather than duration-scaled.
pub const XP_PER_SESSION: u32 = 50;

/// Level definition
#[derive(Debug, Clone)]
pub struct Level {
    pub level: u32,
    pub xp_required: u32,
}

/// All level definitions (must be sorted by level, thresholds strictly
/// increasing so progression decelerates)
pub static LEVELS: &[Level] = &[
    Level {
        level: 1,
        xp_required: 0,
    },
    Level {
        level: 2,
        xp_required: 100,
    },
    Level {
        level: 3,
        xp_required: 250,
    },
    Level {
        level: 4,
        xp_required: 500,
    },
    Level {
        level: 5,
        xp_required: 1000,
    },
    Level {
        level: 6,
        xp_required: 2000,
    },
    Level {
        level: 7,
        xp_required: 3500,
    },
    Level {
        level: 8,
        xp_required: 5500,
    },
    Level {
        level: 9,
        xp_required: 8000,
    },
    Level {
        level: 10,
        xp_required: 11000,
    },
];

impl Level {
    /// Calculate level for given XP
    pub fn for_xp(xp: u32) -> &'static Level {
        LEVELS
            .iter()
            .rev()
            .find(|l| xp >= l.xp_required)
            .unwrap_or(&LEVELS[0])
    }

    /// Get XP needed for next level (None if max level)
    pub fn xp_for_next(current_level: u32) -> Option<u32> {
        LEVELS
            .iter()
            .find(|l| l.level == current_level + 1)
            .map(|l| l.xp_required)
    }

    /// Get max level
    pub fn max_level() -> u32 {
        LEVELS.last().map(|l| l.level).unwrap_or(1)
    }
}

/// Validate the level table.
///
/// A malformed table is a programming error; the engine calls this once at
/// construction so it fails fast instead of producing wrong levels per call.
pub fn validate_table() {
    assert!(!LEVELS.is_empty(), "level table must not be empty");
    assert_eq!(LEVELS[0].level, 1, "level table must start at level 1");
    assert_eq!(LEVELS[0].xp_required, 0, "level 1 must require 0 XP");
    for pair in LEVELS.windows(2) {
        assert_eq!(
            pair[1].level,
            pair[0].level + 1,
            "levels must be consecutive"
        );
        assert!(
            pair[1].xp_required > pair[0].xp_required,
            "XP thresholds must be strictly increasing"
        );
    }
}

/// Fractional position between the current level floor and the next threshold
#[derive(Debug, Clone, Serialize)]
pub struct XpProgress {
    pub level: u32,
    /// None at max level
    pub next_level: Option<u32>,
    pub current_xp: u32,
    /// XP threshold of the current level
    pub level_floor_xp: u32,
    /// XP threshold of the next level (None at max)
    pub next_level_xp: Option<u32>,
    /// XP still needed to reach the next level (0 at max)
    pub xp_needed: u32,
    /// Clamped to 0-100; 100 at max level
    pub progress_percentage: f32,
    pub is_max_level: bool,
}

impl XpProgress {
    /// Compute progress for the given cumulative XP
    pub fn for_xp(xp: u32) -> Self {
        let level_info = Level::for_xp(xp);

        match Level::xp_for_next(level_info.level) {
            Some(next) => {
                let span = next - level_info.xp_required;
                let into_level = xp - level_info.xp_required;
                let percentage = if span == 0 {
                    100.0
                } else {
                    (into_level as f32 / span as f32) * 100.0
                };

                Self {
                    level: level_info.level,
                    next_level: Some(level_info.level + 1),
                    current_xp: xp,
                    level_floor_xp: level_info.xp_required,
                    next_level_xp: Some(next),
                    xp_needed: next - xp,
                    progress_percentage: percentage.clamp(0.0, 100.0),
                    is_max_level: false,
                }
            }
            None => Self {
                level: level_info.level,
                next_level: None,
                current_xp: xp,
                level_floor_xp: level_info.xp_required,
                next_level_xp: None,
                xp_needed: 0,
                progress_percentage: 100.0,
                is_max_level: true,
            },
        }
    }
}
