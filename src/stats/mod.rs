//! Read-only dashboard views
//!
//! Derives level, streak, achievement, and histogram views from stored
//! records. Never writes the store. A user with no history gets the
//! well-defined zero view, not an error.

mod time_bucket;

pub use time_bucket::{day_label, last_days, last_months, month_label, month_of};

pub use crate::engine::levels::XpProgress;

use std::sync::Arc;

use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::engine::achievements::{ACHIEVEMENTS, AchievementDef};
use crate::error::EngineError;
use crate::store::{ProgressRecord, ProgressStore};

/// One labeled histogram bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

/// Weekly and monthly session histograms, chronologically ascending
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub weekly: Vec<ChartPoint>,
    pub monthly: Vec<ChartPoint>,
}

/// Achievement as shown on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct AchievementView {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
}

impl AchievementView {
    fn from_def(def: &'static AchievementDef, unlocked: bool) -> Self {
        Self {
            id: def.id,
            name: def.name,
            description: def.description,
            icon: def.icon,
            unlocked,
        }
    }
}

/// Progress dashboard summary
#[derive(Debug, Clone, Serialize)]
pub struct StatsView {
    pub level: u32,
    pub total_xp: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_sessions: u64,
    pub total_focus_seconds: u64,
    pub today_sessions: u64,
    /// Sessions in the trailing 7 calendar days
    pub week_sessions: u64,
    /// Sessions in the current calendar month
    pub month_sessions: u64,
    /// Unlocked badges, in unlock order
    pub achievements: Vec<AchievementView>,
    /// Not-yet-unlocked badges, in catalog order ("up next")
    pub available_achievements: Vec<AchievementView>,
}

/// Read-only statistics over the progress store
pub struct StatsAggregator {
    store: Arc<dyn ProgressStore>,
    clock: Arc<dyn Clock>,
}

impl StatsAggregator {
    /// Create an aggregator over the given store with the system clock
    pub fn new(store: Arc<dyn ProgressStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create an aggregator with an explicit clock
    pub fn with_clock(store: Arc<dyn ProgressStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    fn load_or_default(&self, user_id: &str) -> Result<ProgressRecord, EngineError> {
        Ok(self.store.load(user_id)?.unwrap_or_default())
    }

    /// Dashboard summary for a user
    pub fn get_stats(&self, user_id: &str) -> Result<StatsView, EngineError> {
        let record = self.load_or_default(user_id)?;
        let today = self.clock.now().date_naive();
        let week = last_days(today, 7);
        let this_month = month_of(today);

        let mut today_sessions = 0;
        let mut week_sessions = 0;
        let mut month_sessions = 0;
        for entry in &record.session_history {
            let date = entry.completed_at.date_naive();
            if date == today {
                today_sessions += 1;
            }
            if week.contains(&date) {
                week_sessions += 1;
            }
            if month_of(date) == this_month {
                month_sessions += 1;
            }
        }

        let achievements = record
            .unlocked_achievements
            .iter()
            .filter_map(|id| AchievementDef::get(id))
            .map(|def| AchievementView::from_def(def, true))
            .collect();

        let available_achievements = ACHIEVEMENTS
            .iter()
            .filter(|def| !record.has_achievement(def.id))
            .map(|def| AchievementView::from_def(def, false))
            .collect();

        Ok(StatsView {
            level: record.level,
            total_xp: record.total_xp,
            current_streak: record.current_streak,
            longest_streak: record.longest_streak,
            total_sessions: record.total_sessions,
            total_focus_seconds: record.total_focus_seconds,
            today_sessions,
            week_sessions,
            month_sessions,
            achievements,
            available_achievements,
        })
    }

    /// XP position between the current level floor and the next threshold
    pub fn get_xp_progress(&self, user_id: &str) -> Result<XpProgress, EngineError> {
        let record = self.load_or_default(user_id)?;
        Ok(XpProgress::for_xp(record.total_xp))
    }

    /// Default dashboard histograms: trailing 7 days and 12 months
    pub fn get_chart_data(&self, user_id: &str) -> Result<ChartData, EngineError> {
        Ok(ChartData {
            weekly: self.get_weekly(user_id, 7)?,
            monthly: self.get_monthly(user_id, 12)?,
        })
    }

    /// Sessions per day over the trailing `days` calendar days, ascending,
    /// zero-filled
    pub fn get_weekly(&self, user_id: &str, days: usize) -> Result<Vec<ChartPoint>, EngineError> {
        let record = self.load_or_default(user_id)?;
        let today = self.clock.now().date_naive();

        Ok(last_days(today, days)
            .into_iter()
            .map(|day| ChartPoint {
                label: day_label(day),
                value: record
                    .session_history
                    .iter()
                    .filter(|e| e.completed_at.date_naive() == day)
                    .count() as u64,
            })
            .collect())
    }

    /// Sessions per month over the trailing `months` calendar months,
    /// ascending, zero-filled
    pub fn get_monthly(
        &self,
        user_id: &str,
        months: usize,
    ) -> Result<Vec<ChartPoint>, EngineError> {
        let record = self.load_or_default(user_id)?;
        let today = self.clock.now().date_naive();

        Ok(last_months(today, months)
            .into_iter()
            .map(|(year, month)| ChartPoint {
                label: month_label(year, month),
                value: record
                    .session_history
                    .iter()
                    .filter(|e| month_of(e.completed_at.date_naive()) == (year, month))
                    .count() as u64,
            })
            .collect())
    }
}
