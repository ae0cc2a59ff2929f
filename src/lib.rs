//! focusquest - gamified progress tracking for focus sessions
//!
//! Converts "focus session completed" events into experience points, level
//! transitions, daily streaks, and achievement unlocks, and serves the
//! read-only views a progress dashboard needs: current level, XP to the next
//! level, badges, and weekly/monthly session histograms.
//!
//! ## Data flow
//!
//! ```text
//! completion event ──▶ GamificationEngine ──▶ deltas (XP, level-ups, unlocks)
//!                        load │ save
//!                             ▼
//!                       ProgressStore  (one whole record per user)
//!                             ▲
//!                        load │
//! dashboard query ──▶ StatsAggregator ──▶ read-only views
//! ```
//!
//! Writes for one user are serialized behind a per-user lock; reads never
//! mutate. [`clock::Clock`] and [`store::ProgressStore`] are seams: swap in
//! [`clock::FixedClock`] and [`store::MemoryStore`] to drive the engine
//! deterministically in tests or embeddings.

pub mod clock;
pub mod engine;
pub mod error;
pub mod stats;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{CompletionOutcome, GamificationEngine, NewAchievement};
pub use error::{EngineError, StoreError};
pub use stats::{ChartData, ChartPoint, StatsAggregator, StatsView};
pub use store::{JsonFileStore, MemoryStore, ProgressRecord, ProgressStore, SessionEntry};
