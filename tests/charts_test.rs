//! Chart bucketing and dashboard view scenarios

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use focusquest::{FixedClock, GamificationEngine, MemoryStore, StatsAggregator};

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn fixture() -> (Arc<FixedClock>, GamificationEngine, StatsAggregator) {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(FixedClock::new(at(2026, 3, 2, 12)));
    let engine = GamificationEngine::with_clock(store.clone(), clock.clone());
    let aggregator = StatsAggregator::with_clock(store, clock.clone());
    (clock, engine, aggregator)
}

#[test]
fn weekly_chart_is_seven_zero_filled_ascending_buckets() {
    let (_clock, engine, aggregator) = fixture();

    // Sessions today and 3 days ago only
    engine
        .record_completion("alice", 1500, Some(at(2026, 3, 2, 9)))
        .unwrap();
    engine
        .record_completion("alice", 1500, Some(at(2026, 2, 27, 9)))
        .unwrap();

    let weekly = aggregator.get_weekly("alice", 7).unwrap();
    assert_eq!(weekly.len(), 7);

    let values: Vec<u64> = weekly.iter().map(|p| p.value).collect();
    // Window is Feb 24 .. Mar 2 ascending; hits land at index 3 and 6
    assert_eq!(values, vec![0, 0, 0, 1, 0, 0, 1]);
    assert_eq!(values.iter().filter(|v| **v >= 1).count(), 2);
    assert_eq!(values.iter().filter(|v| **v == 0).count(), 5);

    // 2026-03-02 is a Monday
    assert_eq!(weekly.last().unwrap().label, "Mon");
}

#[test]
fn repeat_sessions_on_one_day_all_count() {
    let (_clock, engine, aggregator) = fixture();

    for _ in 0..3 {
        engine
            .record_completion("alice", 1500, Some(at(2026, 3, 2, 9)))
            .unwrap();
    }

    let weekly = aggregator.get_weekly("alice", 7).unwrap();
    assert_eq!(weekly.last().unwrap().value, 3);

    // The streak stays date-deduplicated even though the chart counts all
    let stats = aggregator.get_stats("alice").unwrap();
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.today_sessions, 3);
}

#[test]
fn monthly_chart_spans_a_year_boundary() {
    let (_clock, engine, aggregator) = fixture();

    engine
        .record_completion("alice", 1500, Some(at(2026, 3, 1, 9)))
        .unwrap();
    engine
        .record_completion("alice", 1500, Some(at(2025, 11, 20, 9)))
        .unwrap();
    engine
        .record_completion("alice", 1500, Some(at(2025, 11, 21, 9)))
        .unwrap();

    let monthly = aggregator.get_monthly("alice", 12).unwrap();
    assert_eq!(monthly.len(), 12);

    // Ascending: Apr 2025 .. Mar 2026
    assert_eq!(monthly.first().unwrap().label, "Apr 2025");
    assert_eq!(monthly.last().unwrap().label, "Mar 2026");

    let nov: Vec<_> = monthly.iter().filter(|p| p.label == "Nov 2025").collect();
    assert_eq!(nov.len(), 1);
    assert_eq!(nov[0].value, 2);
    assert_eq!(monthly.last().unwrap().value, 1);
}

#[test]
fn unknown_user_gets_the_zero_view() {
    let (_clock, _engine, aggregator) = fixture();

    let stats = aggregator.get_stats("nobody").unwrap();
    assert_eq!(stats.level, 1);
    assert_eq!(stats.total_xp, 0);
    assert_eq!(stats.current_streak, 0);
    assert!(stats.achievements.is_empty());
    assert_eq!(
        stats.available_achievements.len(),
        focusquest::engine::achievements::ACHIEVEMENTS.len()
    );

    let progress = aggregator.get_xp_progress("nobody").unwrap();
    assert_eq!(progress.level, 1);
    assert_eq!(progress.current_xp, 0);

    let charts = aggregator.get_chart_data("nobody").unwrap();
    assert_eq!(charts.weekly.len(), 7);
    assert_eq!(charts.monthly.len(), 12);
    assert!(charts.weekly.iter().all(|p| p.value == 0));
    assert!(charts.monthly.iter().all(|p| p.value == 0));
}

#[test]
fn available_achievements_shrink_as_badges_unlock() {
    let (_clock, engine, aggregator) = fixture();

    let total = focusquest::engine::achievements::ACHIEVEMENTS.len();
    engine.record_completion("alice", 1500, None).unwrap();

    let stats = aggregator.get_stats("alice").unwrap();
    assert_eq!(stats.achievements.len(), 1);
    assert_eq!(stats.achievements[0].id, "first_session");
    assert!(stats.achievements[0].unlocked);
    assert_eq!(stats.available_achievements.len(), total - 1);
    assert!(stats.available_achievements.iter().all(|a| !a.unlocked));

    // "Up next" keeps catalog order
    assert_eq!(stats.available_achievements[0].id, "total_10");
}

#[test]
fn window_counts_in_stats_view() {
    let (_clock, engine, aggregator) = fixture();

    engine
        .record_completion("alice", 1500, Some(at(2026, 3, 2, 9)))
        .unwrap();
    engine
        .record_completion("alice", 1500, Some(at(2026, 2, 27, 9)))
        .unwrap();
    // Outside both windows
    engine
        .record_completion("alice", 1500, Some(at(2026, 1, 10, 9)))
        .unwrap();

    let stats = aggregator.get_stats("alice").unwrap();
    assert_eq!(stats.total_sessions, 3);
    assert_eq!(stats.today_sessions, 1);
    assert_eq!(stats.week_sessions, 2);
    assert_eq!(stats.month_sessions, 1);
}
