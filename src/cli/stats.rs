//! Stats command implementation

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use focusquest::stats::StatsAggregator;

/// Print the progress dashboard for a user
pub fn stats_command(data_dir: Option<&Path>, user: &str) -> Result<()> {
    let store = Arc::new(super::open_store(data_dir)?);
    let aggregator = StatsAggregator::new(store);

    let stats = aggregator
        .get_stats(user)
        .context("failed to read stats")?;
    let xp_progress = aggregator
        .get_xp_progress(user)
        .context("failed to read XP progress")?;

    let view = serde_json::json!({
        "stats": stats,
        "xp_progress": xp_progress,
    });
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
