//! Charts command implementation

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use focusquest::stats::StatsAggregator;

/// Print weekly and monthly session histograms for a user
pub fn charts_command(
    data_dir: Option<&Path>,
    user: &str,
    days: usize,
    months: usize,
) -> Result<()> {
    let store = Arc::new(super::open_store(data_dir)?);
    let aggregator = StatsAggregator::new(store);

    let view = serde_json::json!({
        "weekly": aggregator.get_weekly(user, days).context("failed to read weekly chart")?,
        "monthly": aggregator.get_monthly(user, months).context("failed to read monthly chart")?,
    });
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
