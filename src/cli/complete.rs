//! Complete command implementation

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use focusquest::engine::GamificationEngine;

/// Record a completed focus session and print the resulting deltas
pub fn complete_command(data_dir: Option<&Path>, user: &str, duration: u32) -> Result<()> {
    let store = Arc::new(super::open_store(data_dir)?);
    let engine = GamificationEngine::new(store);

    let outcome = engine
        .record_completion(user, duration, None)
        .context("failed to record completion")?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
