//! CLI command implementations

pub mod charts;
pub mod complete;
pub mod stats;

use std::path::Path;

use anyhow::{Context, Result};

use focusquest::store::JsonFileStore;

/// Open the progress store, honoring a `--data-dir` override
pub(crate) fn open_store(data_dir: Option<&Path>) -> Result<JsonFileStore> {
    match data_dir {
        Some(dir) => JsonFileStore::open(dir)
            .with_context(|| format!("failed to open progress store: {}", dir.display())),
        None => JsonFileStore::open_default().context("failed to open progress store"),
    }
}
