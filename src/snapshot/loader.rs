// src/snapshot/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::snapshot::model::Snapshot;

/// Load a run snapshot from a JSON file.
///
/// Errors here mean the snapshot file is unreadable or not valid JSON for
/// the snapshot shape; per-task run outputs inside it are deliberately left
/// untyped and tolerated in any shape.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Snapshot> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot file at {:?}", path))?;

    let snapshot = load_from_str(&contents)
        .with_context(|| format!("parsing JSON snapshot from {:?}", path))?;

    debug!(tasks = snapshot.tasks.len(), "snapshot loaded");
    Ok(snapshot)
}

/// Parse a run snapshot from a JSON string.
pub fn load_from_str(contents: &str) -> Result<Snapshot> {
    let snapshot: Snapshot = serde_json::from_str(contents)?;
    Ok(snapshot)
}
