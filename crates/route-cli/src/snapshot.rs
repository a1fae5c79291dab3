//! Saved snapshot loading.

use anyhow::{Context, Result};
use route_core::RouteSnapshot;
use std::path::Path;

/// Read a JSON route snapshot from disk.
pub fn load_snapshot(path: &Path) -> Result<RouteSnapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    parse_snapshot(&text).with_context(|| format!("parsing snapshot {}", path.display()))
}

pub fn parse_snapshot(text: &str) -> Result<RouteSnapshot> {
    let snapshot: RouteSnapshot = serde_json::from_str(text)?;
    for (index, point) in snapshot.path.iter().enumerate() {
        if let Err(e) = point.validate() {
            tracing::warn!(index, error = %e, "invalid path point in snapshot");
        }
    }
    Ok(snapshot)
}
