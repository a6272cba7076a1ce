//! Alignment offset persistence.
//!
//! A committed offset outlives the process so a plot can resume across
//! restarts. The format is one `x,y` line, human-readable and
//! hand-editable.

use plotstudio_core::{Result, StoreError, Vec2};
use std::fs;
use std::path::Path;

/// Write `offset` to `path`, replacing any previous contents.
pub fn save_offset(path: impl AsRef<Path>, offset: Vec2) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, format!("{}\n", offset)).map_err(StoreError::Io)?;
    tracing::info!("Saved alignment offset {} to {}", offset, path.display());
    Ok(())
}

/// Read the offset persisted at `path`.
///
/// Only the first line is read; trailing content is ignored.
pub fn load_offset(path: impl AsRef<Path>) -> Result<Vec2> {
    let content = fs::read_to_string(path.as_ref()).map_err(StoreError::Io)?;
    let line = content.lines().next().unwrap_or("").trim();
    let offset = line.parse::<Vec2>().map_err(|_| StoreError::Malformed {
        content: line.to_string(),
    })?;
    Ok(offset)
}
