use std::path::Path;

use chrono::{DateTime, Local};

use crate::errors::DiffError;

/// Render a file's last-modification time for a unified-diff header line.
///
/// Local time formatted as `YYYY-MM-DD HH:MM:SS.<frac> ±HHMM`. The
/// fractional-seconds field carries whatever sub-second precision the
/// platform records for the mtime; consumers treat it as opaque.
///
/// # Errors
///
/// Returns [`DiffError::Metadata`] if the file's metadata or modification
/// time cannot be obtained.
pub fn format_mod_time(path: &Path) -> Result<String, DiffError> {
    let modified = std::fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .map_err(|_| {
            DiffError::Metadata("could not get last modification date of the file".to_string())
        })?;

    let local: DateTime<Local> = modified.into();
    Ok(local.format("%Y-%m-%d %H:%M:%S%.9f %z").to_string())
}
