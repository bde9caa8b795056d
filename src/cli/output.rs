//! CLI output: error mapping and writing generated payloads to disk.

use crate::error::ApiError;
use crate::generation::Creative;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::NoCreatives(summary) => summary.clone(),
        other => other.to_string(),
    }
}

/// Write each creative's payload to `dir` as `<id>.<ext>`; returns paths in creative order.
pub fn write_creatives(creatives: &[Creative], dir: &Path) -> Result<Vec<PathBuf>, ApiError> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(creatives.len());
    for creative in creatives {
        let payload = creative.payload();
        let path = dir.join(format!("{}.{}", file_stem(creative.id()), payload.extension()));
        std::fs::write(&path, &payload.data)?;
        debug!(path = %path.display(), bytes = payload.data.len(), "Creative written");
        written.push(path);
    }
    Ok(written)
}

/// Creative ids embed platform names; keep only filename-safe characters.
fn file_stem(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
