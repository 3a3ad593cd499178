//! Rendering of result sets.

use crate::aggregate::ResultSet;
use crate::error::{SourceError, SourceResult};
use std::path::Path;

/// One canonical number per line, each line terminated by `\n`.
pub fn render_lines(set: &ResultSet) -> String {
    let mut out = String::with_capacity(set.len() * 17);
    for number in set {
        out.push_str(number.as_str());
        out.push('\n');
    }
    out
}

/// The result set as a JSON array of canonical strings.
pub fn render_json(set: &ResultSet) -> serde_json::Result<String> {
    serde_json::to_string(set)
}

/// Write the result set to `path`, replacing any existing file.
pub async fn write_to_file(set: &ResultSet, path: &Path) -> SourceResult<()> {
    tokio::fs::write(path, render_lines(set))
        .await
        .map_err(|source| SourceError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!("Results saved to {}", path.display());
    Ok(())
}
