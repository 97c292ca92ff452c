//! Generated artifact output
//!
//! Writes model output to `<dir>/<stem>.md`, replacing any previous run.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Written when the model returns no text
pub const FALLBACK_CONTENT: &str = "No content generated";

/// Markdown file path for a sanitized package stem
pub fn artifact_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{}.md", stem))
}

/// Write generated text (or the fallback) to `path`, creating its directory
pub fn write(path: &Path, text: Option<&str>) -> Result<PathBuf> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    let content = match text {
        Some(t) if !t.is_empty() => t,
        _ => FALLBACK_CONTENT,
    };

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "artifact written");
    Ok(path.to_path_buf())
}
