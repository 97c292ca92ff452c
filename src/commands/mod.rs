pub mod generate;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::template::PromptTemplate;

/// Load the command's template, preferring an explicit override
fn load_template(default: PathBuf, override_path: Option<&Path>) -> Result<PromptTemplate> {
    let path = override_path.map(Path::to_path_buf).unwrap_or(default);
    tracing::debug!(template = %path.display(), "loading prompt template");
    PromptTemplate::load(&path)
}

/// Warn when a template will be sent without a value the command supplies
fn check_placeholder(template: &PromptTemplate, placeholder: &str) {
    if !template.contains(placeholder) {
        let source = template
            .source()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<inline>".to_string());
        tracing::warn!(template = %source, placeholder, "template has no placeholder");
    }
}
