//! Prompt templates
//!
//! Templates are plain text files with `${name}` placeholder tokens.
//! Only the first occurrence of a placeholder is replaced, and the value
//! is inserted literally.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder for the registry URL of the package
pub const PACKAGE_LINK: &str = "${packageLink}";

/// Placeholder for previously generated documentation
pub const PACKAGE_DOCS: &str = "${packageDocs}";

/// A prompt template being filled in
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    text: String,
    source: Option<PathBuf>,
}

impl PromptTemplate {
    /// Read a template from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read prompt template: {}", path.display()))?;
        Ok(Self {
            text,
            source: Some(path.to_path_buf()),
        })
    }

    /// Build a template from an in-memory string
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: None,
        }
    }

    /// File the template was read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn contains(&self, placeholder: &str) -> bool {
        self.text.contains(placeholder)
    }

    /// Replace the first occurrence of `placeholder` with `value`
    pub fn fill(mut self, placeholder: &str, value: &str) -> Self {
        if let Some(start) = self.text.find(placeholder) {
            self.text
                .replace_range(start..start + placeholder.len(), value);
        }
        self
    }

    pub fn into_prompt(self) -> String {
        self.text
    }
}
