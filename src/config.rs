//! Configuration for pkgscribe
//!
//! Optional `.pkgscribe/config.toml` under the project root. Every section
//! and field is optional; a missing file yields the defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths;

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-001";

/// Default Gemini REST endpoint (without the `/models/...` suffix)
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiSection,
    #[serde(default)]
    pub layout: LayoutSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiSection {
    /// Model name, e.g. "gemini-2.0-flash-001"
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the generative language API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Name of the environment variable that holds the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout; unset means wait for as long as the call takes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

impl Default for GeminiSection {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
            timeout_secs: None,
        }
    }
}

/// Directory names relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSection {
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,
    #[serde(default = "default_tests_dir")]
    pub tests_dir: String,
    #[serde(default = "default_prompts_dir")]
    pub prompts_dir: String,
}

fn default_docs_dir() -> String {
    "docs".to_string()
}
fn default_tests_dir() -> String {
    "tests".to_string()
}
fn default_prompts_dir() -> String {
    "prompts".to_string()
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            tests_dir: default_tests_dir(),
            prompts_dir: default_prompts_dir(),
        }
    }
}

impl Config {
    /// Load config from `<root>/.pkgscribe/config.toml`
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}
