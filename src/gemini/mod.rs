//! Gemini - remote text generation
//!
//! Commands talk to the model through the [`Generator`] trait so they can
//! run against a fake in tests. [`Client`] is the real implementation,
//! a blocking client for the `generateContent` REST endpoint.
//!
//! ```no_run
//! use pkgscribe::config::Config;
//! use pkgscribe::gemini::{self, Generator};
//!
//! let config = Config::default();
//! let client = gemini::connect(&config.gemini, None)?;
//! let text = client.generate("Write docs for left-pad")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use std::time::Duration;

use crate::config::GeminiSection;

pub use internal::{
    Candidate, Client, Content, GenerateContentRequest, GenerateContentResponse, Part,
    PromptFeedback,
};

/// Anything that turns a prompt into generated text
pub trait Generator {
    /// Returns `Ok(None)` (or empty text) when the model produced nothing
    fn generate(&self, prompt: &str) -> Result<Option<String>>;
}

/// Read the API key from the named environment variable
pub fn api_key_from_env(var: &str) -> Result<String> {
    match std::env::var(var) {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => anyhow::bail!("{} not set. Export it or add it to a .env file.", var),
    }
}

/// Build a client from config. `model` overrides the configured model.
pub fn connect(config: &GeminiSection, model: Option<&str>) -> Result<Client> {
    let api_key = api_key_from_env(&config.api_key_env)?;
    let model = model.unwrap_or(&config.model);
    let timeout = config.timeout_secs.map(Duration::from_secs);

    Client::new(&config.endpoint, model, api_key, timeout)
}
