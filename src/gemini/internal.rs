//! Internal HTTP client implementation for gemini

use anyhow::{Context, Result};
use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Generator;

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` client
pub struct Client {
    endpoint: String,
    model: String,
    api_key: String,
    http: HttpClient,
}

impl Client {
    /// Create a client. `timeout: None` waits for as long as the call takes.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            endpoint,
            model: model.into(),
            api_key: api_key.into(),
            http,
        })
    }

    /// `{endpoint}/models/{model}:generateContent`
    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    /// Send one prompt and return the raw response
    pub fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse> {
        let url = self.url();
        let request = GenerateContentRequest::from_prompt(prompt);

        tracing::info!(model = %self.model, prompt_bytes = prompt.len(), "sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .with_context(|| format!("Failed to send request to {}", self.endpoint))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            anyhow::bail!("Gemini request failed ({}): {}", status, body);
        }

        let parsed = response
            .json::<GenerateContentResponse>()
            .with_context(|| "Failed to parse generateContent response")?;

        if let Some(reason) = parsed.finish_reason() {
            tracing::debug!(finish_reason = reason, "generation finished");
        }
        if let Some(blocked) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            tracing::warn!(block_reason = blocked, "prompt was blocked by the model");
        }

        Ok(parsed)
    }
}

impl Generator for Client {
    fn generate(&self, prompt: &str) -> Result<Option<String>> {
        Ok(self.generate_content(prompt)?.text())
    }
}

/// generateContent request body
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single user turn holding the prompt text
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                    thought: None,
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Set on reasoning parts, which are not part of the answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

/// generateContent response body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    ///
    /// Returns None when there is no candidate or no text part.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;

        let mut any = false;
        let mut text = String::new();
        for part in &content.parts {
            if part.thought == Some(true) {
                continue;
            }
            if let Some(t) = &part.text {
                any = true;
                text.push_str(t);
            }
        }

        any.then_some(text)
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }
}
