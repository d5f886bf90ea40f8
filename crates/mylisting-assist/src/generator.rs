//! # Text Generation
//!
//! The seam between the directory and a hosted language model.
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST {endpoint}/models/{model}:generateContent                        │
//! │  x-goog-api-key: <key>                                                 │
//! │                                                                         │
//! │  { "contents": [ { "parts": [ { "text": "<prompt>" } ] } ] }           │
//! │                                                                         │
//! │  200 ──► { "candidates": [ { "content": { "parts": [                   │
//! │              { "text": "..." }, { "text": "..." } ] } } ] }            │
//! │                                                                         │
//! │          text = candidates[0].content.parts[*].text joined             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GeminiSettings;
use crate::error::{AssistError, AssistResult};

/// Anything that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, model: &str) -> AssistResult<String>;
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl<'a> GenerateRequest<'a> {
    fn single(prompt: &'a str) -> Self {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

impl GenerateResponse {
    /// Joined text of the first candidate, or `EmptyResponse`.
    fn into_text(self) -> AssistResult<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AssistError::EmptyResponse);
        }

        Ok(text)
    }
}

// =============================================================================
// Gemini Client
// =============================================================================

/// HTTP client for the Gemini `generateContent` API.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(settings: &GeminiSettings) -> Self {
        GeminiClient {
            http: reqwest::Client::new(),
            api_key: settings.api_key.clone(),
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn url_for(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, model: &str) -> AssistResult<String> {
        let api_key = self.api_key.as_deref().ok_or(AssistError::MissingCredential)?;

        let url = self.url_for(model);
        debug!(%url, prompt_len = prompt.len(), "Calling generateContent");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&GenerateRequest::single(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response.json().await?;
        body.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateRequest::single("hello")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "contents": [ { "parts": [ { "text": "hello" } ] } ] })
        );
    }

    #[test]
    fn test_response_parts_are_joined() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": "Try " }, { "text": "sushi bars." } ] } },
                { "content": { "parts": [ { "text": "ignored" } ] } }
            ]
        }))
        .unwrap();

        assert_eq!(response.into_text().unwrap(), "Try sushi bars.");
    }

    #[test]
    fn test_empty_response() {
        let none: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(none.into_text(), Err(AssistError::EmptyResponse)));

        let blank: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [ { "content": { "parts": [ { "text": "  " } ] } } ]
        }))
        .unwrap();
        assert!(matches!(blank.into_text(), Err(AssistError::EmptyResponse)));
    }

    #[test]
    fn test_url_for_model() {
        let settings = GeminiSettings {
            endpoint: "http://localhost:9000/v1beta/".to_string(),
            ..Default::default()
        };
        let client = GeminiClient::new(&settings);
        assert_eq!(
            client.url_for("gemini-3-flash-preview"),
            "http://localhost:9000/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let client = GeminiClient::new(&GeminiSettings::default());
        assert!(!client.has_api_key());

        let err = client.generate("prompt", "model").await.unwrap_err();
        assert!(matches!(err, AssistError::MissingCredential));
    }
}
