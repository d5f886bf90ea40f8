//! # Recommender
//!
//! Builds the language-specific prompt, calls the text generator under a
//! timeout, and turns a missing API key into the translated fallback text.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  smart_recommendations(query, lang)                                    │
//! │  listing_description(title, type, lang)                                │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  prompt::* ──► timeout(generate(prompt, model))                        │
//! │                    │                                                    │
//! │                    ├── Ok(text) ─────────────► Ok(text.trim())          │
//! │                    ├── MissingCredential ────► Ok(fallback text)        │
//! │                    ├── elapsed ──────────────► Err(Timeout)             │
//! │                    └── other ────────────────► Err(..)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use mylisting_core::prompt::{description_prompt, suggestion_prompt};
use mylisting_core::{translate, Language, ListingType, TextKey};
use tracing::{debug, info};

use crate::config::AssistConfig;
use crate::error::{AssistError, AssistResult};
use crate::generator::TextGenerator;

#[derive(Clone)]
pub struct Recommender {
    generator: Arc<dyn TextGenerator>,
    model: String,
    timeout: Duration,
}

impl Recommender {
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>, timeout: Duration) -> Self {
        Recommender {
            generator,
            model: model.into(),
            timeout,
        }
    }

    pub fn from_config(generator: Arc<dyn TextGenerator>, config: &AssistConfig) -> Self {
        Self::new(generator, config.gemini.model.clone(), config.request_timeout())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// A short paragraph suggesting kinds of places related to `query`.
    pub async fn smart_recommendations(&self, query: &str, language: Language) -> AssistResult<String> {
        let prompt = suggestion_prompt(query, language);
        self.run(&prompt, language, TextKey::AiKeyMissing).await
    }

    /// A two-sentence marketing description for a new listing.
    pub async fn listing_description(
        &self,
        title: &str,
        listing_type: ListingType,
        language: Language,
    ) -> AssistResult<String> {
        let prompt = description_prompt(title, listing_type, language);
        self.run(&prompt, language, TextKey::AiDescriptionKeyMissing).await
    }

    async fn run(&self, prompt: &str, language: Language, fallback: TextKey) -> AssistResult<String> {
        debug!(model = %self.model, %language, "Requesting generated text");

        let result = tokio::time::timeout(self.timeout, self.generator.generate(prompt, &self.model))
            .await
            .map_err(|_| AssistError::Timeout(self.timeout.as_millis() as u64))?;

        match result {
            Ok(text) => Ok(text.trim().to_string()),
            Err(AssistError::MissingCredential) => {
                info!("No API key configured, returning fallback text");
                Ok(translate(language, fallback).to_string())
            }
            Err(e) => Err(e),
        }
    }
}
