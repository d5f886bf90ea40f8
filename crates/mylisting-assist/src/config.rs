//! # Assist Configuration
//!
//! Settings for the text-generation service and the suggestion flow.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     MYLISTING_API_KEY / GEMINI_API_KEY                                 │
//! │     MYLISTING_MODEL, MYLISTING_ENDPOINT                                │
//! │     MYLISTING_DEBOUNCE_MS, MYLISTING_TIMEOUT_SECS                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config PATH, or                                                  │
//! │     ~/.config/mylisting/assist.toml (Linux)                            │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     gemini-3-flash-preview, 1000 ms debounce, 15 s timeout            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # assist.toml
//! [gemini]
//! api_key = "..."
//! model = "gemini-3-flash-preview"
//! endpoint = "https://generativelanguage.googleapis.com/v1beta"
//! request_timeout_secs = 15
//!
//! [suggestions]
//! debounce_ms = 1000
//! min_query_chars = 3
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{AssistError, AssistResult};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

// =============================================================================
// Gemini Settings
// =============================================================================

/// Text-generation service settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiSettings {
    /// API key. Without one every request degrades to a fallback text.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL; `/models/{model}:generateContent` is appended.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

// Keeps the key out of logs.
impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_request_timeout() -> u64 {
    15
}

impl Default for GeminiSettings {
    fn default() -> Self {
        GeminiSettings {
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

// =============================================================================
// Suggestion Settings
// =============================================================================

/// Search-suggestion flow settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionSettings {
    /// Quiet period after the last keystroke before dispatching.
    #[serde(default = "default_debounce")]
    pub debounce_ms: u64,

    /// Inputs of this many characters or fewer never dispatch.
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
}

fn default_debounce() -> u64 {
    1000
}

fn default_min_query_chars() -> usize {
    mylisting_core::MIN_SUGGESTION_QUERY_CHARS
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        SuggestionSettings {
            debounce_ms: default_debounce(),
            min_query_chars: default_min_query_chars(),
        }
    }
}

// =============================================================================
// Main Assist Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistConfig {
    #[serde(default)]
    pub gemini: GeminiSettings,

    #[serde(default)]
    pub suggestions: SuggestionSettings,
}

impl AssistConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (assist.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AssistResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading assist config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load assist config: {}. Using defaults.", e);
            let mut config = Self::default();
            config.apply_overrides(|key| std::env::var(key).ok());
            if config.validate().is_err() {
                config = Self::default();
            }
            config
        })
    }

    pub fn from_toml(contents: &str) -> AssistResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AssistResult<()> {
        let url = Url::parse(&self.gemini.endpoint)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(AssistError::InvalidUrl(format!(
                "Endpoint must be http:// or https://, got: {}",
                self.gemini.endpoint
            )));
        }

        if self.gemini.model.trim().is_empty() {
            return Err(AssistError::InvalidConfig("model must not be empty".into()));
        }

        if self.gemini.request_timeout_secs == 0 {
            return Err(AssistError::InvalidConfig(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        if self.suggestions.debounce_ms == 0 {
            return Err(AssistError::InvalidConfig(
                "debounce_ms must be greater than 0".into(),
            ));
        }

        if self.suggestions.min_query_chars == 0 {
            return Err(AssistError::InvalidConfig(
                "min_query_chars must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Applies overrides from a variable lookup (the process environment
    /// in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("MYLISTING_API_KEY").or_else(|| lookup("GEMINI_API_KEY")) {
            if !key.trim().is_empty() {
                debug!("Using API key from environment");
                self.gemini.api_key = Some(key);
            }
        }

        if let Some(model) = lookup("MYLISTING_MODEL") {
            debug!(model = %model, "Overriding model from environment");
            self.gemini.model = model;
        }

        if let Some(endpoint) = lookup("MYLISTING_ENDPOINT") {
            debug!(endpoint = %endpoint, "Overriding endpoint from environment");
            self.gemini.endpoint = endpoint;
        }

        if let Some(ms) = lookup("MYLISTING_DEBOUNCE_MS") {
            match ms.parse::<u64>() {
                Ok(ms) => self.suggestions.debounce_ms = ms,
                Err(_) => warn!(value = %ms, "Ignoring non-numeric MYLISTING_DEBOUNCE_MS"),
            }
        }

        if let Some(secs) = lookup("MYLISTING_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) => self.gemini.request_timeout_secs = secs,
                Err(_) => warn!(value = %secs, "Ignoring non-numeric MYLISTING_TIMEOUT_SECS"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "mylisting", "mylisting")
            .map(|dirs| dirs.config_dir().join("assist.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn has_api_key(&self) -> bool {
        self.gemini.api_key.is_some()
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.suggestions.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.gemini.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AssistConfig::default();
        assert_eq!(config.gemini.model, "gemini-3-flash-preview");
        assert_eq!(config.suggestions.debounce_ms, 1000);
        assert_eq!(config.suggestions.min_query_chars, 3);
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert!(!config.has_api_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AssistConfig::from_toml(
            r#"
            [suggestions]
            debounce_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.suggestions.debounce_ms, 250);
        assert_eq!(config.gemini.model, DEFAULT_MODEL);
        assert_eq!(config.gemini.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = AssistConfig::from_toml("[gemini\nmodel=").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AssistConfig::default();
        config.apply_overrides(env(&[
            ("GEMINI_API_KEY", "secret"),
            ("MYLISTING_MODEL", "gemini-pro"),
            ("MYLISTING_DEBOUNCE_MS", "300"),
            ("MYLISTING_TIMEOUT_SECS", "not-a-number"),
        ]));

        assert_eq!(config.gemini.api_key.as_deref(), Some("secret"));
        assert_eq!(config.gemini.model, "gemini-pro");
        assert_eq!(config.suggestions.debounce_ms, 300);
        assert_eq!(config.gemini.request_timeout_secs, 15);
    }

    #[test]
    fn test_mylisting_key_wins_over_gemini_key() {
        let mut config = AssistConfig::default();
        config.apply_overrides(env(&[("GEMINI_API_KEY", "b"), ("MYLISTING_API_KEY", "a")]));
        assert_eq!(config.gemini.api_key.as_deref(), Some("a"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = AssistConfig::default();

        config.gemini.endpoint = "ftp://example.com".to_string();
        assert!(matches!(config.validate(), Err(AssistError::InvalidUrl(_))));

        config.gemini.endpoint = "not a url".to_string();
        assert!(config.validate().is_err());

        config.gemini.endpoint = "http://localhost:8080/v1beta".to_string();
        assert!(config.validate().is_ok());

        config.suggestions.debounce_ms = 0;
        assert!(config.validate().is_err());

        config.suggestions.debounce_ms = 1000;
        config.gemini.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut config = AssistConfig::default();
        config.gemini.api_key = Some("super-secret".to_string());
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
