//! # Application Configuration
//!
//! Settings the directory app needs beyond `AssistConfig`.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--lang`, `--listings`, `--config`)
//! 2. Environment variables (`MYLISTING_LANG`, `MYLISTING_LISTINGS`)
//! 3. Defaults (Portuguese, empty catalog)
//!
//! Read-only after startup, so no lock.

use std::path::PathBuf;

use mylisting_core::Language;
use serde::Serialize;

use crate::error::ApiError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Language of a fresh session.
    pub language: Language,

    /// JSON array of listings. Empty catalog when unset.
    pub listings_path: Option<PathBuf>,

    /// Explicit `assist.toml`. The platform config dir is used when unset.
    pub assist_config_path: Option<PathBuf>,
}

impl AppConfig {
    /// Builds the config from environment lookups, e.g.
    /// `AppConfig::from_env(|k| std::env::var(k).ok())`.
    pub fn from_env<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(tag) = lookup("MYLISTING_LANG") {
            config.language = tag.parse()?;
        }
        if let Some(path) = lookup("MYLISTING_LISTINGS").filter(|p| !p.trim().is_empty()) {
            config.listings_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Applies command-line flags on top.
    pub fn with_overrides(
        mut self,
        language: Option<Language>,
        listings_path: Option<PathBuf>,
        assist_config_path: Option<PathBuf>,
    ) -> Self {
        if let Some(language) = language {
            self.language = language;
        }
        if listings_path.is_some() {
            self.listings_path = listings_path;
        }
        if assist_config_path.is_some() {
            self.assist_config_path = assist_config_path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_env(env(&[])).unwrap();
        assert_eq!(config.language, Language::PtBr);
        assert!(config.listings_path.is_none());
    }

    #[test]
    fn test_env_values() {
        let config = AppConfig::from_env(env(&[
            ("MYLISTING_LANG", "en"),
            ("MYLISTING_LISTINGS", "/srv/listings.json"),
        ]))
        .unwrap();

        assert_eq!(config.language, Language::EnUs);
        assert_eq!(config.listings_path, Some(PathBuf::from("/srv/listings.json")));
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let err = AppConfig::from_env(env(&[("MYLISTING_LANG", "klingon")])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_flags_win_over_env() {
        let config = AppConfig::from_env(env(&[
            ("MYLISTING_LANG", "en-US"),
            ("MYLISTING_LISTINGS", "/env.json"),
        ]))
        .unwrap()
        .with_overrides(Some(Language::PtBr), None, Some(PathBuf::from("/etc/assist.toml")));

        assert_eq!(config.language, Language::PtBr);
        assert_eq!(config.listings_path, Some(PathBuf::from("/env.json")));
        assert_eq!(config.assist_config_path, Some(PathBuf::from("/etc/assist.toml")));
    }
}
