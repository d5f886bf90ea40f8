//! # Assist Error Types
//!
//! Error types for text generation, configuration and the host bridge.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Assist Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Upstream      │  │     Bridge              │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Http           │  │  InvalidPayload         │ │
//! │  │  InvalidUrl     │  │  UpstreamStatus │  │                         │ │
//! │  │  ConfigLoad     │  │  EmptyResponse  │  │                         │ │
//! │  │  MissingCred.   │  │  Timeout        │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for assist operations.
pub type AssistResult<T> = Result<T, AssistError>;

#[derive(Debug, Error)]
pub enum AssistError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid assist configuration.
    #[error("Invalid assist configuration: {0}")]
    InvalidConfig(String),

    /// Endpoint is not an http(s) URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// No API key configured for the text-generation service.
    #[error("No API key configured for the text-generation service")]
    MissingCredential,

    // =========================================================================
    // Upstream Errors
    // =========================================================================
    /// Network or decoding failure talking to the service.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The service answered but produced no text.
    #[error("Upstream returned an empty answer")]
    EmptyResponse,

    /// No answer within the request timeout.
    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    // =========================================================================
    // Bridge Errors
    // =========================================================================
    /// Host event payload did not have the expected shape.
    #[error("Invalid event payload: {0}")]
    InvalidPayload(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<serde_json::Error> for AssistError {
    fn from(err: serde_json::Error) -> Self {
        AssistError::InvalidPayload(err.to_string())
    }
}

impl From<url::ParseError> for AssistError {
    fn from(err: url::ParseError) -> Self {
        AssistError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for AssistError {
    fn from(err: std::io::Error) -> Self {
        AssistError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for AssistError {
    fn from(err: toml::de::Error) -> Self {
        AssistError::ConfigLoadFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl AssistError {
    /// Returns true if asking again may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            AssistError::Http(_) | AssistError::Timeout(_) | AssistError::EmptyResponse => true,
            AssistError::UpstreamStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AssistError::InvalidConfig(_)
                | AssistError::InvalidUrl(_)
                | AssistError::ConfigLoadFailed(_)
                | AssistError::MissingCredential
        )
    }
}
