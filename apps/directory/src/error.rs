//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in MyListing                              │
//! │                                                                         │
//! │  shell line: "add x -5 Foo"                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ─── CoreError::Validation ──┐                │  │
//! │  │         │                                      │                │  │
//! │  │         ▼                                      ▼                │  │
//! │  │  Upstream Error? ──── AssistError::* ────── ApiError ──────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  shell prints:  error [VALIDATION_ERROR]: price must be between ...    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mylisting_assist::AssistError;
use mylisting_core::CoreError;
use serde::Serialize;

/// Error returned from every command.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Listing not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Listing or cart line not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart capacity or quantity limit
    CartError,

    /// Wizard action on the wrong step
    WizardError,

    /// Text-generation service failed or timed out
    Upstream,

    /// Bad configuration or catalog file
    ConfigError,

    /// Internal error
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ConfigError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ListingNotFound(id) => ApiError::not_found("Listing", &id),
            CoreError::CartTooLarge { max } => ApiError::new(
                ErrorCode::CartError,
                format!("Cart cannot have more than {} items", max),
            ),
            CoreError::QuantityTooLarge { requested, max } => ApiError::new(
                ErrorCode::CartError,
                format!("Quantity {} exceeds maximum allowed ({})", requested, max),
            ),
            CoreError::UnknownLanguage(_)
            | CoreError::UnknownListingType(_)
            | CoreError::UnknownPlan(_) => {
                ApiError::validation(err.to_string())
            }
            CoreError::WizardStep { .. } => ApiError::new(ErrorCode::WizardError, err.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts assist errors to API errors.
impl From<AssistError> for ApiError {
    fn from(err: AssistError) -> Self {
        if err.is_config_error() {
            return ApiError::config(err.to_string());
        }

        match err {
            AssistError::InvalidPayload(msg) => ApiError::validation(msg),
            AssistError::Http(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Text-generation request failed: {}", e);
                ApiError::new(ErrorCode::Upstream, "Text-generation service unreachable")
            }
            other => ApiError::new(ErrorCode::Upstream, other.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = serde_json::to_value(self.code)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| format!("{:?}", self.code));
        write!(f, "[{}] {}", code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use mylisting_core::ValidationError;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: ApiError = CoreError::ListingNotFound("42".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Listing not found: 42");

        let err: ApiError = CoreError::CartTooLarge { max: 100 }.into();
        assert_eq!(err.code, ErrorCode::CartError);

        let err: ApiError = CoreError::Validation(ValidationError::MustBePositive {
            field: "quantity".into(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "quantity must be positive");

        let err: ApiError = CoreError::WizardStep { current: 2, required: 4 }.into();
        assert_eq!(err.code, ErrorCode::WizardError);
    }

    #[test]
    fn test_assist_errors_map_to_codes() {
        let err: ApiError = AssistError::Timeout(15_000).into();
        assert_eq!(err.code, ErrorCode::Upstream);

        let err: ApiError = AssistError::InvalidUrl("bad".into()).into();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_display_uses_wire_code() {
        let err = ApiError::not_found("Listing", "7");
        assert_eq!(err.to_string(), "[NOT_FOUND] Listing not found: 7");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ApiError::validation("bad")).unwrap();
        assert_eq!(json, serde_json::json!({ "code": "VALIDATION_ERROR", "message": "bad" }));
    }
}
