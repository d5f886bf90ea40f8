//! # Error Types
//!
//! Domain-specific error types for mylisting-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mylisting-core errors (this file)                                     │
//! │  ├── CoreError        - Cart, catalog, wizard and parsing failures     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  mylisting-assist errors (separate crate)                              │
//! │  └── AssistError      - Text generation, config, timeouts              │
//! │                                                                         │
//! │  App errors                                                            │
//! │  └── ApiError         - What the shell prints                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → shell output           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Listing id is not in the catalog.
    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    /// Cart has reached its maximum number of distinct items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Merging into an existing line would exceed the per-item maximum.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// A language tag outside the supported set.
    ///
    /// Only raised when parsing user or config input; `Language` itself is
    /// a closed type.
    #[error("Unknown language '{0}'. Supported: pt-BR, en-US")]
    UnknownLanguage(String),

    /// Listing type name that does not map to a `ListingType`.
    #[error("Unknown listing type '{0}'")]
    UnknownListingType(String),

    /// Plan name that is neither free nor gold.
    #[error("Unknown plan '{0}'. Supported: free, gold")]
    UnknownPlan(String),

    /// Wizard action not allowed on the current step.
    ///
    /// ## When This Occurs
    /// - `submit()` before reaching the Plan step
    #[error("Wizard is on step {current}, action requires step {required}")]
    WizardStep { current: u8, required: u8 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::QuantityTooLarge {
            requested: 1000,
            max: 999,
        };
        assert_eq!(err.to_string(), "Quantity 1000 exceeds maximum allowed (999)");

        let err = CoreError::UnknownLanguage("fr-FR".to_string());
        assert_eq!(err.to_string(), "Unknown language 'fr-FR'. Supported: pt-BR, en-US");

        let err = CoreError::UnknownPlan("platinum".to_string());
        assert_eq!(err.to_string(), "Unknown plan 'platinum'. Supported: free, gold");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(validation_err.to_string(), "id is required");

        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
