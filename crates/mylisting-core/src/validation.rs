//! # Validation Module
//!
//! Input validation for cart mutations and wizard fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell parsing (apps/directory)                               │
//! │  ├── Argument types (clap)                                             │
//! │  └── Language / listing type tags                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Cart items: id, name, price, quantity                             │
//! │  └── Wizard fields: title, city                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Domain invariants (cart.rs, wizard.rs)                       │
//! │  └── Max items, merge overflow, step ordering                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mylisting_core::validation::{validate_item_id, validate_quantity};
//!
//! assert!(validate_item_id("listing-1").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY, MAX_UNIT_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Shortest listing title the wizard accepts.
pub const MIN_TITLE_CHARS: usize = 3;

/// Longest listing title the wizard accepts.
pub const MAX_TITLE_CHARS: usize = 120;

// =============================================================================
// String Validators
// =============================================================================

/// Rejects empty or whitespace-only values.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a cart line item identifier.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    validate_required("id", id)?;

    if id.chars().count() > 64 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 64,
        });
    }

    Ok(())
}

/// Validates a cart line item display name.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name)?;

    if name.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a listing title entered in the wizard.
///
/// ```rust
/// use mylisting_core::validation::validate_listing_title;
///
/// assert!(validate_listing_title("Blue Ocean Bistro").is_ok());
/// assert!(validate_listing_title("ab").is_err());
/// ```
pub fn validate_listing_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();
    validate_required("title", title)?;

    let len = title.chars().count();
    if len < MIN_TITLE_CHARS {
        return Err(ValidationError::TooShort {
            field: "title".to_string(),
            min: MIN_TITLE_CHARS,
        });
    }

    if len > MAX_TITLE_CHARS {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_CHARS,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Zero is allowed (free items)
/// - Must not exceed MAX_UNIT_PRICE cents
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.cents() > MAX_UNIT_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that one more distinct item fits in the cart.
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("x").is_ok());
        assert!(validate_item_id("booking-42").is_ok());

        assert_eq!(
            validate_item_id("   "),
            Err(ValidationError::Required {
                field: "id".to_string()
            })
        );
        assert!(validate_item_id(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Foo").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(matches!(
            validate_quantity(0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_quantity(-3).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1099)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
        assert!(validate_price(Money::from_cents(MAX_UNIT_PRICE)).is_ok());
        assert_eq!(
            validate_price(Money::from_cents(MAX_UNIT_PRICE + 1)),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_UNIT_PRICE,
            })
        );
    }

    #[test]
    fn test_validate_listing_title() {
        assert!(validate_listing_title("Blue Ocean Bistro").is_ok());
        assert!(validate_listing_title("   Spa   ").is_ok());
        assert!(matches!(
            validate_listing_title("ab"),
            Err(ValidationError::TooShort { min: 3, .. })
        ));
        assert!(validate_listing_title(&"x".repeat(121)).is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS - 1).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS).is_err());
    }
}
