//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐                                         │
//! │  │  Empty   │────►│ In Cart  │──── header badge = cart_count()         │
//! │  │  Cart    │     │          │                                          │
//! │  └──────────┘     └──────────┘                                          │
//! │       ▲                │                                                │
//! │       │           add_to_cart  (same id: quantity + 1)                  │
//! │       │           remove_from_cart                                      │
//! │       │                │                                                │
//! │       │                ▼                                                │
//! │       └────────── clear_cart                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mylisting_core::{Cart, CartItem, Money};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::Session;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub count: i64,
    pub subtotal: Money,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            count: cart.cart_count(),
            subtotal: cart.subtotal(),
        }
    }
}

pub fn get_cart(session: &Session) -> CartResponse {
    debug!("get_cart command");
    session.cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one unit of an item.
///
/// ## Behavior
/// - Item already in cart: quantity increases by one, price unchanged
/// - Item not in cart: added with quantity 1
pub fn add_to_cart(
    session: &Session,
    id: &str,
    price_cents: i64,
    name: &str,
) -> Result<CartResponse, ApiError> {
    debug!(id, price_cents, "add_to_cart command");

    let item = CartItem::new(id, name, Money::from_cents(price_cents), 1);
    session.cart.with_cart_mut(|cart| -> Result<CartResponse, ApiError> {
        cart.add_to_cart(item)?;
        Ok(CartResponse::from(&*cart))
    })
}

/// Removes an item. Unknown ids leave the cart unchanged.
pub fn remove_from_cart(session: &Session, id: &str) -> CartResponse {
    debug!(id, "remove_from_cart command");

    session.cart.with_cart_mut(|cart| {
        if !cart.remove_from_cart(id) {
            debug!(id, "Item was not in cart");
        }
        CartResponse::from(&*cart)
    })
}

pub fn clear_cart(session: &Session) -> CartResponse {
    debug!("clear_cart command");
    session.cart.with_cart_mut(|cart| {
        cart.clear_cart();
        CartResponse::from(&*cart)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::test_support::{session_with, Scripted};

    #[tokio::test]
    async fn test_add_twice_merges() {
        let session = session_with(Scripted::ok("x"));

        add_to_cart(&session, "x", 10, "Foo").unwrap();
        let cart = add_to_cart(&session, "x", 10, "Foo").unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.count, 2);
        assert_eq!(cart.subtotal, Money::from_cents(20));
    }

    #[tokio::test]
    async fn test_remove_then_add_starts_at_one() {
        let session = session_with(Scripted::ok("x"));

        add_to_cart(&session, "x", 10, "Foo").unwrap();
        add_to_cart(&session, "x", 10, "Foo").unwrap();
        let cart = remove_from_cart(&session, "x");
        assert!(cart.items.is_empty());

        let cart = add_to_cart(&session, "x", 10, "Foo").unwrap();
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_remove_unknown_is_noop() {
        let session = session_with(Scripted::ok("x"));
        add_to_cart(&session, "a", 500, "Café").unwrap();

        let cart = remove_from_cart(&session, "zzz");
        assert_eq!(cart.count, 1);
    }

    #[tokio::test]
    async fn test_clear_empties() {
        let session = session_with(Scripted::ok("x"));
        add_to_cart(&session, "a", 500, "Café").unwrap();
        add_to_cart(&session, "b", 700, "Pão").unwrap();

        let cart = clear_cart(&session);
        assert_eq!(cart.count, 0);
        assert_eq!(get_cart(&session), cart);
    }

    #[tokio::test]
    async fn test_invalid_input_is_validation_error() {
        let session = session_with(Scripted::ok("x"));

        let err = add_to_cart(&session, "a", -1, "Café").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_to_cart(&session, "", 100, "Café").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert_eq!(get_cart(&session).count, 0);
    }

    #[tokio::test]
    async fn test_oversized_price_is_rejected_and_cart_stays_usable() {
        let session = session_with(Scripted::ok("x"));

        for _ in 0..2 {
            let err = add_to_cart(&session, "x", 4_611_686_018_427_387_904, "Foo").unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError);
        }

        let cart = add_to_cart(&session, "x", 10, "Foo").unwrap();
        assert_eq!(cart.count, 1);
    }
}
