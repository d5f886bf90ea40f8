//! # Cart Accumulator
//!
//! The shopping cart shared by every page of the directory.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Operations                                 │
//! │                                                                         │
//! │  add_to_cart(item)                                                      │
//! │    ├── validate id, name, price, quantity                               │
//! │    ├── id present?  ──yes──► existing.quantity + 1                      │
//! │    │                         (incoming quantity and price ignored)      │
//! │    └── no ─────────────────► push to the end                            │
//! │                                                                         │
//! │  remove_from_cart(id) ───────► retain(id != ..)   absent id: no-op      │
//! │  clear_cart() ───────────────► items.clear()                            │
//! │                                                                         │
//! │  cart_count() ───────────────► Σ quantity   (never stored)              │
//! │  subtotal() ─────────────────► Σ unit_price × quantity                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per id
//! - Insertion order of new lines is preserved
//! - Every quantity is in `1..=999`
//! - At most 100 distinct lines

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{
    validate_cart_size, validate_item_id, validate_item_name, validate_price, validate_quantity,
};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY, MAX_UNIT_PRICE};

/// One purchasable unit and its accumulated quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
}

impl CartItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Money, quantity: i64) -> Self {
        CartItem {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    fn validate(&self) -> CoreResult<()> {
        validate_item_id(&self.id)?;
        validate_item_name(&self.name)?;
        validate_price(self.unit_price)?;
        validate_quantity(self.quantity)?;
        Ok(())
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,

    /// When the cart was created or last cleared.
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds an item, or bumps the quantity of the line with the same id by one.
    ///
    /// ## Errors
    /// - `CoreError::Validation` for a malformed item
    /// - `CoreError::QuantityTooLarge` when the merge would pass 999
    /// - `CoreError::CartTooLarge` for a 101st distinct id
    pub fn add_to_cart(&mut self, item: CartItem) -> CoreResult<()> {
        item.validate()?;

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            let requested = existing.quantity + 1;
            if requested > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            existing.quantity = requested;
            return Ok(());
        }

        if validate_cart_size(self.items.len()).is_err() {
            return Err(CoreError::CartTooLarge { max: MAX_CART_ITEMS });
        }

        self.items.push(item);
        Ok(())
    }

    /// Removes the line with `id`. Returns whether anything was removed.
    pub fn remove_from_cart(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Total quantity over all lines.
    pub fn cart_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    #[inline]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
