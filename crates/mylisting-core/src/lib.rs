//! # mylisting-core: Pure Domain Logic for the MyListing Directory
//!
//! This crate holds everything the directory does that does not touch the
//! outside world: the translation table, the cart accumulator, money math,
//! listing types, catalog filtering, the Add Listing wizard and the prompt
//! text sent to the text-generation service.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     MyListing Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/directory (Session + shell)               │   │
//! │  │   header ──► search ──► explore ──► listing ──► wizard          │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────┐  ┌────────────▼─────────────────┐     │
//! │  │  ★ mylisting-core ★          │  │  mylisting-assist            │     │
//! │  │                             │◄─┤  suggestions, Gemini, bridge │     │
//! │  │  i18n   cart   catalog      │  └──────────────────────────────┘     │
//! │  │  money  wizard prompt       │                                        │
//! │  │                             │                                        │
//! │  │  NO I/O • NO NETWORK        │                                        │
//! │  └─────────────────────────────┘                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`i18n`] - `Language`, `TextKey` and the translation table
//! - [`cart`] - Cart accumulator with merge-on-add
//! - [`money`] - Integer money with locale-aware display
//! - [`types`] - Listing, Review, User
//! - [`catalog`] - Explore filtering
//! - [`wizard`] - Add Listing wizard
//! - [`prompt`] - Prompt text for the text-generation service
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use mylisting_core::cart::{Cart, CartItem};
//! use mylisting_core::money::Money;
//!
//! let mut cart = Cart::new();
//! let item = CartItem::new("x", "Foo", Money::from_cents(1000), 1);
//!
//! cart.add_to_cart(item.clone()).unwrap();
//! cart.add_to_cart(item).unwrap();
//!
//! assert_eq!(cart.items().len(), 1);
//! assert_eq!(cart.cart_count(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod money;
pub mod prompt;
pub mod types;
pub mod validation;
pub mod wizard;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, ListingFilter};
pub use error::{CoreError, CoreResult, ValidationError};
pub use i18n::{translate, Language, TextKey};
pub use money::Money;
pub use types::*;
pub use wizard::{ListingWizard, PlanTier, SubmittedListing, WizardStep};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct line items allowed in a cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line item.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum unit price in cents (R$ 100 bilhões). A full cart of
/// `MAX_CART_ITEMS` lines at `MAX_ITEM_QUANTITY` each stays inside `i64`.
pub const MAX_UNIT_PRICE: i64 = 10_000_000_000_000;

/// Inputs must be longer than this many characters before a suggestion
/// request is dispatched.
pub const MIN_SUGGESTION_QUERY_CHARS: usize = 3;
