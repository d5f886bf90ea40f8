//! # Commands Module
//!
//! Every action the shell can perform. Commands borrow the [`Session`]
//! stores they need and return DTOs or an [`ApiError`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── language.rs  ◄─── Language switch, text lookup
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── search.rs    ◄─── Search box input, suggestion retry
//! ├── explore.rs   ◄─── Listing filters and detail
//! ├── wizard.rs    ◄─── Add-listing wizard, AI description
//! └── bridge.rs    ◄─── Booking and host data-updates
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin line                                                             │
//! │  ──────────                                                             │
//! │  add 42 1990 Pastel de Nata                                             │
//! │         │                                                               │
//! │         │ (clap parse, shell.rs)                                        │
//! │         ▼                                                               │
//! │  fn add_to_cart(                                                        │
//! │      session: &Session,      ◄── Borrowed, never global                 │
//! │      id: &str,                                                          │
//! │      price_cents: i64,                                                  │
//! │      name: &str,                                                        │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (view.rs)                                                     │
//! │         ▼                                                               │
//! │  stdout: rendered cart, or "error [CART_ERROR] ..."                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Session`]: crate::state::Session
//! [`ApiError`]: crate::error::ApiError

pub mod bridge;
pub mod cart;
pub mod explore;
pub mod language;
pub mod search;
pub mod wizard;
