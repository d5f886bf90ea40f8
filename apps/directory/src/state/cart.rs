//! # Cart State
//!
//! Session cart shared by the cart commands and the header badge.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Shell Line               Command                 Cart State Change     │
//! │  ──────────               ───────                 ─────────────────     │
//! │                                                                         │
//! │  add x 1000 Foo ─────────► add_to_cart() ───────► push or qty + 1      │
//! │                                                                         │
//! │  remove x ───────────────► remove_from_cart() ──► items.retain(..)     │
//! │                                                                         │
//! │  clear ──────────────────► clear_cart() ────────► items.clear()        │
//! │                                                                         │
//! │  cart / header ──────────► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! │        Read operations also acquire the lock but release it quickly.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use mylisting_core::Cart;

/// Thread-safe wrapper around the session cart.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = cart_state.with_cart(|cart| cart.cart_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_to_cart(item))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.lock();
        f(&mut cart)
    }

    /// Distinct lines and total units, read under one lock.
    pub fn totals(&self) -> (usize, i64) {
        self.with_cart(|cart| (cart.items().len(), cart.cart_count()))
    }

    /// A panicked writer leaves the cart in a consistent state (every
    /// mutation is a single push, retain or field update), so the poison
    /// flag is cleared rather than propagated.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
