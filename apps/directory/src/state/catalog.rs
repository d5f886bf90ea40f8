//! # Catalog State
//!
//! The listings the explore and detail views read. Replaced wholesale when
//! the host pushes a `data-update` with a `listings` field.

use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use mylisting_core::{Catalog, Listing};
use tracing::info;

use crate::error::ApiError;

#[derive(Debug, Default)]
pub struct CatalogState {
    catalog: RwLock<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: RwLock::new(catalog),
        }
    }

    /// Loads a JSON array of listings.
    pub fn from_file(path: &Path) -> Result<Self, ApiError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ApiError::config(format!("Cannot read catalog {}: {}", path.display(), e))
        })?;
        let catalog = Catalog::from_json(&json).map_err(|e| {
            ApiError::config(format!("Invalid catalog {}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), listings = catalog.len(), "Catalog loaded");
        Ok(Self::new(catalog))
    }

    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        f(&self.read())
    }

    pub fn replace(&self, listings: Vec<Listing>) {
        let count = listings.len();
        self.write().replace(listings);
        info!(listings = count, "Catalog replaced");
    }

    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
