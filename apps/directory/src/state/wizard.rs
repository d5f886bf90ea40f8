//! # Wizard State
//!
//! The in-progress "add listing" wizard. A successful submit starts a
//! fresh wizard.

use std::sync::{Mutex, MutexGuard};

use mylisting_core::ListingWizard;

#[derive(Debug, Default)]
pub struct WizardState {
    wizard: Mutex<ListingWizard>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wizard<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ListingWizard) -> R,
    {
        f(&self.lock())
    }

    pub fn with_wizard_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ListingWizard) -> R,
    {
        f(&mut self.lock())
    }

    pub fn reset(&self) {
        *self.lock() = ListingWizard::new();
    }

    fn lock(&self) -> MutexGuard<'_, ListingWizard> {
        self.wizard.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
