//! # Language State
//!
//! Holds the active UI language and tells every view when it changes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  lang en ──► set_language(EnUs) ──► watch::Sender::send_replace         │
//! │                                            │                            │
//! │                     ┌──────────────────────┼──────────────────────┐     │
//! │                     ▼                      ▼                      ▼     │
//! │               header view            suggestion box          footer     │
//! │            (Receiver::changed)                                          │
//! │                                                                         │
//! │  translate(key) reads the sender's current value, no lock held.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mylisting_core::{translate, Language, TextKey};
use tokio::sync::watch;
use tracing::info;

pub struct LanguageState {
    tx: watch::Sender<Language>,
}

impl LanguageState {
    pub fn new(initial: Language) -> Self {
        let (tx, _rx) = watch::channel(initial);
        LanguageState { tx }
    }

    pub fn language(&self) -> Language {
        *self.tx.borrow()
    }

    /// Switches the language. Subscribers are notified even when the value
    /// does not change, so a view can force a re-render.
    pub fn set_language(&self, language: Language) {
        let previous = self.tx.send_replace(language);
        info!(from = %previous, to = %language, "Language changed");
    }

    pub fn translate(&self, key: TextKey) -> &'static str {
        translate(self.language(), key)
    }

    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.tx.subscribe()
    }
}

impl Default for LanguageState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_follows_current_language() {
        let state = LanguageState::new(Language::PtBr);
        assert_eq!(state.translate(TextKey::Cart), translate(Language::PtBr, TextKey::Cart));

        state.set_language(Language::EnUs);
        assert_eq!(state.language(), Language::EnUs);
        assert_eq!(state.translate(TextKey::Cart), translate(Language::EnUs, TextKey::Cart));

        state.set_language(Language::PtBr);
        assert_eq!(state.language(), Language::PtBr);
    }

    #[tokio::test]
    async fn test_subscribers_are_notified() {
        let state = LanguageState::new(Language::PtBr);
        let mut rx = state.subscribe();

        state.set_language(Language::EnUs);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), Language::EnUs);

        // Same value still notifies.
        state.set_language(Language::EnUs);
        assert!(rx.has_changed().unwrap());
    }
}
