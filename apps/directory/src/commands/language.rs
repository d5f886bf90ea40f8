//! # Language Commands

use mylisting_assist::SuggestionState;
use mylisting_core::{Language, TextKey};
use tracing::debug;

use crate::error::ApiError;
use crate::state::Session;

/// Switches the UI language. A suggestion already on screen (or on its way)
/// is requested again in the new language.
pub fn set_language(session: &Session, language: Language) -> Language {
    debug!(%language, "set_language command");
    session.language.set_language(language);

    if session.suggestions.state() != SuggestionState::Idle {
        if let Some(query) = session.suggestions.last_query() {
            session.suggestions.on_input(&query, language);
        }
    }

    language
}

/// Looks up a text key by its camelCase name (`cartEmpty`, `aiTitle`, ...).
pub fn translate_key(session: &Session, key: &str) -> Result<&'static str, ApiError> {
    let key: TextKey = key
        .trim()
        .parse()
        .map_err(|_| ApiError::validation(format!("unknown text key '{}'", key.trim())))?;
    Ok(session.language.translate(key))
}
