//! # Search Commands
//!
//! The home page search box. Typing feeds the debounced suggestion flow;
//! the suggestion itself arrives later on the flow's watch channel.

use mylisting_assist::SuggestionState;
use tracing::debug;

use crate::error::ApiError;
use crate::state::Session;

/// Feeds the current search-box contents to the suggestion flow and
/// returns the state right after (`Idle` or `Pending`).
pub fn type_input(session: &Session, text: &str) -> SuggestionState {
    let seq = session.suggestions.on_input(text, session.language.language());
    debug!(seq, chars = text.chars().count(), "type_input command");
    session.suggestions.state()
}

/// Requests the last suggestion again, skipping the debounce.
pub fn retry(session: &Session) -> Result<u64, ApiError> {
    debug!("retry command");
    session
        .suggestions
        .retry(session.language.language())
        .ok_or_else(|| ApiError::validation("Nothing to retry: type a longer search first"))
}

pub fn suggestion_state(session: &Session) -> SuggestionState {
    session.suggestions.state()
}
