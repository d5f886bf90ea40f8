//! # Explore Commands
//!
//! Filtered listing search and the listing detail page.

use mylisting_core::{Listing, ListingFilter};
use serde_json::json;
use tracing::debug;

use crate::error::ApiError;
use crate::state::Session;

/// Listings matching `filter`, featured first.
pub fn explore(session: &Session, mut filter: ListingFilter) -> Vec<Listing> {
    filter.featured_first = true;
    debug!(?filter, "explore command");

    session
        .catalog
        .with_catalog(|catalog| catalog.apply(&filter).into_iter().cloned().collect())
}

/// One listing by id. Viewing is reported to the host as analytics.
pub fn show_listing(session: &Session, id: &str) -> Result<Listing, ApiError> {
    debug!(id, "show_listing command");

    let listing = session
        .catalog
        .with_catalog(|catalog| catalog.find(id).cloned())?;

    session
        .bridge
        .track_analytics("view_listing", json!({ "listingId": listing.id }));

    Ok(listing)
}
