//! # Host Bridge Commands
//!
//! Booking requests going out to the embedding page, and `data-update`
//! pushes coming in from it.

use mylisting_assist::bridge::DATA_UPDATE;
use chrono::NaiveDate;
use mylisting_assist::BookingAck;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::ApiError;
use crate::state::Session;

/// Requests a booking for a listing in the catalog on `date` (`YYYY-MM-DD`).
pub fn book(session: &Session, listing_id: &str, date: &str) -> Result<BookingAck, ApiError> {
    debug!(listing_id, date, "book command");

    session
        .catalog
        .with_catalog(|catalog| catalog.find(listing_id).map(|_| ()))?;

    let date = parse_booking_date(date)?;

    let mut details = Map::new();
    details.insert("date".to_string(), json!(date.format("%Y-%m-%d").to_string()));

    Ok(session.bridge.create_booking(listing_id, Value::Object(details)))
}

fn parse_booking_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        ApiError::validation(format!("Invalid booking date '{}', expected YYYY-MM-DD", raw.trim()))
    })
}

/// Publishes a `data-update` as the host page would. `raw` is the JSON
/// payload, e.g. `{"listings": [...]}`.
pub fn host_update(session: &Session, raw: &str) -> Result<(), ApiError> {
    let payload: Value = serde_json::from_str(raw)
        .map_err(|e| ApiError::validation(format!("Invalid JSON payload: {}", e)))?;
    if !payload.is_object() {
        return Err(ApiError::validation("data-update payload must be a JSON object"));
    }

    debug!("host_update command");
    session.bridge.publish(DATA_UPDATE, payload);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::test_support::{listing_json, session_with, Scripted};
    use mylisting_assist::HostEvent;
    use std::sync::{Arc, Mutex};

    fn record(session: &Session) -> (Arc<Mutex<Vec<HostEvent>>>, mylisting_assist::Subscription) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let sub = session.bridge.subscribe(move |e| sink.lock().unwrap().push(e.clone()));
        (seen, sub)
    }

    #[tokio::test]
    async fn test_book_publishes_create_booking() {
        let session = session_with(Scripted::ok("x"));
        let (seen, _sub) = record(&session);

        let ack = book(&session, "1", "2025-03-01").unwrap();
        assert!(ack.success);

        let events = seen.lock().unwrap();
        assert_eq!(events[0].action, "createBooking");
        assert_eq!(events[0].payload, json!({ "listingId": "1", "date": "2025-03-01" }));
    }

    #[tokio::test]
    async fn test_book_unknown_listing() {
        let session = session_with(Scripted::ok("x"));
        let (seen, _sub) = record(&session);

        let err = book(&session, "404", "2025-03-01").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_book_rejects_malformed_dates() {
        let session = session_with(Scripted::ok("x"));
        let (seen, _sub) = record(&session);

        for date in ["", "tomorrow", "2025-02-30", "01/03/2025"] {
            let err = book(&session, "1", date).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError, "{:?}", date);
        }
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_host_update_replaces_catalog() {
        let session = session_with(Scripted::ok("x"));

        let payload = json!({ "listings": [listing_json("9", "Feira Livre", "Event")] });
        host_update(&session, &payload.to_string()).unwrap();

        assert_eq!(session.catalog.with_catalog(|c| c.len()), 1);
        assert!(session.catalog.with_catalog(|c| c.find("9").is_ok()));
    }

    #[tokio::test]
    async fn test_host_update_rejects_bad_json() {
        let session = session_with(Scripted::ok("x"));

        assert!(host_update(&session, "{ nope").is_err());
        assert!(host_update(&session, "[1, 2]").is_err());
        assert_eq!(session.catalog.with_catalog(|c| c.len()), 3);
    }
}
