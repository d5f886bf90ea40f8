//! # Host Event Bridge
//!
//! Named actions flowing between the directory and the page that embeds it.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Directory ──publish("createBooking", {...})──┐                         │
//! │                                               ▼                         │
//! │                                  ┌─────────────────────────┐            │
//! │                                  │      EventBridge        │            │
//! │                                  │  handlers, in order     │            │
//! │                                  └────────────┬────────────┘            │
//! │                                               ▼                         │
//! │  Host page ◄──────────── handler(&HostEvent) (synchronous)              │
//! │                                                                         │
//! │  Host page ──publish("data-update", {listings, member, config})──►      │
//! │                  subscribe_data_updates(handler) ──► HostDataUpdate     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers are called outside the registry lock, so a handler may publish
//! or subscribe without deadlocking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use mylisting_core::Listing;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::{AssistError, AssistResult};

pub const DATA_UPDATE: &str = "data-update";
pub const CREATE_BOOKING: &str = "createBooking";
pub const TRACK_ANALYTICS: &str = "trackAnalytics";

/// A named action with a JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostEvent {
    pub action: String,
    pub payload: Value,
}

/// Partial host state pushed with a `data-update` action. Absent fields
/// mean "unchanged".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostDataUpdate {
    #[serde(default)]
    pub listings: Option<Vec<Listing>>,
    #[serde(default)]
    pub member: Option<Value>,
    #[serde(default)]
    pub config: Option<Value>,
}

impl HostDataUpdate {
    pub fn from_payload(payload: &Value) -> AssistResult<Self> {
        if payload.is_null() {
            return Err(AssistError::InvalidPayload("empty data-update payload".into()));
        }
        Ok(serde_json::from_value(payload.clone())?)
    }
}

/// Answer to a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingAck {
    pub success: bool,
}

type Handler = Arc<dyn Fn(&HostEvent) + Send + Sync>;
type Registry = Mutex<Vec<(u64, Handler)>>;

/// Synchronous publish/subscribe hub for host actions.
#[derive(Clone, Default)]
pub struct EventBridge {
    handlers: Arc<Registry>,
    next_id: Arc<AtomicU64>,
}

impl EventBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `action` to every handler in registration order.
    pub fn publish(&self, action: &str, payload: Value) {
        info!(action, %payload, "Host action dispatched");

        let event = HostEvent {
            action: action.to_string(),
            payload,
        };

        let handlers: Vec<Handler> = lock(&self.handlers)
            .iter()
            .map(|(_, h)| Arc::clone(h))
            .collect();

        for handler in handlers {
            handler(&event);
        }
    }

    /// Registers a handler for every action. Dropping the returned
    /// subscription removes it.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&HostEvent) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.handlers).push((id, Arc::new(handler)));
        debug!(id, "Bridge handler registered");

        Subscription {
            id,
            registry: Arc::downgrade(&self.handlers),
        }
    }

    /// Registers a handler for `data-update` actions only. Payloads that do
    /// not parse are logged and skipped.
    pub fn subscribe_data_updates<F>(&self, handler: F) -> Subscription
    where
        F: Fn(HostDataUpdate) + Send + Sync + 'static,
    {
        self.subscribe(move |event| {
            if event.action != DATA_UPDATE {
                return;
            }
            match HostDataUpdate::from_payload(&event.payload) {
                Ok(update) => handler(update),
                Err(e) => warn!(error = %e, "Skipping malformed data-update"),
            }
        })
    }

    /// Asks the host to create a booking. The payload is `listingId` merged
    /// with the fields of `details`.
    pub fn create_booking(&self, listing_id: &str, details: Value) -> BookingAck {
        let mut payload = Map::new();
        payload.insert("listingId".to_string(), Value::String(listing_id.to_string()));

        match details {
            Value::Object(fields) => payload.extend(fields),
            Value::Null => {}
            other => {
                payload.insert("details".to_string(), other);
            }
        }

        self.publish(CREATE_BOOKING, Value::Object(payload));
        BookingAck { success: true }
    }

    pub fn track_analytics(&self, event_name: &str, params: Value) {
        self.publish(
            TRACK_ANALYTICS,
            serde_json::json!({ "eventName": event_name, "params": params }),
        );
    }

    pub fn handler_count(&self) -> usize {
        lock(&self.handlers).len()
    }
}

/// Keeps a handler registered while alive.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Registry>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).retain(|(id, _)| *id != self.id);
            debug!(id = self.id, "Bridge handler removed");
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
