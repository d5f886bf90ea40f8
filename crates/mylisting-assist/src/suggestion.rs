//! # Search-Suggestion Flow
//!
//! Debounced AI suggestions for the home page search box.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   on_input(text)                                                        │
//! │     seq += 1, abort scheduled task                                      │
//! │     │                                                                   │
//! │     ├── chars <= 3 ──────────────────────────────► Idle                 │
//! │     │                                                                   │
//! │     └── longer ──► Pending{seq} ──sleep(debounce)──► dispatch           │
//! │                                                        │                │
//! │                          seq still latest? ◄───────────┘                │
//! │                           │            │                                │
//! │                          yes           no ──► dropped (debug log)       │
//! │                           │                                             │
//! │                 ┌─────────┴──────────┐                                  │
//! │                 ▼                    ▼                                  │
//! │          Resolved{text}       Failed{reason}  ──retry()──► dispatch     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Timing Example (1000 ms debounce)
//! ```text
//!   t=0     "p"      → Idle
//!   t=200   "pi"     → Idle
//!   t=1300  "pizza"  → Pending
//!   t=2300           → one request, for "pizza"
//! ```
//!
//! State is published on a `watch` channel so views can re-render on change.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mylisting_core::Language;
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::AssistConfig;
use crate::recommend::Recommender;

/// What the suggestion box currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SuggestionState {
    #[default]
    Idle,
    Pending {
        seq: u64,
        query: String,
    },
    Resolved {
        seq: u64,
        query: String,
        text: String,
    },
    Failed {
        seq: u64,
        query: String,
        reason: String,
    },
}

impl SuggestionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SuggestionState::Pending { .. })
    }

    pub fn seq(&self) -> Option<u64> {
        match self {
            SuggestionState::Idle => None,
            SuggestionState::Pending { seq, .. }
            | SuggestionState::Resolved { seq, .. }
            | SuggestionState::Failed { seq, .. } => Some(*seq),
        }
    }
}

/// Debounced, cancellable suggestion requests.
///
/// Must be driven from inside a Tokio runtime. Dropping the flow aborts any
/// scheduled request.
pub struct SuggestionFlow {
    recommender: Recommender,
    debounce: Duration,
    min_query_chars: usize,

    /// Latest issued sequence number.
    latest: Arc<AtomicU64>,
    state_tx: Arc<watch::Sender<SuggestionState>>,
    task: Mutex<Option<JoinHandle<()>>>,

    /// Last input long enough to dispatch, for `retry`.
    last_query: Mutex<Option<String>>,
}

impl SuggestionFlow {
    pub fn new(recommender: Recommender, debounce: Duration, min_query_chars: usize) -> Self {
        let (state_tx, _) = watch::channel(SuggestionState::Idle);

        SuggestionFlow {
            recommender,
            debounce,
            min_query_chars,
            latest: Arc::new(AtomicU64::new(0)),
            state_tx: Arc::new(state_tx),
            task: Mutex::new(None),
            last_query: Mutex::new(None),
        }
    }

    pub fn from_config(recommender: Recommender, config: &AssistConfig) -> Self {
        Self::new(recommender, config.debounce(), config.suggestions.min_query_chars)
    }

    /// Current state snapshot.
    pub fn state(&self) -> SuggestionState {
        self.state_tx.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SuggestionState> {
        self.state_tx.subscribe()
    }

    /// The last input long enough to dispatch, if any.
    pub fn last_query(&self) -> Option<String> {
        lock(&self.last_query).clone()
    }

    /// Handles a change of the search box. Returns the sequence number
    /// issued for this input.
    pub fn on_input(&self, text: &str, language: Language) -> u64 {
        let seq = self.bump();

        if text.chars().count() <= self.min_query_chars {
            debug!(seq, "Query too short, not dispatching");
            self.state_tx.send_replace(SuggestionState::Idle);
            return seq;
        }

        *lock(&self.last_query) = Some(text.to_string());
        self.state_tx.send_replace(SuggestionState::Pending {
            seq,
            query: text.to_string(),
        });
        self.schedule(seq, text.to_string(), language, self.debounce);

        seq
    }

    /// Re-dispatches the last qualifying query immediately. Returns `None`
    /// when there is nothing to retry.
    pub fn retry(&self, language: Language) -> Option<u64> {
        let query = lock(&self.last_query).clone()?;
        let seq = self.bump();

        info!(seq, "Retrying suggestion request");
        self.state_tx.send_replace(SuggestionState::Pending {
            seq,
            query: query.clone(),
        });
        self.schedule(seq, query, language, Duration::ZERO);

        Some(seq)
    }

    /// Cancels any scheduled request and clears the box.
    pub fn reset(&self) {
        self.bump();
        *lock(&self.last_query) = None;
        self.state_tx.send_replace(SuggestionState::Idle);
    }

    /// Issues a new sequence number and cancels the scheduled task.
    fn bump(&self) -> u64 {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(handle) = lock(&self.task).take() {
            handle.abort();
        }
        seq
    }

    fn schedule(&self, seq: u64, query: String, language: Language, delay: Duration) {
        let recommender = self.recommender.clone();
        let latest = Arc::clone(&self.latest);
        let state_tx = Arc::clone(&self.state_tx);

        let handle = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            debug!(seq, query = %query, "Dispatching suggestion request");
            let next = match recommender.smart_recommendations(&query, language).await {
                Ok(text) => SuggestionState::Resolved { seq, query, text },
                Err(e) => {
                    warn!(seq, error = %e, "Suggestion request failed");
                    SuggestionState::Failed {
                        seq,
                        query,
                        reason: e.to_string(),
                    }
                }
            };

            let applied = state_tx.send_if_modified(|state| {
                if latest.load(Ordering::SeqCst) != seq {
                    return false;
                }
                *state = next;
                true
            });

            if !applied {
                debug!(seq, "Dropping stale suggestion response");
            }
        });

        *lock(&self.task) = Some(handle);
    }
}

impl Drop for SuggestionFlow {
    fn drop(&mut self) {
        if let Some(handle) = lock(&self.task).take() {
            handle.abort();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
