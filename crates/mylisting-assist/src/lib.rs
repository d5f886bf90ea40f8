//! # mylisting-assist: AI Suggestions and Host Bridge
//!
//! Everything the directory does that leaves the process: calls to a
//! hosted language model, the debounced search-suggestion flow built on
//! top of it, and the event bridge to the embedding page.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Assist Architecture                               │
//! │                                                                         │
//! │  search box keystrokes                                                 │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────────────┐  │
//! │  │ SuggestionFlow │──►│  Recommender   │──►│ dyn TextGenerator      │  │
//! │  │ debounce, seq  │   │ prompt, timeout│   │ GeminiClient (reqwest) │  │
//! │  └───────┬────────┘   └────────────────┘   └────────────────────────┘  │
//! │          │ watch::Receiver<SuggestionState>                             │
//! │          ▼                                                              │
//! │      header view                                                        │
//! │                                                                         │
//! │  ┌────────────────┐                                                    │
//! │  │  EventBridge   │  createBooking / trackAnalytics / data-update     │
//! │  └────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`config`] - `AssistConfig` (TOML + environment)
//! - [`error`] - Assist error types
//! - [`generator`] - `TextGenerator` trait and `GeminiClient`
//! - [`recommend`] - Prompts, timeout, missing-key fallback
//! - [`suggestion`] - Debounced suggestion state machine
//! - [`bridge`] - Host event bridge
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use mylisting_assist::{AssistConfig, GeminiClient, Recommender, SuggestionFlow};
//!
//! let config = AssistConfig::load_or_default(None);
//! let generator = Arc::new(GeminiClient::new(&config.gemini));
//! let recommender = Recommender::from_config(generator, &config);
//! let flow = SuggestionFlow::from_config(recommender, &config);
//!
//! flow.on_input("pizza near me", Language::EnUs);
//! let mut rx = flow.subscribe();
//! rx.changed().await?;
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod generator;
pub mod recommend;
pub mod suggestion;

pub use bridge::{BookingAck, EventBridge, HostDataUpdate, HostEvent, Subscription};
pub use config::AssistConfig;
pub use error::{AssistError, AssistResult};
pub use generator::{GeminiClient, TextGenerator};
pub use recommend::Recommender;
pub use suggestion::{SuggestionFlow, SuggestionState};
