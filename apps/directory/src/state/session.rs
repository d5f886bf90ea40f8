//! # Session
//!
//! Owns every store for one run of the directory. Commands and views borrow
//! it; nothing lives in globals.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Session                                       │
//! │                                                                         │
//! │  ┌───────────────┐ ┌───────────────┐ ┌────────────────────────────┐    │
//! │  │ LanguageState │ │  CartState    │ │ Arc<CatalogState>          │◄─┐ │
//! │  │ watch<Lang>   │ │ Arc<Mutex<..>>│ │ RwLock<Catalog>            │  │ │
//! │  └───────────────┘ └───────────────┘ └────────────────────────────┘  │ │
//! │  ┌───────────────┐ ┌───────────────┐ ┌────────────────────────────┐  │ │
//! │  │ WizardState   │ │SuggestionFlow │ │ EventBridge                │  │ │
//! │  │ Mutex<Wizard> │ │ + Recommender │ │  data-update subscription ─┼──┘ │
//! │  └───────────────┘ └───────────────┘ └────────────────────────────┘    │
//! │                                                                         │
//! │  start() ──► shell loop ──► shutdown()                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use mylisting_assist::{AssistConfig, EventBridge, Recommender, Subscription, SuggestionFlow, TextGenerator};
use tracing::{debug, info};

use super::{AppConfig, CartState, CatalogState, LanguageState, WizardState};
use crate::error::ApiError;

pub struct Session {
    pub language: LanguageState,
    pub cart: CartState,
    pub catalog: Arc<CatalogState>,
    pub wizard: WizardState,
    pub recommender: Recommender,
    pub suggestions: SuggestionFlow,
    pub bridge: EventBridge,
    data_updates: Option<Subscription>,
}

impl Session {
    /// Builds every store and wires the host bridge. Must run inside a
    /// Tokio runtime.
    pub fn start(
        app: &AppConfig,
        assist: &AssistConfig,
        generator: Arc<dyn TextGenerator>,
    ) -> Result<Self, ApiError> {
        let catalog = match &app.listings_path {
            Some(path) => CatalogState::from_file(path)?,
            None => CatalogState::default(),
        };
        let catalog = Arc::new(catalog);

        let recommender = Recommender::from_config(generator, assist);
        let suggestions = SuggestionFlow::from_config(recommender.clone(), assist);

        let bridge = EventBridge::new();
        let data_updates = {
            let catalog = Arc::clone(&catalog);
            bridge.subscribe_data_updates(move |update| {
                if let Some(listings) = update.listings {
                    catalog.replace(listings);
                }
                if update.member.is_some() || update.config.is_some() {
                    debug!(
                        member = update.member.is_some(),
                        config = update.config.is_some(),
                        "Host state received"
                    );
                }
            })
        };

        info!(
            language = %app.language,
            listings = catalog.with_catalog(|c| c.len()),
            model = %recommender.model(),
            "Session started"
        );

        Ok(Session {
            language: LanguageState::new(app.language),
            cart: CartState::new(),
            catalog,
            wizard: WizardState::new(),
            recommender,
            suggestions,
            bridge,
            data_updates: Some(data_updates),
        })
    }

    /// Detaches from the host and cancels any pending suggestion.
    pub fn shutdown(mut self) {
        if let Some(subscription) = self.data_updates.take() {
            subscription.unsubscribe();
        }
        self.suggestions.reset();

        let (cart_lines, cart_units) = self.cart.totals();
        info!(cart_lines, cart_units, "Session closed");
    }
}
