//! # State Module
//!
//! Session state for the directory app. One focused wrapper per store,
//! owned together by [`Session`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │LanguageState │  │  CartState   │  │ CatalogState │  │WizardState │  │
//! │  │              │  │              │  │              │  │            │  │
//! │  │  watch::     │  │  Arc<Mutex<  │  │  RwLock<     │  │  Mutex<    │  │
//! │  │   Sender     │  │    Cart>>    │  │   Catalog>   │  │   Wizard>  │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • LanguageState: watch channel, readers never block the writer        │
//! │  • CartState / WizardState: Mutex, exclusive access                    │
//! │  • CatalogState: RwLock, replaced by host data-updates                 │
//! │  • AppConfig: read-only after startup                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod language;
mod session;
mod wizard;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::AppConfig;
pub use language::LanguageState;
pub use session::Session;
pub use wizard::WizardState;
