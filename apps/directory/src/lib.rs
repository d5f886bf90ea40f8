//! # MyListing Directory App
//!
//! The directory's application layer: session state, commands, views and
//! the interactive shell that drives them.
//!
//! ## Module Organization
//! ```text
//! mylisting_directory/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Session owning every store
//! │   ├── language.rs ◄─── Active language + watch channel
//! │   ├── cart.rs     ◄─── Cart state management
//! │   ├── catalog.rs  ◄─── Listings (file or host data-update)
//! │   ├── wizard.rs   ◄─── Add-listing wizard state
//! │   └── config.rs   ◄─── AppConfig (env + flags)
//! ├── commands/       ◄─── One file per page / feature
//! ├── view.rs         ◄─── Text rendering
//! ├── shell.rs        ◄─── Line-oriented command loop
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_support;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use mylisting_assist::{AssistConfig, GeminiClient};
use mylisting_core::Language;
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use shell::Shell;
use state::{AppConfig, Session};

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(name = "mylisting", version, about = "MyListing directory shell")]
pub struct Cli {
    /// Path to assist.toml (text-generation settings)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial language: pt-BR or en-US
    #[arg(long)]
    pub lang: Option<Language>,

    /// JSON file with the listings to browse
    #[arg(long)]
    pub listings: Option<PathBuf>,
}

/// Runs the directory shell on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, to stderr                     │
/// │     • Default: warn, info for mylisting crates; RUST_LOG overrides      │
/// │                                                                         │
/// │  2. Resolve Configuration ────────────────────────────────────────────► │
/// │     • AppConfig: MYLISTING_LANG / MYLISTING_LISTINGS, then flags        │
/// │     • AssistConfig: assist.toml, then MYLISTING_* / GEMINI_API_KEY      │
/// │                                                                         │
/// │  3. Start Session ────────────────────────────────────────────────────► │
/// │     • Catalog from --listings (or empty)                                │
/// │     • GeminiClient → Recommender → SuggestionFlow                       │
/// │     • Host bridge data-update subscription                              │
/// │                                                                         │
/// │  4. Shell loop until EOF / quit, then Session::shutdown                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting MyListing directory");

    let app = AppConfig::from_env(|key| std::env::var(key).ok())?.with_overrides(
        cli.lang,
        cli.listings,
        cli.config,
    );

    let assist = match &app.assist_config_path {
        Some(path) => AssistConfig::load(Some(path.clone()))?,
        None => AssistConfig::load_or_default(None),
    };
    if !assist.has_api_key() {
        warn!("No API key configured; AI features will show a setup hint");
    }

    let generator = Arc::new(GeminiClient::new(&assist.gemini));
    let session = Session::start(&app, &assist, generator)?;

    Shell::new(&session)
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    session.shutdown();
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=mylisting_assist=trace` - Trace the AI flow only
/// - Default: WARN, INFO for mylisting crates
///
/// Logs go to stderr so the shell's stdout stays readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,mylisting=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "mylisting",
            "--lang",
            "en",
            "--listings",
            "/tmp/listings.json",
        ])
        .unwrap();

        assert_eq!(cli.lang, Some(Language::EnUs));
        assert_eq!(cli.listings, Some(PathBuf::from("/tmp/listings.json")));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_rejects_unknown_language() {
        assert!(Cli::try_parse_from(["mylisting", "--lang", "xx"]).is_err());
    }
}
