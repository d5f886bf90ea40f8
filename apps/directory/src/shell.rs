//! # Interactive Shell
//!
//! Reads one command per line and prints the affected view. Suggestion and
//! language changes are watched concurrently, so a suggestion that resolves
//! while the user is idle is printed as soon as it arrives.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Shell Loop                                      │
//! │                                                                         │
//! │   loop {                                                                │
//! │     select! {                                                           │
//! │       line = stdin.next_line()      ──► clap parse ──► execute()       │
//! │       suggestions.changed()         ──► print box (Resolved / Failed)  │
//! │       language.changed()            ──► print header                   │
//! │       describing (if any)           ──► print wizard with description  │
//! │     }                                                                   │
//! │   }                                                                     │
//! │                                                                         │
//! │   `describe` only starts the request; the loop keeps reading input      │
//! │   until it finishes. EOF or `quit` ──► return                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::future::Future;
use std::pin::Pin;

use clap::{Parser, Subcommand};
use mylisting_assist::SuggestionState;
use mylisting_core::{Language, ListingFilter, ListingType, TextKey};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::commands;
use crate::error::ApiError;
use crate::state::Session;
use crate::view;

/// One shell line. The first word is the command name.
#[derive(Debug, Parser)]
#[command(multicall = true)]
struct Line {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Switch language (pt-BR, en-US)
    Lang { language: Language },

    /// Print the translation of a text key, e.g. `t cartEmpty`
    T { key: String },

    /// Print the navigation header
    Header,

    /// Print the footer
    Footer,

    /// Type into the search box; suggestions follow after a short pause
    #[command(name = "type")]
    TypeInput {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Request the last suggestion again
    Retry,

    /// Show the cart
    Cart,

    /// Add one unit of an item: add <id> <price-cents> <name…>
    Add {
        id: String,
        #[arg(allow_negative_numbers = true)]
        price_cents: i64,
        #[arg(required = true, trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Remove an item from the cart
    Remove { id: String },

    /// Empty the cart
    Clear,

    /// List listings: explore [--type T] [--open] [--featured] [query…]
    Explore {
        #[arg(long = "type")]
        listing_type: Option<ListingType>,
        #[arg(long)]
        open: bool,
        #[arg(long)]
        featured: bool,
        query: Vec<String>,
    },

    /// Show one listing
    Show { id: String },

    /// Add-listing wizard
    Wizard {
        #[command(subcommand)]
        action: Option<WizardAction>,
    },

    /// Generate a description for the listing in the wizard
    Describe,

    /// Request a booking: book <listing-id> --date YYYY-MM-DD
    Book {
        listing_id: String,
        #[arg(long)]
        date: String,
    },

    /// Push a data-update from the host page: host <json>
    Host {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        json: Vec<String>,
    },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Subcommand)]
enum WizardAction {
    /// Choose the listing type
    Type {
        #[arg(required = true, trailing_var_arg = true)]
        name: Vec<String>,
    },
    /// Set the title
    Title {
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Set the description by hand
    Desc {
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Set the location: location <address…> --city <city…>
    Location {
        address: Vec<String>,
        #[arg(long, required = true, num_args = 1..)]
        city: Vec<String>,
    },
    /// Choose free or gold
    Plan { plan: String },
    /// Validate this step and continue
    Next,
    /// Go back one step
    Back,
    /// Finish on the plan step
    Submit,
}

/// What the loop does after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    /// Start generating a wizard description in the background.
    Describe,
    Quit,
}

pub struct Shell<'a> {
    session: &'a Session,
}

impl<'a> Shell<'a> {
    pub fn new(session: &'a Session) -> Self {
        Shell { session }
    }

    /// Runs until EOF or `quit`.
    pub async fn run<R, W>(&self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut suggestions = self.session.suggestions.subscribe();
        let mut language = self.session.language.subscribe();
        let mut describing: Option<Pin<Box<dyn Future<Output = String> + '_>>> = None;

        let greeting = format!(
            "{}\n{}\n",
            self.header(),
            self.session.language.translate(TextKey::HeroTag)
        );
        output.write_all(greeting.as_bytes()).await?;
        output.flush().await?;

        loop {
            let text = tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("Input closed");
                        break;
                    };
                    match self.execute(&line) {
                        Outcome::Print(text) => text,
                        Outcome::Describe => {
                            if describing.is_none() {
                                describing = Some(Box::pin(self.describe()));
                            }
                            self.session.language.translate(TextKey::AiLoading).to_string()
                        }
                        Outcome::Quit => break,
                    }
                }
                Some(text) = async {
                    match describing.as_mut() {
                        Some(pending) => Some(pending.await),
                        None => None,
                    }
                }, if describing.is_some() => {
                    describing = None;
                    text
                }
                Ok(()) = suggestions.changed() => {
                    let state = suggestions.borrow_and_update().clone();
                    match state {
                        SuggestionState::Resolved { .. } | SuggestionState::Failed { .. } => {
                            view::suggestion(&state, self.session.language.language()).unwrap_or_default()
                        }
                        _ => String::new(),
                    }
                }
                Ok(()) = language.changed() => {
                    let _ = language.borrow_and_update();
                    self.header()
                }
            };

            if !text.is_empty() {
                output.write_all(text.as_bytes()).await?;
                output.write_all(b"\n").await?;
                output.flush().await?;
            }
        }

        info!("Shell finished");
        Ok(())
    }

    /// Parses and runs one line.
    pub fn execute(&self, line: &str) -> Outcome {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Outcome::Print(String::new());
        }

        let parsed = match Line::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => return Outcome::Print(e.render().to_string().trim_end().to_string()),
        };

        match self.dispatch(parsed.command) {
            Ok(outcome) => outcome,
            Err(e) => Outcome::Print(format!("error {}", e)),
        }
    }

    /// Generates the wizard description and renders the result.
    pub async fn describe(&self) -> String {
        match commands::wizard::describe(self.session).await {
            Ok(described) => view::wizard(&described, self.session.language.language()),
            Err(e) => format!("error {}", e),
        }
    }

    fn dispatch(&self, command: ShellCommand) -> Result<Outcome, ApiError> {
        let session = self.session;
        let lang = || session.language.language();

        let text = match command {
            ShellCommand::Lang { language } => {
                commands::language::set_language(session, language);
                // The header is printed by the language watcher.
                String::new()
            }
            ShellCommand::T { key } => commands::language::translate_key(session, &key)?.to_string(),
            ShellCommand::Header => self.header(),
            ShellCommand::Footer => view::footer(lang()),

            ShellCommand::TypeInput { text } => {
                let state = commands::search::type_input(session, &text.join(" "));
                view::suggestion(&state, lang()).unwrap_or_default()
            }
            ShellCommand::Retry => {
                commands::search::retry(session)?;
                view::suggestion(&commands::search::suggestion_state(session), lang()).unwrap_or_default()
            }

            ShellCommand::Cart => view::cart(&commands::cart::get_cart(session), lang()),
            ShellCommand::Add { id, price_cents, name } => {
                let cart = commands::cart::add_to_cart(session, &id, price_cents, &name.join(" "))?;
                view::cart(&cart, lang())
            }
            ShellCommand::Remove { id } => view::cart(&commands::cart::remove_from_cart(session, &id), lang()),
            ShellCommand::Clear => view::cart(&commands::cart::clear_cart(session), lang()),

            ShellCommand::Explore {
                listing_type,
                open,
                featured,
                query,
            } => {
                let filter = ListingFilter {
                    listing_type,
                    query: (!query.is_empty()).then(|| query.join(" ")),
                    open_only: open,
                    featured_only: featured,
                    featured_first: true,
                };
                view::listings(&commands::explore::explore(session, filter), lang())
            }
            ShellCommand::Show { id } => {
                view::listing_detail(&commands::explore::show_listing(session, &id)?, lang())
            }

            ShellCommand::Wizard { action } => self.wizard(action)?,
            ShellCommand::Describe => return Ok(Outcome::Describe),

            ShellCommand::Book { listing_id, date } => {
                commands::bridge::book(session, &listing_id, &date)?;
                session
                    .language
                    .translate(TextKey::BookingConfirmed)
                    .to_string()
            }
            ShellCommand::Host { json } => {
                commands::bridge::host_update(session, &json.join(" "))?;
                view::listings(
                    &commands::explore::explore(session, ListingFilter::default()),
                    lang(),
                )
            }

            ShellCommand::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Print(text))
    }

    fn wizard(&self, action: Option<WizardAction>) -> Result<String, ApiError> {
        use commands::wizard as w;

        let session = self.session;
        let lang = session.language.language();

        let current = match action {
            None => w::wizard_status(session),
            Some(WizardAction::Type { name }) => w::select_type(session, &name.join(" "))?,
            Some(WizardAction::Title { text }) => w::set_title(session, &text.join(" ")),
            Some(WizardAction::Desc { text }) => w::set_description(session, &text.join(" ")),
            Some(WizardAction::Location { address, city }) => {
                w::set_location(session, &address.join(" "), &city.join(" "))
            }
            Some(WizardAction::Plan { plan }) => w::set_plan(session, &plan)?,
            Some(WizardAction::Next) => w::next(session)?,
            Some(WizardAction::Back) => w::back(session),
            Some(WizardAction::Submit) => {
                let listing = w::submit(session)?;
                return Ok(view::submitted(&listing, lang));
            }
        };

        Ok(view::wizard(&current, lang))
    }

    fn header(&self) -> String {
        let count = self.session.cart.with_cart(|c| c.cart_count());
        view::header(self.session.language.language(), count)
    }
}
