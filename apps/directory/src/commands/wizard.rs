//! # Wizard Commands
//!
//! The four-step "add listing" flow.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1 Type ──next──► 2 Info ──next──► 3 Location ──next──► 4 Plan          │
//! │     ▲               │    ▲            │                     │           │
//! │     └────back───────┘    └───back─────┘                  submit         │
//! │                     │                                       │           │
//! │               describe (AI)                                 ▼           │
//! │                                                   SubmittedListing      │
//! │                                                   (wizard starts over)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mylisting_core::{ListingType, ListingWizard, PlanTier, SubmittedListing, WizardStep};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::Session;

/// Snapshot of the wizard for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub step: WizardStep,
    pub listing_type: Option<ListingType>,
    pub title: String,
    pub description: String,
    pub city: String,
    pub plan: Option<PlanTier>,
}

impl From<&ListingWizard> for WizardView {
    fn from(wizard: &ListingWizard) -> Self {
        WizardView {
            step: wizard.step(),
            listing_type: wizard.listing_type(),
            title: wizard.title().to_string(),
            description: wizard.description().to_string(),
            city: wizard.city().to_string(),
            plan: wizard.plan(),
        }
    }
}

pub fn wizard_status(session: &Session) -> WizardView {
    session.wizard.with_wizard(|w| WizardView::from(w))
}

pub fn select_type(session: &Session, listing_type: &str) -> Result<WizardView, ApiError> {
    debug!(listing_type, "wizard select_type");
    let listing_type: ListingType = listing_type.parse()?;
    Ok(edit(session, |w| w.select_type(listing_type)))
}

pub fn set_title(session: &Session, title: &str) -> WizardView {
    edit(session, |w| w.set_title(title))
}

pub fn set_description(session: &Session, description: &str) -> WizardView {
    edit(session, |w| w.set_description(description))
}

pub fn set_location(session: &Session, address: &str, city: &str) -> WizardView {
    edit(session, |w| w.set_location(address, city))
}

pub fn set_plan(session: &Session, plan: &str) -> Result<WizardView, ApiError> {
    let plan: PlanTier = plan.parse()?;
    Ok(edit(session, |w| w.set_plan(plan)))
}

/// Validates the current step and advances.
pub fn next(session: &Session) -> Result<WizardView, ApiError> {
    session.wizard.with_wizard_mut(|w| -> Result<WizardView, ApiError> {
        let step = w.next()?;
        debug!(step = step.number(), "wizard advanced");
        Ok(WizardView::from(&*w))
    })
}

pub fn back(session: &Session) -> WizardView {
    edit(session, |w| {
        w.back();
    })
}

/// Finishes the wizard. On success the wizard starts over.
pub fn submit(session: &Session) -> Result<SubmittedListing, ApiError> {
    let submitted = session.wizard.with_wizard(|w| w.submit())?;
    session.wizard.reset();

    info!(id = %submitted.id, title = %submitted.title, plan = ?submitted.plan, "Listing submitted");
    Ok(submitted)
}

/// Asks the text generator for a description of the listing being built
/// and stores it in the wizard.
pub async fn describe(session: &Session) -> Result<WizardView, ApiError> {
    let (title, listing_type) = session
        .wizard
        .with_wizard(|w| (w.title().trim().to_string(), w.listing_type()));

    if title.is_empty() {
        return Err(ApiError::validation("Enter a title before generating a description"));
    }
    let listing_type = listing_type
        .ok_or_else(|| ApiError::validation("Choose a listing type before generating a description"))?;

    debug!(%title, %listing_type, "describe command");
    let text = session
        .recommender
        .listing_description(&title, listing_type, session.language.language())
        .await?;

    Ok(edit(session, |w| w.apply_generated_description(text)))
}

fn edit<F>(session: &Session, f: F) -> WizardView
where
    F: FnOnce(&mut ListingWizard),
{
    session.wizard.with_wizard_mut(|w| {
        f(w);
        WizardView::from(&*w)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::test_support::{session_with, Scripted};
    use mylisting_assist::AssistError;
    use mylisting_core::{translate, Language, TextKey};

    #[tokio::test]
    async fn test_full_walkthrough() {
        let session = session_with(Scripted::ok("x"));

        select_type(&session, "restaurante").unwrap();
        assert_eq!(next(&session).unwrap().step, WizardStep::Info);

        set_title(&session, "Blue Ocean Bistro");
        next(&session).unwrap();
        set_location(&session, "Rua A, 1", "Rio de Janeiro");
        next(&session).unwrap();
        set_plan(&session, "ouro").unwrap();

        let listing = submit(&session).unwrap();
        assert_eq!(listing.listing_type, ListingType::Restaurant);
        assert_eq!(listing.plan, PlanTier::Gold);
        assert_eq!(listing.city, "Rio de Janeiro");

        assert_eq!(wizard_status(&session).step, WizardStep::Type);
    }

    #[tokio::test]
    async fn test_refuses_to_advance_without_fields() {
        let session = session_with(Scripted::ok("x"));

        let err = next(&session).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        select_type(&session, "hotel").unwrap();
        next(&session).unwrap();
        set_title(&session, "ab");
        assert!(next(&session).is_err());
        assert_eq!(wizard_status(&session).step, WizardStep::Info);

        let err = submit(&session).unwrap_err();
        assert_eq!(err.code, ErrorCode::WizardError);
    }

    #[tokio::test]
    async fn test_back_saturates() {
        let session = session_with(Scripted::ok("x"));
        assert_eq!(back(&session).step, WizardStep::Type);

        select_type(&session, "job").unwrap();
        next(&session).unwrap();
        assert_eq!(back(&session).step, WizardStep::Type);
        assert_eq!(back(&session).step, WizardStep::Type);
    }

    #[tokio::test]
    async fn test_bad_type_or_plan_is_rejected() {
        let session = session_with(Scripted::ok("x"));
        assert!(select_type(&session, "spaceship").is_err());

        let err = set_plan(&session, "platinum").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Unknown plan 'platinum'. Supported: free, gold");
    }

    #[tokio::test]
    async fn test_describe_fills_description() {
        let generator = Scripted::ok("  Fresh seafood daily. Ocean views from every table.  ");
        let session = session_with(generator.clone());

        assert!(describe(&session).await.is_err());

        select_type(&session, "restaurant").unwrap();
        set_title(&session, "Blue Ocean Bistro");
        let view = describe(&session).await.unwrap();

        assert_eq!(view.description, "Fresh seafood daily. Ocean views from every table.");
        assert!(generator.prompts()[0].contains("\"Blue Ocean Bistro\""));
    }

    #[tokio::test]
    async fn test_describe_without_key_uses_fallback() {
        let session = session_with(Scripted::failing(|| AssistError::MissingCredential));

        select_type(&session, "hotel").unwrap();
        set_title(&session, "Hotel Sol");
        let view = describe(&session).await.unwrap();

        assert_eq!(
            view.description,
            translate(Language::PtBr, TextKey::AiDescriptionKeyMissing)
        );
    }

    #[tokio::test]
    async fn test_describe_upstream_failure_is_error() {
        let session = session_with(Scripted::failing(|| AssistError::EmptyResponse));

        select_type(&session, "hotel").unwrap();
        set_title(&session, "Hotel Sol");
        let err = describe(&session).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Upstream);
        assert!(wizard_status(&session).description.is_empty());
    }
}
