//! # Add Listing Wizard
//!
//! Four-step form a business owner fills in to publish a listing.
//!
//! ## Step Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐  next  ┌──────────┐  next  ┌──────────┐  next  ┌──────┐ │
//! │   │ 1 Type   │ ─────► │ 2 Info   │ ─────► │ 3 Place  │ ─────► │4 Plan│ │
//! │   └──────────┘ ◄───── └──────────┘ ◄───── └──────────┘ ◄───── └──┬───┘ │
//! │        ▲        back               back               back        │     │
//! │        └─ back() stays here                                 submit()   │
//! │                                                                 │       │
//! │   next() checks:  type chosen │ title 3..=120 │ city │ plan      ▼       │
//! │                                                       SubmittedListing │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::ListingType;
use crate::validation::{validate_listing_title, validate_required};

/// Wizard step, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum WizardStep {
    Type = 1,
    Info = 2,
    Location = 3,
    Plan = 4,
}

impl WizardStep {
    pub const fn number(self) -> u8 {
        self as u8
    }

    fn next(self) -> Self {
        match self {
            WizardStep::Type => WizardStep::Info,
            WizardStep::Info => WizardStep::Location,
            WizardStep::Location | WizardStep::Plan => WizardStep::Plan,
        }
    }

    fn back(self) -> Self {
        match self {
            WizardStep::Type | WizardStep::Info => WizardStep::Type,
            WizardStep::Location => WizardStep::Info,
            WizardStep::Plan => WizardStep::Location,
        }
    }
}

/// Listing plan offered on the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Gold,
}

impl std::str::FromStr for PlanTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" | "gratis" | "grátis" => Ok(PlanTier::Free),
            "gold" | "ouro" => Ok(PlanTier::Gold),
            _ => Err(CoreError::UnknownPlan(s.trim().to_string())),
        }
    }
}

/// What the wizard hands to the host once finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedListing {
    pub id: String,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    pub title: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub plan: PlanTier,
    #[ts(as = "String")]
    pub submitted_at: DateTime<Utc>,
}

/// In-progress wizard state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingWizard {
    step: WizardStep,
    listing_type: Option<ListingType>,
    title: String,
    description: String,
    address: String,
    city: String,
    plan: Option<PlanTier>,
}

impl Default for ListingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingWizard {
    pub fn new() -> Self {
        ListingWizard {
            step: WizardStep::Type,
            listing_type: None,
            title: String::new(),
            description: String::new(),
            address: String::new(),
            city: String::new(),
            plan: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn listing_type(&self) -> Option<ListingType> {
        self.listing_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn plan(&self) -> Option<PlanTier> {
        self.plan
    }

    pub fn select_type(&mut self, listing_type: ListingType) {
        self.listing_type = Some(listing_type);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Stores a description produced by the text-generation service.
    pub fn apply_generated_description(&mut self, text: impl Into<String>) {
        self.description = text.into().trim().to_string();
    }

    pub fn set_location(&mut self, address: impl Into<String>, city: impl Into<String>) {
        self.address = address.into();
        self.city = city.into();
    }

    pub fn set_plan(&mut self, plan: PlanTier) {
        self.plan = Some(plan);
    }

    /// Validates the current step and advances. On the Plan step this only
    /// validates.
    pub fn next(&mut self) -> CoreResult<WizardStep> {
        self.validate_step(self.step)?;
        self.step = self.step.next();
        Ok(self.step)
    }

    /// Goes back one step, never below the first.
    pub fn back(&mut self) -> WizardStep {
        self.step = self.step.back();
        self.step
    }

    /// Finishes the wizard. Only allowed on the Plan step, and re-checks
    /// every step so a listing can't be submitted half filled.
    pub fn submit(&self) -> CoreResult<SubmittedListing> {
        if self.step != WizardStep::Plan {
            return Err(CoreError::WizardStep {
                current: self.step.number(),
                required: WizardStep::Plan.number(),
            });
        }

        let listing_type = self.listing_type.ok_or_else(|| required("type"))?;
        validate_listing_title(&self.title)?;
        validate_required("city", &self.city)?;
        let plan = self.plan.ok_or_else(|| required("plan"))?;

        Ok(SubmittedListing {
            id: Uuid::new_v4().to_string(),
            listing_type,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            plan,
            submitted_at: Utc::now(),
        })
    }

    fn validate_step(&self, step: WizardStep) -> CoreResult<()> {
        match step {
            WizardStep::Type if self.listing_type.is_none() => Err(required("type").into()),
            WizardStep::Info => Ok(validate_listing_title(&self.title)?),
            WizardStep::Location => Ok(validate_required("city", &self.city)?),
            WizardStep::Plan if self.plan.is_none() => Err(required("plan").into()),
            _ => Ok(()),
        }
    }
}

fn required(field: &str) -> ValidationError {
    ValidationError::Required {
        field: field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ListingWizard {
        let mut wizard = ListingWizard::new();
        wizard.select_type(ListingType::Restaurant);
        wizard.next().unwrap();
        wizard.set_title("Blue Ocean Bistro");
        wizard.next().unwrap();
        wizard.set_location("Rua Augusta 100", "São Paulo");
        wizard.next().unwrap();
        wizard.set_plan(PlanTier::Gold);
        wizard
    }

    #[test]
    fn test_starts_on_type_step() {
        let wizard = ListingWizard::new();
        assert_eq!(wizard.step(), WizardStep::Type);
        assert_eq!(wizard.step().number(), 1);
    }

    #[test]
    fn test_refuses_to_advance_without_required_fields() {
        let mut wizard = ListingWizard::new();
        assert!(wizard.next().is_err());
        assert_eq!(wizard.step(), WizardStep::Type);

        wizard.select_type(ListingType::Hotel);
        assert_eq!(wizard.next().unwrap(), WizardStep::Info);

        wizard.set_title("ab");
        assert!(matches!(
            wizard.next(),
            Err(CoreError::Validation(ValidationError::TooShort { .. }))
        ));
        assert_eq!(wizard.step(), WizardStep::Info);

        wizard.set_title("Skyline Suites");
        assert_eq!(wizard.next().unwrap(), WizardStep::Location);

        wizard.set_location("Main St", "  ");
        assert!(wizard.next().is_err());
        wizard.set_location("Main St", "London");
        assert_eq!(wizard.next().unwrap(), WizardStep::Plan);

        assert!(wizard.next().is_err());
    }

    #[test]
    fn test_back_saturates_at_first_step() {
        let mut wizard = filled();
        assert_eq!(wizard.back(), WizardStep::Location);
        assert_eq!(wizard.back(), WizardStep::Info);
        assert_eq!(wizard.back(), WizardStep::Type);
        assert_eq!(wizard.back(), WizardStep::Type);
    }

    #[test]
    fn test_submit_only_on_plan_step() {
        let mut wizard = ListingWizard::new();
        wizard.select_type(ListingType::Event);
        assert!(matches!(
            wizard.submit(),
            Err(CoreError::WizardStep { current: 1, required: 4 })
        ));

        wizard = filled();
        let submitted = wizard.submit().unwrap();
        assert_eq!(submitted.listing_type, ListingType::Restaurant);
        assert_eq!(submitted.title, "Blue Ocean Bistro");
        assert_eq!(submitted.city, "São Paulo");
        assert_eq!(submitted.plan, PlanTier::Gold);
        assert!(Uuid::parse_str(&submitted.id).is_ok());
    }

    #[test]
    fn test_submit_rechecks_earlier_steps() {
        let mut wizard = filled();
        wizard.set_title("");
        assert!(wizard.submit().is_err());
    }

    #[test]
    fn test_generated_description_is_trimmed() {
        let mut wizard = ListingWizard::new();
        wizard.apply_generated_description("  Fresh seafood by the sea.\n");
        assert_eq!(wizard.description(), "Fresh seafood by the sea.");
    }

    #[test]
    fn test_plan_parsing() {
        assert_eq!("gold".parse::<PlanTier>().unwrap(), PlanTier::Gold);
        assert_eq!("Ouro".parse::<PlanTier>().unwrap(), PlanTier::Gold);
        assert_eq!("free".parse::<PlanTier>().unwrap(), PlanTier::Free);
        assert!(matches!(
            "platinum".parse::<PlanTier>(),
            Err(CoreError::UnknownPlan(name)) if name == "platinum"
        ));
    }
}
