//! # Domain Types
//!
//! The records a directory page renders.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Listing      │   │     Review      │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──┤  listing_id     │   │  id             │       │
//! │  │  listing_type   │   │  user_id ───────┼──►│  role           │       │
//! │  │  location       │   │  rating         │   │  email          │       │
//! │  │  status         │   │  date           │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ListingType: Restaurant │ Hotel │ Event │ RealEstate │ Job │ Service  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All records serialize camelCase, which is also the layout of the
//! catalog JSON file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::i18n::Language;

// =============================================================================
// Listing Type
// =============================================================================

/// What kind of business a listing advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ListingType {
    Restaurant,
    Hotel,
    Event,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Job,
    Service,
}

impl ListingType {
    pub const ALL: [ListingType; 6] = [
        ListingType::Restaurant,
        ListingType::Hotel,
        ListingType::Event,
        ListingType::RealEstate,
        ListingType::Job,
        ListingType::Service,
    ];

    /// Display label for the wizard's type picker and listing badges.
    pub const fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (ListingType::Restaurant, Language::PtBr) => "Restaurante",
            (ListingType::Restaurant, Language::EnUs) => "Restaurant",
            (ListingType::Hotel, _) => "Hotel",
            (ListingType::Event, Language::PtBr) => "Evento",
            (ListingType::Event, Language::EnUs) => "Event",
            (ListingType::RealEstate, Language::PtBr) => "Imóvel",
            (ListingType::RealEstate, Language::EnUs) => "Real Estate",
            (ListingType::Job, Language::PtBr) => "Vaga",
            (ListingType::Job, Language::EnUs) => "Job",
            (ListingType::Service, Language::PtBr) => "Serviço",
            (ListingType::Service, Language::EnUs) => "Service",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Language::EnUs))
    }
}

/// Accepts the English or Portuguese label, or a compact form like
/// `real-estate`.
impl FromStr for ListingType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();

        ListingType::ALL
            .iter()
            .copied()
            .find(|t| {
                Language::ALL.iter().any(|lang| {
                    let label: String = t
                        .label(*lang)
                        .to_lowercase()
                        .chars()
                        .filter(|c| c.is_alphanumeric())
                        .collect();
                    label == wanted
                })
            })
            .ok_or_else(|| CoreError::UnknownListingType(s.trim().to_string()))
    }
}

// =============================================================================
// Listing
// =============================================================================

/// Whether the business is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Open,
    Closed,
}

/// Street address plus map coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
}

/// A business, venue, event or job in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    pub category: String,
    pub description: String,
    /// Symbolic price band, e.g. "££".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    pub rating: f32,
    pub reviews_count: u32,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub location: Location,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Listing {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.status == ListingStatus::Open
    }
}

// =============================================================================
// Users & Reviews
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Owner,
    Visitor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: UserRole,
}

/// A visitor's review of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub listing_id: String,
    pub user_id: String,
    pub user_name: String,
    /// 1 to 5 stars.
    pub rating: u8,
    pub comment: String,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
}
