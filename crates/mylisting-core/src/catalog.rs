//! # Catalog
//!
//! The in-memory set of listings the Explore page filters.
//!
//! ## Filter Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  listings ──► type? ──► open_only? ──► featured_only? ──► query? ──►   │
//! │                                                                         │
//! │               featured_first? ──► stable sort, featured ahead           │
//! │                                                                         │
//! │  query: case-insensitive substring of title, category, city or a tag   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{Listing, ListingType};

/// Explore page filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListingFilter {
    #[serde(default)]
    pub listing_type: Option<ListingType>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub open_only: bool,
    #[serde(default)]
    pub featured_only: bool,
    /// Featured listings first, otherwise catalog order.
    #[serde(default)]
    pub featured_first: bool,
}

impl ListingFilter {
    /// Whether a single listing passes every active criterion.
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(wanted) = self.listing_type {
            if listing.listing_type != wanted {
                return false;
            }
        }

        if self.open_only && !listing.is_open() {
            return false;
        }

        if self.featured_only && !listing.featured {
            return false;
        }

        match self.query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => {
                let needle = q.to_lowercase();
                let hit = |s: &str| s.to_lowercase().contains(&needle);

                hit(&listing.title)
                    || hit(&listing.category)
                    || hit(&listing.location.city)
                    || listing.tags.iter().any(|t| hit(t))
            }
            _ => true,
        }
    }
}

/// All listings known to this session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Catalog { listings }
    }

    /// Parses a JSON array of listings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let listings: Vec<Listing> = serde_json::from_str(json)?;
        Ok(Self::from_listings(listings))
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn find(&self, id: &str) -> CoreResult<&Listing> {
        self.listings
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| CoreError::ListingNotFound(id.to_string()))
    }

    /// Listings matching `filter`.
    pub fn apply(&self, filter: &ListingFilter) -> Vec<&Listing> {
        let mut hits: Vec<&Listing> = self.listings.iter().filter(|l| filter.matches(l)).collect();

        if filter.featured_first {
            // sort_by_key is stable
            hits.sort_by_key(|l| !l.featured);
        }

        hits
    }

    /// Replaces the catalog wholesale (host `data-update`).
    pub fn replace(&mut self, listings: Vec<Listing>) {
        self.listings = listings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ListingStatus, Location};

    fn listing(id: &str, title: &str, listing_type: ListingType, featured: bool, open: bool) -> Listing {
        Listing {
            id: id.to_string(),
            title: title.to_string(),
            listing_type,
            category: "Various".to_string(),
            description: String::new(),
            price_range: None,
            rating: 4.5,
            reviews_count: 10,
            image_url: String::new(),
            logo_url: None,
            location: Location {
                address: "Main St".to_string(),
                city: "London".to_string(),
                lat: 51.5,
                lng: -0.1,
            },
            featured,
            status: if open { ListingStatus::Open } else { ListingStatus::Closed },
            tags: vec!["Modern".to_string()],
        }
    }

    fn sample() -> Catalog {
        Catalog::from_listings(vec![
            listing("1", "Golden Dragon Chinese", ListingType::Restaurant, false, true),
            listing("2", "Skyline Suites", ListingType::Hotel, true, true),
            listing("3", "Pasta Paradiso", ListingType::Restaurant, true, false),
            listing("4", "City Events Hall", ListingType::Event, false, true),
        ])
    }

    fn ids(hits: &[&Listing]) -> Vec<String> {
        hits.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let catalog = sample();
        let hits = catalog.apply(&ListingFilter::default());
        assert_eq!(ids(&hits), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_filter_by_type_and_open() {
        let catalog = sample();

        let filter = ListingFilter {
            listing_type: Some(ListingType::Restaurant),
            ..Default::default()
        };
        assert_eq!(ids(&catalog.apply(&filter)), vec!["1", "3"]);

        let filter = ListingFilter {
            listing_type: Some(ListingType::Restaurant),
            open_only: true,
            ..Default::default()
        };
        assert_eq!(ids(&catalog.apply(&filter)), vec!["1"]);
    }

    #[test]
    fn test_query_is_case_insensitive_over_fields() {
        let catalog = sample();

        let by_title = ListingFilter {
            query: Some("PASTA".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&catalog.apply(&by_title)), vec!["3"]);

        let by_city = ListingFilter {
            query: Some("london".to_string()),
            ..Default::default()
        };
        assert_eq!(catalog.apply(&by_city).len(), 4);

        let by_tag = ListingFilter {
            query: Some("modern".to_string()),
            featured_only: true,
            ..Default::default()
        };
        assert_eq!(ids(&catalog.apply(&by_tag)), vec!["2", "3"]);

        let blank = ListingFilter {
            query: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(catalog.apply(&blank).len(), 4);
    }

    #[test]
    fn test_featured_first_is_stable() {
        let catalog = sample();
        let filter = ListingFilter {
            featured_first: true,
            ..Default::default()
        };
        assert_eq!(ids(&catalog.apply(&filter)), vec!["2", "3", "1", "4"]);
    }

    #[test]
    fn test_find() {
        let catalog = sample();
        assert_eq!(catalog.find("2").unwrap().title, "Skyline Suites");
        assert!(matches!(catalog.find("99"), Err(CoreError::ListingNotFound(_))));
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::to_string(sample().listings()).unwrap();
        let catalog = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog.len(), 4);

        assert!(Catalog::from_json("{not json").is_err());
    }
}
