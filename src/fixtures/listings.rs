//! Listing Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{currency::Price, listings::Listing};

/// Wrapper for listings in YAML
#[derive(Debug, Deserialize)]
pub struct ListingsFixture {
    /// Map of listing id -> listing fixture
    pub listings: FxHashMap<String, ListingFixture>,
}

/// Listing Fixture
#[derive(Debug, Deserialize)]
pub struct ListingFixture {
    /// Listing name
    pub name: String,

    /// City
    #[serde(default)]
    pub city: String,

    /// Country
    #[serde(default)]
    pub country: String,

    /// USD price, either a number or `{ amount, per }`
    #[serde(default)]
    pub price: Price,

    /// Billing unit (e.g., "night")
    #[serde(default)]
    pub unit: String,
}

impl ListingFixture {
    /// Builds the listing, taking its id from the fixture map key.
    pub fn into_listing(self, id: String) -> Listing {
        Listing {
            id,
            name: self.name,
            city: self.city,
            country: self.country,
            price: self.price,
            unit: self.unit,
        }
    }
}
