//! Listings

use serde::{Deserialize, Serialize};

use crate::currency::{Price, format_price};

/// A rental listing as served by the marketplace API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Listing identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Listing name
    pub name: String,

    /// City
    #[serde(default)]
    pub city: String,

    /// Country
    #[serde(default)]
    pub country: String,

    /// USD price per unit
    #[serde(default)]
    pub price: Price,

    /// Billing unit, e.g. `night`
    #[serde(default)]
    pub unit: String,
}

impl Listing {
    /// `City, Country`, skipping whichever part is empty.
    pub fn location(&self) -> String {
        [self.city.as_str(), self.country.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Rupiah price label, e.g. `Rp 3.750.000/night`.
    pub fn price_label(&self) -> String {
        format_price(&self.price, self.unit())
    }

    /// Billing unit, defaulting to `night`.
    pub fn unit(&self) -> &str {
        if self.unit.is_empty() {
            "night"
        } else {
            &self.unit
        }
    }
}
