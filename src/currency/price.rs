//! Listing prices

use serde::{Deserialize, Serialize};

/// A USD price as it arrives from listing data.
///
/// Listings carry either a bare number or an object with an amount and an
/// optional period label. Anything missing reads as zero or "no period".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    /// A bare USD amount.
    Amount(f64),

    /// A USD amount with an optional period label.
    Structured(StructuredPrice),

    /// No price at all.
    #[default]
    Missing,
}

/// Object form of a [`Price`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredPrice {
    /// USD amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// Fallback USD amount, read when `amount` is missing or zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Period label, e.g. `night`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per: Option<String>,

    /// Fallback period label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Price {
    /// Starts a structured price with the given amount.
    pub fn structured(amount: f64) -> StructuredPrice {
        StructuredPrice {
            amount: Some(amount),
            ..StructuredPrice::default()
        }
    }

    /// USD amount, or zero when absent or not a number.
    pub fn amount(&self) -> f64 {
        match self {
            Price::Amount(amount) => usable(*amount).unwrap_or(0.0),
            Price::Structured(price) => price
                .amount
                .and_then(usable)
                .or_else(|| price.value.and_then(usable))
                .unwrap_or(0.0),
            Price::Missing => 0.0,
        }
    }

    /// Period label carried by the price itself, if any.
    pub fn period(&self) -> Option<&str> {
        let Price::Structured(price) = self else {
            return None;
        };

        [&price.per, &price.unit]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|label| !label.is_empty())
    }
}

impl StructuredPrice {
    /// Sets the period label.
    #[must_use]
    pub fn per(mut self, per: impl Into<String>) -> Self {
        self.per = Some(per.into());
        self
    }

    /// Sets the fallback period label.
    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// Zero and NaN count as "no amount", so the next candidate gets a turn.
fn usable(amount: f64) -> Option<f64> {
    (amount != 0.0 && !amount.is_nan()).then_some(amount)
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Price::Amount(amount)
    }
}

impl From<u32> for Price {
    fn from(amount: u32) -> Self {
        Price::Amount(f64::from(amount))
    }
}

impl From<StructuredPrice> for Price {
    fn from(price: StructuredPrice) -> Self {
        Price::Structured(price)
    }
}

impl<T: Into<Price>> From<Option<T>> for Price {
    fn from(price: Option<T>) -> Self {
        price.map_or(Price::Missing, Into::into)
    }
}

impl From<&Price> for Price {
    fn from(price: &Price) -> Self {
        price.clone()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn bare_amount() {
        let price = Price::from(120.5);

        assert!((price.amount() - 120.5).abs() < f64::EPSILON);
        assert_eq!(price.period(), None);
    }

    #[test]
    fn nan_amount_reads_as_zero() {
        assert!(Price::from(f64::NAN).amount().abs() < f64::EPSILON);
    }

    #[test]
    fn structured_falls_back_to_value() {
        let price = Price::Structured(StructuredPrice {
            amount: Some(0.0),
            value: Some(80.0),
            ..StructuredPrice::default()
        });

        assert!((price.amount() - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn per_wins_over_unit() {
        let price = Price::from(Price::structured(10.0).per("night").unit("month"));

        assert_eq!(price.period(), Some("night"));
    }

    #[test]
    fn empty_per_falls_back_to_unit() {
        let price = Price::from(Price::structured(10.0).per("").unit("month"));

        assert_eq!(price.period(), Some("month"));
    }

    #[test]
    fn none_is_missing() {
        assert_eq!(Price::from(None::<f64>), Price::Missing);
        assert!(Price::Missing.amount().abs() < f64::EPSILON);
    }

    #[test]
    fn deserializes_number_object_and_null() -> TestResult {
        assert_eq!(serde_norway::from_str::<Price>("250")?, Price::Amount(250.0));
        assert_eq!(
            serde_norway::from_str::<Price>("{amount: 100, per: night}")?,
            Price::from(Price::structured(100.0).per("night"))
        );
        assert_eq!(serde_norway::from_str::<Price>("~")?, Price::Missing);

        Ok(())
    }
}
