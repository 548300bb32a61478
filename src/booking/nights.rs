//! Nights

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::booking::BookingError;

/// Length of a stay, always within `1..=30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Nights(u8);

impl Nights {
    /// Shortest bookable stay.
    pub const MIN: Nights = Nights(1);

    /// Longest bookable stay.
    pub const MAX: Nights = Nights(30);

    /// Creates a stay length, rejecting values outside `1..=30`.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NightsOutOfRange`] for values outside the bookable range.
    pub fn new(value: i64) -> Result<Self, BookingError> {
        u8::try_from(value)
            .ok()
            .filter(|nights| (Self::MIN.0..=Self::MAX.0).contains(nights))
            .map(Self)
            .ok_or(BookingError::NightsOutOfRange(value))
    }

    /// Creates a stay length, clamping into `1..=30`.
    ///
    /// This is what the nights input does before handing a value to the reconciler.
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));

        u8::try_from(clamped).map_or(Self::MIN, Self)
    }

    /// Number of nights.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Days between check-in and check-out for this stay length.
    pub fn extra_days(self) -> i64 {
        i64::from(self.0) - 1
    }
}

impl Default for Nights {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<i64> for Nights {
    type Error = BookingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Nights> for i64 {
    fn from(nights: Nights) -> Self {
        i64::from(nights.0)
    }
}

impl fmt::Display for Nights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
