//! Dates
//!
//! Calendar-only date arithmetic for stay ranges. Everything here works on
//! [`jiff::civil::Date`], so there is no time of day and no time zone to
//! shift a day count across a daylight-saving transition.

use jiff::{Span, Zoned, civil::Date};
use serde::{Deserialize, Serialize};

/// Key the date picker tags its selection with.
pub const SELECTION_KEY: &str = "selection";

/// A check-in / check-out pair as chosen in a calendar control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// Check-in date
    pub start_date: Date,

    /// Check-out date (last day of the stay)
    pub end_date: Date,

    /// Picker selection key
    pub key: String,
}

impl DateRange {
    /// Creates a new range tagged with [`SELECTION_KEY`].
    pub fn new(start_date: Date, end_date: Date) -> Self {
        Self {
            start_date,
            end_date,
            key: SELECTION_KEY.to_string(),
        }
    }

    /// A range that starts and ends on the same day.
    pub fn single_day(date: Date) -> Self {
        Self::new(date, date)
    }

    /// A single-day range on today's date in the system time zone.
    pub fn today() -> Self {
        Self::single_day(today())
    }

    /// Returns a copy of this range with a different end date.
    #[must_use]
    pub fn with_end_date(&self, end_date: Date) -> Self {
        Self {
            end_date,
            ..self.clone()
        }
    }

    /// Whether the end date is on or after the start date.
    pub fn is_ordered(&self) -> bool {
        self.end_date >= self.start_date
    }

    /// Whole calendar days from the start date to the end date.
    ///
    /// # Errors
    ///
    /// Returns a [`jiff::Error`] if the difference cannot be represented as a span.
    pub fn days(&self) -> Result<i64, jiff::Error> {
        days_between(self.start_date, self.end_date)
    }
}

/// Today's date in the system time zone.
pub fn today() -> Date {
    Zoned::now().date()
}

/// Whole calendar days from `start` to `end`, negative when `end` comes first.
///
/// # Errors
///
/// Returns a [`jiff::Error`] if the difference cannot be represented as a span.
pub fn days_between(start: Date, end: Date) -> Result<i64, jiff::Error> {
    Ok(i64::from(start.until(end)?.get_days()))
}

/// Moves `date` forward (or backward, for negative `days`) by whole days.
///
/// # Errors
///
/// Returns a [`jiff::Error`] if the result falls outside the supported date range.
pub fn add_days(date: Date, days: i64) -> Result<Date, jiff::Error> {
    date.checked_add(Span::new().try_days(days)?)
}

/// Formats a date the way Indonesian locales print a short date (`d/m/yyyy`).
pub fn indonesian_short_date(date: Date) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}
