//! Booking drafts

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    booking::{
        BookingError, Nights,
        reconcile::{reconcile_from_date_change, reconcile_from_duration_change},
    },
    dates::DateRange,
};

/// A single edit made in the booking form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingAction {
    /// The calendar control delivered a new check-in / check-out pair.
    DateRangeChanged(DateRange),

    /// The nights input delivered a new stay length.
    DurationChanged(Nights),
}

/// The booking form's working state for one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    item_id: String,
    duration: Nights,
    date: DateRange,
}

impl BookingDraft {
    /// Starts a one-night draft checking in on `today`.
    pub fn new(item_id: impl Into<String>, today: Date) -> Self {
        Self {
            item_id: item_id.into(),
            duration: Nights::MIN,
            date: DateRange::single_day(today),
        }
    }

    /// Listing being booked.
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    /// Current stay length.
    pub fn duration(&self) -> Nights {
        self.duration
    }

    /// Current date range.
    pub fn date(&self) -> &DateRange {
        &self.date
    }

    /// Applies one edit and returns the reconciled draft.
    ///
    /// The field named by the action is taken as given and the other is
    /// derived from it once. `self` is left untouched, so a rejected edit
    /// simply keeps the previous draft.
    ///
    /// # Errors
    ///
    /// - [`BookingError::InvertedRange`]: the new range ends before it starts.
    /// - [`BookingError::NightsOutOfRange`]: the new range is longer than a bookable stay.
    /// - [`BookingError::Date`]: the derived end date is outside the supported calendar.
    pub fn apply(&self, action: BookingAction) -> Result<Self, BookingError> {
        match action {
            BookingAction::DateRangeChanged(range) => {
                if !range.is_ordered() {
                    return Err(BookingError::InvertedRange {
                        start: range.start_date,
                        end: range.end_date,
                    });
                }

                let outcome = reconcile_from_date_change(&range)?;
                let duration = Nights::new(outcome.duration)?;

                debug!(
                    item_id = %self.item_id,
                    start = %range.start_date,
                    end = %range.end_date,
                    %duration,
                    "dates edited, duration derived"
                );

                Ok(Self {
                    item_id: self.item_id.clone(),
                    duration,
                    date: range,
                })
            }
            BookingAction::DurationChanged(duration) => {
                let outcome = reconcile_from_duration_change(duration, self.date.start_date)?;

                debug!(
                    item_id = %self.item_id,
                    %duration,
                    end = %outcome.end_date,
                    "duration edited, end date derived"
                );

                Ok(Self {
                    item_id: self.item_id.clone(),
                    duration,
                    date: self.date.with_end_date(outcome.end_date),
                })
            }
        }
    }

    /// Copies the draft into the payload handed to checkout.
    pub fn checkout(&self) -> Checkout {
        Checkout {
            item_id: self.item_id.clone(),
            duration: self.duration,
            date: CheckoutDates {
                start_date: self.date.start_date,
                end_date: self.date.end_date,
            },
        }
    }
}

/// Booking details handed from the form to checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkout {
    /// Listing being booked
    #[serde(rename = "_id")]
    pub item_id: String,

    /// Stay length
    pub duration: Nights,

    /// Stay dates
    pub date: CheckoutDates,
}

/// Check-in and check-out dates of a checkout payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutDates {
    /// Check-in date
    pub start_date: Date,

    /// Check-out date
    pub end_date: Date,
}
