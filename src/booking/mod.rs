//! Booking
//!
//! Keeps a booking form's stay length and date range consistent with each other.
//! Each edit names which field changed; the other one is derived from it and
//! never fed back into the same step.

use jiff::civil::Date;
use thiserror::Error;

pub mod draft;
pub mod nights;
pub mod reconcile;

pub use draft::{BookingAction, BookingDraft, Checkout, CheckoutDates};
pub use nights::Nights;
pub use reconcile::{
    DateChangeOutcome, DurationChangeOutcome, reconcile_from_date_change,
    reconcile_from_duration_change,
};

/// Errors raised while editing a booking.
#[derive(Debug, Error)]
pub enum BookingError {
    /// Stay length outside the bookable range.
    #[error("a stay of {0} nights is outside {min}..={max}", min = Nights::MIN, max = Nights::MAX)]
    NightsOutOfRange(i64),

    /// Check-out date falls before the check-in date.
    #[error("check-out {end} is before check-in {start}")]
    InvertedRange {
        /// Check-in date
        start: Date,

        /// Check-out date
        end: Date,
    },

    /// Calendar arithmetic left the supported date range.
    #[error(transparent)]
    Date(#[from] jiff::Error),
}
