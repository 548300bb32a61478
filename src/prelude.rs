//! Staycation prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    booking::{
        BookingAction, BookingDraft, BookingError, Checkout, CheckoutDates, DateChangeOutcome,
        DurationChangeOutcome, Nights, reconcile_from_date_change, reconcile_from_duration_change,
    },
    currency::{
        ExchangeRateInfo, Price, StructuredPrice, USD_TO_IDR_RATE, convert_and_format_price,
        convert_usd_to_idr, exchange_rate_info, format_idr_currency, format_price,
    },
    dates::{DateRange, days_between},
    fixtures::{Fixture, FixtureError},
    listings::Listing,
    quote::{Quote, QuoteError},
    session::{AppAction, AppState, User},
};
