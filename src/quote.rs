//! Quotes
//!
//! Prices a booking draft against its listing and renders the checkout summary.

use std::io;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    booking::{BookingDraft, Nights},
    currency::{convert_usd_to_idr, format_idr_currency, idr_money, usd_money},
    dates::DateRange,
    listings::Listing,
};

/// Errors that can occur when building or printing a quote.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The draft was started for a different listing.
    #[error("draft is for listing {draft}, not {listing}")]
    ListingMismatch {
        /// Listing id on the draft
        draft: String,

        /// Listing id being quoted
        listing: String,
    },

    /// IO error
    #[error("IO error")]
    IO,
}

/// Price of a stay at one listing.
#[derive(Debug, Clone)]
pub struct Quote {
    listing_name: String,
    location: String,
    price_label: String,
    unit: String,
    nights: Nights,
    dates: DateRange,
    total_usd: Money<'static, Currency>,
    total_idr: Money<'static, Currency>,
}

impl Quote {
    /// Prices `draft` at `listing`: the unit price times the number of nights.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::ListingMismatch`] if the draft belongs to another listing.
    pub fn for_draft(listing: &Listing, draft: &BookingDraft) -> Result<Self, QuoteError> {
        if draft.item_id() != listing.id {
            return Err(QuoteError::ListingMismatch {
                draft: draft.item_id().to_string(),
                listing: listing.id.clone(),
            });
        }

        let nights = draft.duration();
        let total = listing.price.amount() * f64::from(nights.get());

        Ok(Self {
            listing_name: listing.name.clone(),
            location: listing.location(),
            price_label: listing.price_label(),
            unit: listing.unit().to_string(),
            nights,
            dates: draft.date().clone(),
            total_usd: usd_money(total),
            total_idr: idr_money(convert_usd_to_idr(total)),
        })
    }

    /// Number of nights quoted.
    pub fn nights(&self) -> Nights {
        self.nights
    }

    /// Total in US dollars.
    pub fn total_usd(&self) -> Money<'static, Currency> {
        self.total_usd
    }

    /// Total in Rupiah.
    pub fn total_idr(&self) -> Money<'static, Currency> {
        self.total_idr
    }

    /// Rupiah total for the stay, e.g. `You will pay Rp 18.750.000 per 5 nights`.
    pub fn pay_label(&self) -> String {
        format!(
            "You will pay {} per {}",
            format_idr_currency(rupiah(self.total_idr.amount()), true),
            self.stay_label()
        )
    }

    /// Dollar total for the stay, e.g. `$1250 USD per 5 nights`.
    pub fn usd_summary(&self) -> String {
        format!(
            "${} USD per {}",
            self.total_usd.amount().normalize(),
            self.stay_label()
        )
    }

    /// `N unit`, pluralised for more than one.
    fn stay_label(&self) -> String {
        let plural = if self.nights.get() > 1 { "s" } else { "" };

        format!("{} {}{plural}", self.nights, self.unit)
    }

    /// Prints the quote as a table followed by the totals.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::IO`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), QuoteError> {
        let mut builder = Builder::default();

        builder.push_record(["Listing", "Details"]);

        for (label, value) in [
            (self.listing_name.clone(), self.location.clone()),
            ("Price".to_string(), self.price_label.clone()),
            ("Check-in".to_string(), self.dates.start_date.to_string()),
            ("Check-out".to_string(), self.dates.end_date.to_string()),
            ("Duration".to_string(), self.stay_label()),
        ] {
            builder.push_record([label, value]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(1..2), Alignment::right());

        writeln!(out, "{table}").map_err(|_err| QuoteError::IO)?;
        writeln!(out, "{}", self.pay_label()).map_err(|_err| QuoteError::IO)?;
        writeln!(out, "{}", self.usd_summary()).map_err(|_err| QuoteError::IO)
    }
}

/// Rupiah money amounts are whole numbers; widen for the display formatter.
fn rupiah(amount: &Decimal) -> f64 {
    amount.to_f64().unwrap_or(0.0)
}
