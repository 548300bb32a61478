use std::io;

use anyhow::Context;
use clap::Args;
use jiff::civil::Date;
use tracing::info;

use crate::{
    booking::{BookingAction, BookingDraft, Nights},
    config::FixtureConfig,
    dates::DateRange,
    fixtures::Fixture,
    quote::Quote,
};

/// Arguments for `staycation quote`
#[derive(Debug, Args)]
pub struct QuoteArgs {
    #[command(flatten)]
    fixtures: FixtureConfig,

    /// Listing id
    #[arg(short, long)]
    listing: String,

    /// Check-in date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    check_in: Option<Date>,

    /// Stay length in nights, clamped to 1..=30
    #[arg(short, long, conflicts_with = "check_out", allow_negative_numbers = true)]
    nights: Option<i64>,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long)]
    check_out: Option<Date>,
}

pub(super) fn run(args: &QuoteArgs, today: Date, out: &mut impl io::Write) -> anyhow::Result<()> {
    let mut fixture = Fixture::with_base_path(&args.fixtures.fixtures);
    fixture
        .load_listings(&args.fixtures.set)
        .with_context(|| format!("loading fixture set {}", args.fixtures.set))?;

    let listing = fixture.listing(&args.listing)?;
    let check_in = args.check_in.unwrap_or(today);

    let mut draft = BookingDraft::new(listing.id.clone(), check_in);

    if let Some(nights) = args.nights {
        draft = draft.apply(BookingAction::DurationChanged(Nights::clamped(nights)))?;
    }

    if let Some(check_out) = args.check_out {
        draft = draft.apply(BookingAction::DateRangeChanged(DateRange::new(
            check_in, check_out,
        )))?;
    }

    info!(
        listing = %listing.id,
        check_in = %draft.date().start_date,
        nights = %draft.duration(),
        "quoting stay"
    );

    Quote::for_draft(listing, &draft)?.write_to(out)?;

    Ok(())
}
