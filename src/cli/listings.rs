use std::io;

use anyhow::Context;
use clap::Args;
use tabled::{builder::Builder, settings::Style};

use crate::{config::FixtureConfig, fixtures::Fixture};

/// Arguments for `staycation listings`
#[derive(Debug, Args)]
pub struct ListingsArgs {
    #[command(flatten)]
    fixtures: FixtureConfig,
}

pub(super) fn run(args: &ListingsArgs, out: &mut impl io::Write) -> anyhow::Result<()> {
    let mut fixture = Fixture::with_base_path(&args.fixtures.fixtures);
    fixture
        .load_listings(&args.fixtures.set)
        .with_context(|| format!("loading fixture set {}", args.fixtures.set))?;

    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Location", "Price"]);

    for listing in fixture.listings() {
        builder.push_record([
            listing.id.clone(),
            listing.name.clone(),
            listing.location(),
            listing.price_label(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    writeln!(out, "{table}")?;

    Ok(())
}
