//! Staycation CLI

use std::io;

use anyhow::Result;
use clap::Parser;
use staycation::{cli::Cli, dates::today, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_subscriber(&cli.logging)?;

    cli.run(today(), &mut io::stdout().lock())
}
