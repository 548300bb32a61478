//! Command line interface

use std::io;

use clap::{Parser, Subcommand};
use jiff::civil::Date;

use crate::config::LoggingConfig;

mod listings;
mod quote;
mod rate;

pub use listings::ListingsArgs;
pub use quote::QuoteArgs;

/// Staycation CLI
#[derive(Debug, Parser)]
#[command(name = "staycation", about = "Stay quotes in Indonesian Rupiah", long_about = None)]
pub struct Cli {
    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Price a stay at one listing
    Quote(QuoteArgs),

    /// List the listings in a fixture set with their Rupiah prices
    Listings(ListingsArgs),

    /// Show the USD to IDR exchange rate
    Rate,
}

impl Cli {
    /// Runs the selected command, writing its output to `out`.
    ///
    /// `today` is the default check-in date and the date the rate is shown for.
    ///
    /// # Errors
    ///
    /// Returns an error if fixtures cannot be loaded, an edit is rejected, or
    /// writing the output fails.
    pub fn run(self, today: Date, out: &mut impl io::Write) -> anyhow::Result<()> {
        match self.command {
            Commands::Quote(args) => quote::run(&args, today, out),
            Commands::Listings(args) => listings::run(&args, out),
            Commands::Rate => rate::run(today, out),
        }
    }
}
