//! Staycation
//!
//! Booking and pricing core for a vacation-rental marketplace: keeps a booking
//! form's stay length and dates in step, and renders USD listing prices as
//! Indonesian Rupiah.

pub mod booking;
pub mod cli;
pub mod config;
pub mod currency;
pub mod dates;
pub mod fixtures;
pub mod listings;
pub mod logging;
pub mod prelude;
pub mod quote;
pub mod session;
