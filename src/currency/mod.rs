//! Currency
//!
//! Converts USD listing prices to Indonesian Rupiah and renders them for
//! display. Nothing here fails: malformed or missing amounts render as zero.
//! This is a display path, not a ledger; amounts arrive as `f64` and are only
//! rounded, never settled.

use jiff::civil::Date;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{
    Formatter, Money, Params,
    Position::{Amount, Sign, Space, Symbol},
    iso::{self, Currency},
};

use crate::dates::indonesian_short_date;

pub mod price;

pub use price::{Price, StructuredPrice};

/// Rupiah per US dollar. Fixed; rates are not fetched.
pub const USD_TO_IDR_RATE: i64 = 15_000;

/// Indonesian thousands separator.
const IDR_DIGIT_SEPARATOR: char = '.';

/// Groups of three, covering every digit a `Decimal` can hold.
const IDR_SEPARATOR_PATTERN: &[usize] = &[3; 9];

/// Converts a USD amount to whole Rupiah.
///
/// The product is rounded half away from zero. Zero, negative and
/// non-finite amounts, and products too large to represent, all give `0`.
pub fn convert_usd_to_idr(usd_amount: f64) -> i64 {
    if !usd_amount.is_finite() || usd_amount <= 0.0 {
        return 0;
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "the rate is far below 2^52 and converts exactly"
    )]
    let idr = usd_amount * USD_TO_IDR_RATE as f64;

    Decimal::from_f64(idr)
        .map(|value| value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|value| value.to_i64())
        .unwrap_or(0)
}

/// Formats a Rupiah amount with Indonesian digit grouping and no fraction digits.
///
/// With `show_currency` the amount is prefixed with `Rp `. Amounts are rounded
/// half away from zero. Zero and non-finite amounts render as `Rp 0` (or `0`),
/// as do finite amounts beyond the `Decimal` range (about `7.9e28`).
pub fn format_idr_currency(amount: f64, show_currency: bool) -> String {
    let rounded = Decimal::from_f64(amount)
        .filter(|_| amount.is_finite())
        .map(|value| value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .filter(|value| !value.is_zero())
        .unwrap_or(Decimal::ZERO);

    let positions = if show_currency {
        &[Sign, Symbol, Space, Amount][..]
    } else {
        &[Sign, Amount][..]
    };

    Formatter::money(
        &Money::from_decimal(rounded, iso::IDR),
        Params {
            digit_separator: IDR_DIGIT_SEPARATOR,
            separator_pattern: IDR_SEPARATOR_PATTERN,
            positions,
            rounding: Some(0),
            symbol: Some(iso::IDR.symbol),
            ..Params::default()
        },
    )
}

/// Converts a USD amount and formats it as Rupiah, followed by `period_suffix`
/// (e.g. `/night`) when it is not empty.
pub fn convert_and_format_price(usd_amount: f64, period_suffix: &str) -> String {
    #[expect(
        clippy::cast_precision_loss,
        reason = "display only; rupiah totals stay well inside f64 precision"
    )]
    let idr = convert_usd_to_idr(usd_amount) as f64;

    format!("{}{period_suffix}", format_idr_currency(idr, true))
}

/// Formats a listing price in Rupiah with an optional `/period` suffix.
///
/// A period carried by a structured price wins over `unit`.
pub fn format_price(price: impl Into<Price>, unit: &str) -> String {
    let price = price.into();
    let period = price.period().unwrap_or(unit);

    let suffix = if period.is_empty() {
        String::new()
    } else {
        format!("/{period}")
    };

    convert_and_format_price(price.amount(), &suffix)
}

/// Rupiah amount as money.
pub fn idr_money(amount: i64) -> Money<'static, Currency> {
    Money::from_decimal(Decimal::from(amount), iso::IDR)
}

/// USD amount as money, rounded to whole cents. Non-finite or
/// unrepresentable amounts become zero.
pub fn usd_money(amount: f64) -> Money<'static, Currency> {
    let amount = Decimal::from_f64(amount)
        .filter(|_| amount.is_finite())
        .map_or(Decimal::ZERO, |value| {
            value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        });

    Money::from_decimal(amount, iso::USD)
}

/// Exchange rate details for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRateInfo {
    /// Rupiah per US dollar
    pub rate: i64,

    /// Human-readable rate, e.g. `1 USD = Rp 15.000`
    pub formatted: String,

    /// Date the rate is shown for, in Indonesian short form
    pub last_updated: String,
}

/// Describes the fixed exchange rate as of `today`.
pub fn exchange_rate_info(today: Date) -> ExchangeRateInfo {
    #[expect(
        clippy::cast_precision_loss,
        reason = "the rate is far below 2^52 and converts exactly"
    )]
    let rate = USD_TO_IDR_RATE as f64;

    ExchangeRateInfo {
        rate: USD_TO_IDR_RATE,
        formatted: format!(
            "1 {} = {}",
            iso::USD.iso_alpha_code,
            format_idr_currency(rate, true)
        ),
        last_updated: indonesian_short_date(today),
    }
}
