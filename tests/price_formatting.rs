//! Rupiah conversion and formatting as seen on listing cards.

use staycation::prelude::*;

#[test]
fn conversion_uses_the_fixed_rate() {
    assert_eq!(USD_TO_IDR_RATE, 15_000);
    assert_eq!(convert_usd_to_idr(0.0), 0);
    assert_eq!(convert_usd_to_idr(f64::NAN), 0);
    assert_eq!(convert_usd_to_idr(10.0), 10 * USD_TO_IDR_RATE);
}

#[test]
fn zero_shows_currency_marker() {
    let formatted = format_idr_currency(0.0, true);

    assert!(formatted.contains("Rp"));
    assert!(formatted.contains('0'));
}

#[test]
fn bare_number_has_grouped_digits_and_no_marker() {
    let formatted = format_idr_currency(1_000_000.0, false);

    assert!(!formatted.contains("Rp"));
    assert_eq!(formatted, "1.000.000");
}

#[test]
fn structured_price_uses_its_own_period() {
    assert!(format_price(Price::structured(100.0).per("night"), "").ends_with("/night"));
}

#[test]
fn bare_price_uses_caller_unit() {
    assert!(format_price(100.0, "month").ends_with("/month"));
}

#[test]
fn missing_price_renders_zero() {
    assert_eq!(format_price(Price::Missing, ""), "Rp 0");
    assert_eq!(format_price(None::<f64>, ""), "Rp 0");
}

#[test]
fn nightly_villa_price() {
    assert_eq!(format_price(250.0, "night"), "Rp 3.750.000/night");
}

#[test]
fn value_field_is_a_fallback_amount() {
    let price = Price::Structured(StructuredPrice {
        value: Some(400.0),
        unit: Some("month".to_string()),
        ..StructuredPrice::default()
    });

    assert_eq!(format_price(price, "night"), "Rp 6.000.000/month");
}
