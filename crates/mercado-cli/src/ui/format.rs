//! Money and quantity rendering.
//!
//! Amounts render to two decimal places everywhere a human reads them; the
//! full-precision values only appear in JSON output.

use chrono::{DateTime, Utc};
use mercado_core::Currency;

/// Two-decimal amount, no currency marker: `3.00`.
pub fn money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// USD amount with the dollar sign: `$3.00`.
pub fn usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// VES amount with the code suffix: `200.00 VES`.
pub fn ves(amount: f64) -> String {
    format!("{:.2} VES", amount)
}

/// Unit price in its own currency: `1.50 USD`, `80.00 VES`.
pub fn unit_price(price: f64, currency: Currency) -> String {
    format!("{:.2} {}", price, currency.code())
}

/// Quantity without trailing zeros: `2`, `2.5`, `0.25`.
pub fn quantity(q: f64) -> String {
    let rendered = format!("{:.2}", q);
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Timestamp for human output: `2026-08-25 14:03`.
pub fn datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_two_decimals() {
        assert_eq!(money(3.0), "3.00");
        assert_eq!(money(5.0), "5.00");
        assert_eq!(money(200.0), "200.00");
        assert_eq!(money(0.012), "0.01");
        assert_eq!(money(2.675), "2.67");
    }

    #[test]
    fn test_currency_markers() {
        assert_eq!(usd(5.0), "$5.00");
        assert_eq!(ves(200.0), "200.00 VES");
        assert_eq!(unit_price(1.5, Currency::Usd), "1.50 USD");
        assert_eq!(unit_price(80.0, Currency::Ves), "80.00 VES");
    }

    #[test]
    fn test_quantity_trims_trailing_zeros() {
        assert_eq!(quantity(2.0), "2");
        assert_eq!(quantity(2.5), "2.5");
        assert_eq!(quantity(2.25), "2.25");
        assert_eq!(quantity(0.0), "0");
        assert_eq!(quantity(10.0), "10");
        // The step buttons move in tenths.
        assert_eq!(quantity(2.1), "2.1");
    }

    #[test]
    fn test_datetime_format() {
        let dt = DateTime::parse_from_rfc3339("2026-08-25T14:03:59Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(datetime(&dt), "2026-08-25 14:03");
    }
}
