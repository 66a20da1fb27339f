//! Localized price estimates.
//!
//! Converts a base price quoted in the reference currency into a display
//! amount for the user's market, using the static rates bundled with the
//! currency table. The result is an estimate for screens only; the
//! subscription provider charges with its own authoritative pricing.

use crate::currency::{self, CurrencyCode};

/// Convert a base price in the reference currency (USD) into `code` units.
pub fn localized_price(base_reference_price: f64, code: CurrencyCode) -> f64 {
    base_reference_price * currency::entry(code).rate_to_reference
}

/// Render an amount with the currency's display symbol.
pub fn format_price(amount: f64, code: CurrencyCode) -> String {
    let entry = currency::entry(code);
    if amount.fract() == 0.0 {
        format!("{}{:.0}", entry.symbol, amount)
    } else {
        format!("{}{:.2}", entry.symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_price_is_identity() {
        assert_eq!(localized_price(9.99, CurrencyCode::Usd), 9.99);
    }

    #[test]
    fn converts_with_table_rate() {
        // CRC rate is 520 per USD
        assert_eq!(localized_price(10.0, CurrencyCode::Crc), 5_200.0);
        // MXN rate is 17 per USD
        assert_eq!(localized_price(2.0, CurrencyCode::Mxn), 34.0);
    }

    #[test]
    fn zero_base_price_localizes_to_zero() {
        assert_eq!(localized_price(0.0, CurrencyCode::Cop), 0.0);
    }

    #[test]
    fn format_uses_symbol_and_trims_whole_amounts() {
        assert_eq!(format_price(5_200.0, CurrencyCode::Crc), "₡5200");
        assert_eq!(format_price(9.99, CurrencyCode::Usd), "$9.99");
    }
}
