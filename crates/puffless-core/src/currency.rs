//! Supported currencies and their reference data.
//!
//! One entry per supported market currency: the smallest acceptable
//! monthly spend, a display symbol, and a static exchange rate against
//! the reference currency (USD). Rates are bundled approximations used
//! only for display estimates -- real charging happens in the
//! subscription provider with its own authoritative pricing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported currency codes (LATAM markets plus the USD reference).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Ars,
    Bob,
    Clp,
    Cop,
    Crc,
    Dop,
    Gtq,
    Hnl,
    Mxn,
    Nio,
    Pab,
    Pen,
    Pyg,
    Usd,
    Uyu,
}

impl CurrencyCode {
    /// ISO 4217 code.
    pub fn as_str(self) -> &'static str {
        match self {
            CurrencyCode::Ars => "ARS",
            CurrencyCode::Bob => "BOB",
            CurrencyCode::Clp => "CLP",
            CurrencyCode::Cop => "COP",
            CurrencyCode::Crc => "CRC",
            CurrencyCode::Dop => "DOP",
            CurrencyCode::Gtq => "GTQ",
            CurrencyCode::Hnl => "HNL",
            CurrencyCode::Mxn => "MXN",
            CurrencyCode::Nio => "NIO",
            CurrencyCode::Pab => "PAB",
            CurrencyCode::Pen => "PEN",
            CurrencyCode::Pyg => "PYG",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Uyu => "UYU",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TABLE
            .iter()
            .find(|e| e.code.as_str().eq_ignore_ascii_case(s))
            .map(|e| e.code)
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

/// Parse error for [`CurrencyCode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurrency(pub String);

impl fmt::Display for UnknownCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown currency code: {}", self.0)
    }
}

impl std::error::Error for UnknownCurrency {}

/// Static reference data for one supported currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrencyEntry {
    pub code: CurrencyCode,
    /// Smallest monthly spend the intake flow accepts, in this currency.
    pub minimum_amount: f64,
    /// Display symbol.
    pub symbol: &'static str,
    /// Units of this currency per 1 unit of the reference currency.
    pub rate_to_reference: f64,
}

/// The currency all bundled base prices are quoted in.
pub const REFERENCE_CURRENCY: CurrencyCode = CurrencyCode::Usd;

const TABLE: [CurrencyEntry; 15] = [
    CurrencyEntry { code: CurrencyCode::Ars, minimum_amount: 18_000.0, symbol: "$", rate_to_reference: 900.0 },
    CurrencyEntry { code: CurrencyCode::Bob, minimum_amount: 140.0, symbol: "Bs", rate_to_reference: 6.9 },
    CurrencyEntry { code: CurrencyCode::Clp, minimum_amount: 18_000.0, symbol: "$", rate_to_reference: 910.0 },
    CurrencyEntry { code: CurrencyCode::Cop, minimum_amount: 80_000.0, symbol: "$", rate_to_reference: 4_000.0 },
    CurrencyEntry { code: CurrencyCode::Crc, minimum_amount: 10_000.0, symbol: "₡", rate_to_reference: 520.0 },
    CurrencyEntry { code: CurrencyCode::Dop, minimum_amount: 1_200.0, symbol: "RD$", rate_to_reference: 59.0 },
    CurrencyEntry { code: CurrencyCode::Gtq, minimum_amount: 160.0, symbol: "Q", rate_to_reference: 7.8 },
    CurrencyEntry { code: CurrencyCode::Hnl, minimum_amount: 500.0, symbol: "L", rate_to_reference: 24.7 },
    CurrencyEntry { code: CurrencyCode::Mxn, minimum_amount: 400.0, symbol: "$", rate_to_reference: 17.0 },
    CurrencyEntry { code: CurrencyCode::Nio, minimum_amount: 750.0, symbol: "C$", rate_to_reference: 36.6 },
    CurrencyEntry { code: CurrencyCode::Pab, minimum_amount: 20.0, symbol: "B/.", rate_to_reference: 1.0 },
    CurrencyEntry { code: CurrencyCode::Pen, minimum_amount: 75.0, symbol: "S/", rate_to_reference: 3.7 },
    CurrencyEntry { code: CurrencyCode::Pyg, minimum_amount: 150_000.0, symbol: "₲", rate_to_reference: 7_300.0 },
    CurrencyEntry { code: CurrencyCode::Usd, minimum_amount: 20.0, symbol: "$", rate_to_reference: 1.0 },
    CurrencyEntry { code: CurrencyCode::Uyu, minimum_amount: 800.0, symbol: "$U", rate_to_reference: 39.0 },
];

/// All supported currencies, in code order.
pub fn entries() -> &'static [CurrencyEntry] {
    &TABLE
}

/// Reference data for a known currency.
pub fn entry(code: CurrencyCode) -> &'static CurrencyEntry {
    // TABLE rows are in enum declaration order.
    &TABLE[code as usize]
}

/// Look up a currency by its string code, case-insensitive.
pub fn lookup(code: &str) -> Option<&'static CurrencyEntry> {
    TABLE
        .iter()
        .find(|e| e.code.as_str().eq_ignore_ascii_case(code))
}

/// Smallest acceptable monthly spend for `code`.
///
/// Unrecognized codes yield 0.0 -- the spend validator fails open on
/// unknown currencies.
pub fn minimum_amount(code: &str) -> f64 {
    lookup(code).map(|e| e.minimum_amount).unwrap_or(0.0)
}
