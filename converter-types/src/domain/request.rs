//! Conversion request as supplied by the form, and the normalized pair sent upstream.

use std::fmt;

/// Largest amount the converter accepts.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Raw form input for one conversion attempt.
///
/// Fields hold exactly what the UI collected; nothing is trimmed or
/// upper-cased here. Validation happens in the core before any request is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Currency being converted from (e.g. "CAD")
    pub base_currency: String,
    /// Currency being converted to (e.g. "USD")
    pub dest_currency: String,
    /// Decimal amount in the base currency
    pub amount: String,
}

impl ConversionRequest {
    /// Creates a request from raw field values.
    pub fn new(
        base_currency: impl Into<String>,
        dest_currency: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            base_currency: base_currency.into(),
            dest_currency: dest_currency.into(),
            amount: amount.into(),
        }
    }
}

impl Default for ConversionRequest {
    /// The form's initial state: 1 CAD to USD.
    fn default() -> Self {
        Self::new("CAD", "USD", "1")
    }
}

/// Upper-cased base/destination codes, ready for transmission.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    base: String,
    dest: String,
}

impl CurrencyPair {
    /// Creates a pair, upper-casing both codes.
    pub fn new(base: &str, dest: &str) -> Self {
        Self {
            base: base.to_ascii_uppercase(),
            dest: dest.to_ascii_uppercase(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn dest(&self) -> &str {
        &self.dest
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.dest)
    }
}
