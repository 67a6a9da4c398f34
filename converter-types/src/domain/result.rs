//! Outcome of a successful conversion.

use serde::{Deserialize, Serialize};

/// Converted amount and rate, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// `amount * rate`, fixed to 5 decimal places
    pub converted_amount: String,
    /// Units of destination currency per base unit, fixed to 10 decimal places
    pub exchange_rate: String,
}

impl ConversionResult {
    /// Formats a converted amount and rate.
    pub fn from_values(converted_amount: f64, exchange_rate: f64) -> Self {
        Self {
            converted_amount: format!("{:.5}", converted_amount),
            exchange_rate: format!("{:.10}", exchange_rate),
        }
    }
}
