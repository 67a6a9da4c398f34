//! Domain models for a single conversion attempt.

pub mod request;
pub mod result;

pub use request::{ConversionRequest, CurrencyPair, MAX_AMOUNT};
pub use result::ConversionResult;
