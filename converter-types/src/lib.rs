//! # Converter Types
//!
//! Domain types and port traits for the currency converter.
//! This crate has ZERO IO dependencies - only value objects, the error
//! taxonomy, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Transient value objects (ConversionRequest, CurrencyPair, ConversionResult)
//! - `ports/` - Trait definitions that rate adapters must implement
//! - `error/` - Validation and conversion error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{ConversionRequest, ConversionResult, CurrencyPair, MAX_AMOUNT};
pub use error::{ConversionError, ValidationError};
pub use ports::{RateResponse, RateSource, TransportError};
