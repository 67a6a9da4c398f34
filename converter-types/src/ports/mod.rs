//! Port traits (interfaces for adapters).
//!
//! The converter core depends on these traits, not on a concrete HTTP client.

mod rates;

pub use rates::{RateResponse, RateSource, TransportError};
