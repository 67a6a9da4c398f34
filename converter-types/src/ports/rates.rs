//! Exchange rate source port.
//!
//! This trait defines the interface for fetching the latest rate.
//! Implementations can be HTTP clients, mock sources, etc.

use crate::domain::CurrencyPair;

/// The request could not be completed at the transport level
/// (no connectivity, DNS, TLS, timeout, truncated body).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// Raw outcome of one rate lookup, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateResponse {
    pub status: u16,
    pub body: String,
}

impl RateResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port trait for exchange rate sources.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync {
    /// Issues exactly one lookup for `pair.dest()` against `pair.base()`.
    ///
    /// Any HTTP status is returned as `Ok`; only transport failures are `Err`.
    async fn fetch_latest(&self, pair: &CurrencyPair) -> Result<RateResponse, TransportError>;
}
