//! # Rates Client
//!
//! `RateSource` adapter for the freecurrencyapi.com `latest` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use converter_types::{CurrencyPair, RateResponse, RateSource, TransportError};
use reqwest::Client;

/// Public endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.freecurrencyapi.com/v1/latest";

/// Error type for client construction.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Latest-rates API client.
pub struct FreeCurrencyClient {
    endpoint: String,
    api_key: String,
    http: Client,
}

impl FreeCurrencyClient {
    /// Creates a client for the public endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    /// Points the client at a different endpoint (full URL, without query).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Bounds each request by `timeout`. An elapsed timeout is a transport failure.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ClientError> {
        self.http = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, pair: &CurrencyPair) -> reqwest::RequestBuilder {
        self.http.get(&self.endpoint).query(&[
            ("apikey", self.api_key.as_str()),
            ("base_currency", pair.base()),
            ("currencies", pair.dest()),
        ])
    }
}

#[async_trait]
impl RateSource for FreeCurrencyClient {
    #[tracing::instrument(skip(self, pair), fields(pair = %pair, endpoint = %self.endpoint))]
    async fn fetch_latest(&self, pair: &CurrencyPair) -> Result<RateResponse, TransportError> {
        let resp = self.request(pair).send().await.map_err(transport_error)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(transport_error)?;
        tracing::debug!(status, bytes = body.len(), "rate response received");
        Ok(RateResponse::new(status, body))
    }
}

// Request URLs carry the API key; stored errors keep no URL.
fn transport_error(err: reqwest::Error) -> TransportError {
    TransportError(err.without_url().to_string())
}
