//! Conversion Service
//!
//! Orchestrates one conversion: validate, fetch the rate through the
//! `RateSource` port, interpret the response, format the result.
//! Contains NO transport logic.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use converter_types::{
    ConversionError, ConversionRequest, ConversionResult, RateSource, ValidationError,
};

use crate::interpret::interpret_response;
use crate::validator::{self, ValidatedConversion};

/// Read-only view of a service's in-flight flag.
///
/// Cloneable so a UI can poll it to toggle a spinner or disable its trigger.
#[derive(Debug, Clone)]
pub struct InFlight(Arc<AtomicBool>);

impl InFlight {
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Clears the flag when dropped, including when the conversion future is cancelled.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Application service for currency conversion.
///
/// Generic over `S: RateSource` - the adapter is injected at compile time.
/// At most one conversion is outstanding per instance.
pub struct ConversionService<S: RateSource> {
    source: S,
    in_flight: Arc<AtomicBool>,
}

impl<S: RateSource> ConversionService<S> {
    /// Creates a new conversion service with the given rate source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns a reference to the underlying rate source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// True while a request has been issued and not yet resolved.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn in_flight_handle(&self) -> InFlight {
        InFlight(Arc::clone(&self.in_flight))
    }

    /// Runs the validation rules only. Never touches the network.
    pub fn validate(&self, req: &ConversionRequest) -> Result<(), ValidationError> {
        validator::validate(req)
    }

    /// Converts `req.amount` from base to destination currency.
    ///
    /// Single attempt, no retry. Validation failures return before the
    /// in-flight flag is set; every later exit path clears it.
    #[tracing::instrument(
        skip(self, req),
        fields(base = %req.base_currency, dest = %req.dest_currency)
    )]
    pub async fn convert(
        &self,
        req: &ConversionRequest,
    ) -> Result<ConversionResult, ConversionError> {
        let ValidatedConversion { pair, amount } = validator::validated(req).inspect_err(|e| {
            tracing::info!(reason = %e, "conversion rejected by validation");
        })?;

        let _guard = self.begin()?;

        tracing::debug!(%pair, "requesting latest rate");
        let outcome = self.source.fetch_latest(&pair).await;

        let rate = interpret_response(outcome, pair.dest()).inspect_err(|e| match e {
            ConversionError::Network { detail } => {
                tracing::warn!(%pair, %detail, "rate request failed in transport")
            }
            other => tracing::warn!(%pair, kind = other.kind(), error = %other, "rate request failed"),
        })?;

        let converted = amount * rate;
        if !converted.is_finite() {
            return Err(ConversionError::UnsupportedCurrency {
                code: pair.dest().to_string(),
            });
        }

        tracing::info!(%pair, rate, "conversion succeeded");
        Ok(ConversionResult::from_values(converted, rate))
    }

    fn begin(&self) -> Result<InFlightGuard<'_>, ConversionError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ConversionError::Busy)?;
        Ok(InFlightGuard(&self.in_flight))
    }
}
