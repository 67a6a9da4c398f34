//! Error types for the currency converter.

/// Form validation failures, one per rule.
///
/// Variants are listed in the order the validator checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter both base and destination currencies")]
    MissingCurrencies,

    #[error("Please enter a valid amount")]
    InvalidAmount,

    #[error("Base and destination currencies cannot be the same")]
    SameCurrency,

    #[error("Base currency must be a 3-letter code")]
    InvalidBaseCurrency,

    #[error("Destination currency must be a 3-letter code")]
    InvalidDestCurrency,

    #[error("Amount cannot exceed 1,000,000,000")]
    AmountTooLarge,
}

/// Every way a conversion attempt can fail.
///
/// The `Display` text is the user-facing message shown by the UI.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Network error. Please check your connection and try again.")]
    Network { detail: String },

    #[error("{}", http_status_message(.code))]
    HttpStatus { code: u16 },

    #[error("{message}")]
    RemoteApi { message: String },

    #[error("Received an invalid response from the exchange rate service.")]
    MalformedResponse,

    #[error("Exchange rate not available for {code}.")]
    UnsupportedCurrency { code: String },

    #[error("A conversion is already in progress.")]
    Busy,
}

impl ConversionError {
    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::Validation(_) => "validation",
            ConversionError::Network { .. } => "network",
            ConversionError::HttpStatus { .. } => "http_status",
            ConversionError::RemoteApi { .. } => "remote_api",
            ConversionError::MalformedResponse => "malformed_response",
            ConversionError::UnsupportedCurrency { .. } => "unsupported_currency",
            ConversionError::Busy => "busy",
        }
    }
}

fn http_status_message(code: &u16) -> String {
    match *code {
        400 => "Invalid request. Please check the currency codes.".into(),
        401 => "Invalid or expired API key.".into(),
        404 => "Currency not found.".into(),
        429 => "Rate limit exceeded. Please try again later.".into(),
        500.. => "Exchange rate service is unavailable. Please try again later.".into(),
        other => format!("Request failed with status {}.", other),
    }
}
