//! Form validation.
//!
//! Rules run in a fixed order and the first failure wins:
//!
//! 1. both currency fields non-empty
//! 2. amount present and greater than zero
//! 3. base and destination differ (case-insensitive)
//! 4. base is three ASCII letters
//! 5. destination is three ASCII letters
//! 6. amount at most [`MAX_AMOUNT`]

use converter_types::{ConversionRequest, CurrencyPair, MAX_AMOUNT, ValidationError};

/// A request that passed every rule, with its codes upper-cased and amount parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConversion {
    pub pair: CurrencyPair,
    pub amount: f64,
}

/// Checks a request without keeping the parsed values.
pub fn validate(req: &ConversionRequest) -> Result<(), ValidationError> {
    validated(req).map(|_| ())
}

/// Checks a request and returns the normalized pair and parsed amount.
pub fn validated(req: &ConversionRequest) -> Result<ValidatedConversion, ValidationError> {
    let base = req.base_currency.as_str();
    let dest = req.dest_currency.as_str();

    if base.is_empty() || dest.is_empty() {
        return Err(ValidationError::MissingCurrencies);
    }

    // NaN fails the comparison too
    let amount = parse_amount(&req.amount)
        .filter(|a| *a > 0.0)
        .ok_or(ValidationError::InvalidAmount)?;

    if base.eq_ignore_ascii_case(dest) {
        return Err(ValidationError::SameCurrency);
    }

    if !is_currency_code(base) {
        return Err(ValidationError::InvalidBaseCurrency);
    }

    if !is_currency_code(dest) {
        return Err(ValidationError::InvalidDestCurrency);
    }

    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge);
    }

    Ok(ValidatedConversion {
        pair: CurrencyPair::new(base, dest),
        amount,
    })
}

fn parse_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok()
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(base: &str, dest: &str, amount: &str) -> ConversionRequest {
        ConversionRequest::new(base, dest, amount)
    }

    #[test]
    fn test_valid_request_passes() {
        let v = validated(&req("cad", "usd", "100")).unwrap();
        assert_eq!(v.pair.base(), "CAD");
        assert_eq!(v.pair.dest(), "USD");
        assert_eq!(v.amount, 100.0);
    }

    #[test]
    fn test_valid_range_boundaries() {
        assert!(validate(&req("EUR", "GBP", "0.0001")).is_ok());
        assert!(validate(&req("EUR", "GBP", "1000000000")).is_ok());
        assert!(validate(&req("EUR", "GBP", ".5")).is_ok());
        assert!(validate(&req("EUR", "GBP", "5.")).is_ok());
    }

    #[test]
    fn test_missing_currency() {
        assert_eq!(
            validate(&req("", "USD", "1")),
            Err(ValidationError::MissingCurrencies)
        );
    }

    #[test]
    fn test_whitespace_codes_are_not_letters() {
        assert_eq!(
            validate(&req("   ", "USD", "1")),
            Err(ValidationError::InvalidBaseCurrency)
        );
        assert_eq!(
            validate(&req("CAD", "  ", "1")),
            Err(ValidationError::InvalidDestCurrency)
        );
        assert_eq!(
            validate(&req(" CAD", "USD", "10")),
            Err(ValidationError::InvalidBaseCurrency)
        );
        assert_eq!(
            validate(&req("CAD", "USD ", "10")),
            Err(ValidationError::InvalidDestCurrency)
        );
    }

    #[test]
    fn test_non_positive_or_non_numeric_amount() {
        for amount in ["", "0", "0.0", "-5", "abc", ".", "NaN"] {
            assert_eq!(
                validate(&req("CAD", "USD", amount)),
                Err(ValidationError::InvalidAmount),
                "amount {:?}",
                amount
            );
        }
    }

    #[test]
    fn test_amount_rule_ignores_currency_problems() {
        assert_eq!(
            validate(&req("CA", "CA", "0")),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(
            validate(&req("C4D", "US", "x")),
            Err(ValidationError::InvalidAmount)
        );
    }

    #[test]
    fn test_same_currency_is_case_insensitive() {
        assert_eq!(
            validate(&req("usd", "USD", "10")),
            Err(ValidationError::SameCurrency)
        );
        assert_eq!(
            validate(&req("eur", "eur", "10")),
            Err(ValidationError::SameCurrency)
        );
    }

    #[test]
    fn test_base_checked_before_dest() {
        assert_eq!(
            validate(&req("CA", "US", "10")),
            Err(ValidationError::InvalidBaseCurrency)
        );
        assert_eq!(
            validate(&req("CAD", "US", "10")),
            Err(ValidationError::InvalidDestCurrency)
        );
        assert_eq!(
            validate(&req("C4D", "USD", "10")),
            Err(ValidationError::InvalidBaseCurrency)
        );
        assert_eq!(
            validate(&req("CAD", "USDX", "10")),
            Err(ValidationError::InvalidDestCurrency)
        );
    }

    #[test]
    fn test_amount_upper_bound() {
        assert_eq!(
            validate(&req("CAD", "USD", "1000000000.01")),
            Err(ValidationError::AmountTooLarge)
        );
        assert_eq!(
            validate(&req("CAD", "USD", "inf")),
            Err(ValidationError::AmountTooLarge)
        );
    }

    #[test]
    fn test_rule_order_is_pinned() {
        // every rule violated at once
        assert_eq!(
            validate(&req("", "", "")),
            Err(ValidationError::MissingCurrencies)
        );
        // empty amount, same codes, short codes
        assert_eq!(
            validate(&req("us", "US", "")),
            Err(ValidationError::InvalidAmount)
        );
        // same codes that are also malformed
        assert_eq!(
            validate(&req("u1", "U1", "5")),
            Err(ValidationError::SameCurrency)
        );
        // both codes malformed and amount too large
        assert_eq!(
            validate(&req("AB", "CD", "2000000000")),
            Err(ValidationError::InvalidBaseCurrency)
        );
        assert_eq!(
            validate(&req("ABC", "CD", "2000000000")),
            Err(ValidationError::InvalidDestCurrency)
        );
    }
}
