//! Interpretation of raw rate responses.
//!
//! Success body: `{ "data": { "<CODE>": <number> } }`.
//! Error body: `{ "error": { "message": "..." } }`.

use converter_types::{ConversionError, RateResponse, TransportError};
use serde_json::Value;

const GENERIC_REMOTE_ERROR: &str = "The exchange rate service reported an error.";

/// Turns one transport outcome into the rate for `dest`.
pub fn interpret_response(
    outcome: Result<RateResponse, TransportError>,
    dest: &str,
) -> Result<f64, ConversionError> {
    let response = outcome.map_err(|e| ConversionError::Network { detail: e.0 })?;

    if !response.is_success() {
        return Err(ConversionError::HttpStatus {
            code: response.status,
        });
    }

    let body: Value =
        serde_json::from_str(&response.body).map_err(|_| ConversionError::MalformedResponse)?;
    let body = body.as_object().ok_or(ConversionError::MalformedResponse)?;

    if let Some(error) = body.get("error").filter(|e| !e.is_null()) {
        return Err(ConversionError::RemoteApi {
            message: remote_error_message(error),
        });
    }

    let data = body
        .get("data")
        .and_then(Value::as_object)
        .ok_or(ConversionError::MalformedResponse)?;

    data.get(dest)
        .and_then(Value::as_f64)
        .filter(|rate| rate.is_finite() && *rate > 0.0)
        .ok_or_else(|| ConversionError::UnsupportedCurrency {
            code: dest.to_string(),
        })
}

fn remote_error_message(error: &Value) -> String {
    let message = match error {
        Value::String(s) => Some(s.as_str()),
        Value::Object(obj) => obj.get("message").and_then(Value::as_str),
        _ => None,
    };
    match message.map(str::trim) {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => GENERIC_REMOTE_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(body: &str) -> Result<RateResponse, TransportError> {
        Ok(RateResponse::new(200, body))
    }

    fn unsupported(code: &str) -> ConversionError {
        ConversionError::UnsupportedCurrency { code: code.into() }
    }

    #[test]
    fn test_extracts_rate() {
        let rate = interpret_response(ok(r#"{"data":{"USD":0.73}}"#), "USD").unwrap();
        assert_eq!(rate, 0.73);
    }

    #[test]
    fn test_transport_failure_is_network_error() {
        let err = interpret_response(Err(TransportError("connection refused".into())), "USD")
            .unwrap_err();
        assert_eq!(
            err,
            ConversionError::Network {
                detail: "connection refused".into()
            }
        );
    }

    #[test]
    fn test_non_success_status_maps_to_http_error() {
        for code in [400, 401, 404, 429, 500, 502, 302] {
            let err =
                interpret_response(Ok(RateResponse::new(code, r#"{"data":{}}"#)), "USD").unwrap_err();
            assert_eq!(err, ConversionError::HttpStatus { code });
        }
    }

    #[test]
    fn test_unparseable_body_is_malformed() {
        for body in ["", "<html>", "[1,2]", "42", r#"{"rates":{"USD":1}}"#, r#"{"data":[]}"#] {
            let err = interpret_response(ok(body), "USD").unwrap_err();
            assert_eq!(err, ConversionError::MalformedResponse, "body {:?}", body);
        }
    }

    #[test]
    fn test_remote_error_object_surfaces_message() {
        let err = interpret_response(
            ok(r#"{"error":{"message":"Invalid base currency"}}"#),
            "USD",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConversionError::RemoteApi {
                message: "Invalid base currency".into()
            }
        );
    }

    #[test]
    fn test_remote_error_takes_precedence_over_data() {
        let err = interpret_response(
            ok(r#"{"data":{"USD":0.7},"error":"quota exhausted"}"#),
            "USD",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "quota exhausted");
    }

    #[test]
    fn test_remote_error_without_message_uses_fallback() {
        let err = interpret_response(ok(r#"{"error":{"code":17}}"#), "USD").unwrap_err();
        assert_eq!(err.to_string(), GENERIC_REMOTE_ERROR);
    }

    #[test]
    fn test_null_error_member_is_ignored() {
        let rate = interpret_response(ok(r#"{"data":{"EUR":1.1},"error":null}"#), "EUR").unwrap();
        assert_eq!(rate, 1.1);
    }

    #[test]
    fn test_bad_rates_are_unsupported_currency() {
        for body in [
            r#"{"data":{}}"#,
            r#"{"data":{"EUR":0.9}}"#,
            r#"{"data":{"USD":0}}"#,
            r#"{"data":{"USD":-1.2}}"#,
            r#"{"data":{"USD":"0.73"}}"#,
            r#"{"data":{"USD":null}}"#,
        ] {
            let err = interpret_response(ok(body), "USD").unwrap_err();
            assert_eq!(err, unsupported("USD"), "body {:?}", body);
        }
    }
}
