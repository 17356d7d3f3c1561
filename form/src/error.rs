//! Error taxonomy shared by the browser and CLI transports.
//!
//! ERROR HANDLING
//! ==============
//! Transports never panic on a bad response; every failure is folded into a
//! [`FetchError`] and recorded on the controller so the UI can render it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

use serde_json::Value;

/// Failure of one HTTP exchange with the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, refused connection, CORS, timeout).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("backend returned {code}: {message}")]
    Status { code: u16, message: String },
    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// No transport is available in this build (server-side rendering).
    #[error("network requests are only available in the browser")]
    Unavailable,
}

impl FetchError {
    /// Build a [`FetchError::Status`] from a non-2xx response body.
    ///
    /// The backend reports failures as `{"error": "..."}`; other bodies are
    /// used verbatim, and an empty body falls back to the bare status code.
    #[must_use]
    pub fn from_status_body(code: u16, body: &str) -> Self {
        let from_json = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| value.get("error").and_then(Value::as_str).map(ToOwned::to_owned));
        let message = match from_json {
            Some(message) => message,
            None if body.trim().is_empty() => format!("HTTP {code}"),
            None => body.trim().to_owned(),
        };
        Self::Status { code, message }
    }
}

/// Numeric form field, used to point validation errors at an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Tau,
    Delta,
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tau => "tau",
            Self::Delta => "delta",
        })
    }
}

/// Reason a form could not be turned into a submission request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("select a member")]
    MissingMember,
    #[error("select a consumer")]
    MissingConsumer,
    #[error("{field} must be a number, got `{raw}`")]
    InvalidNumber { field: NumericField, raw: String },
    #[error("delta must be at least tau + 60 ({min_delta}), got {delta}")]
    DeltaGap { tau: f64, delta: f64, min_delta: f64 },
}

/// Failure of a submission, either before sending or during the exchange.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
