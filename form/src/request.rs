//! Submission payload and its construction from form state.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{NumericField, ValidationError};
use crate::policy::{DeltaGap, MIN_DELTA_GAP, NumberParsing, SubmitPolicy};
use crate::state::FormState;

/// Body of `POST /insert_tau_delta`.
///
/// Integral values go out as JSON integers (`10`, not `10.0`). Non-finite
/// numbers serialize as JSON `null`; only lenient parsing can produce them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub consumer_id: String,
    pub member_id: String,
    #[serde(serialize_with = "serialize_number")]
    pub tau: f64,
    #[serde(serialize_with = "serialize_number")]
    pub delta: f64,
}

/// Largest magnitude below which every integral `f64` is exact.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
fn serialize_number<S: serde::Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl SubmissionRequest {
    /// Build a request from the current form under `policy`.
    ///
    /// # Errors
    ///
    /// Strict parsing rejects empty selections and non-numeric input;
    /// an enforced delta gap rejects `delta < tau + 60`.
    pub fn from_form(form: &FormState, policy: SubmitPolicy) -> Result<Self, ValidationError> {
        let (tau, delta) = match policy.numbers {
            NumberParsing::Strict => {
                if form.selected_member.is_empty() {
                    return Err(ValidationError::MissingMember);
                }
                if form.selected_consumer.is_empty() {
                    return Err(ValidationError::MissingConsumer);
                }
                (parse_strict(NumericField::Tau, &form.tau)?, parse_strict(NumericField::Delta, &form.delta)?)
            }
            NumberParsing::Lenient => (parse_float_prefix(&form.tau), parse_float_prefix(&form.delta)),
        };

        if policy.delta_gap == DeltaGap::Enforce && tau.is_finite() && delta.is_finite() {
            let min_delta = tau + MIN_DELTA_GAP;
            if delta < min_delta {
                return Err(ValidationError::DeltaGap { tau, delta, min_delta });
            }
        }

        Ok(Self {
            consumer_id: form.selected_consumer.clone(),
            member_id: form.selected_member.clone(),
            tau,
            delta,
        })
    }
}

fn parse_strict(field: NumericField, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::InvalidNumber { field, raw: raw.to_owned() })
}

/// Parse the longest leading decimal literal, `NaN` when there is none.
///
/// Mirrors how browsers coerce number-input text: leading whitespace is
/// skipped, trailing garbage is ignored, and `Infinity` is recognized.
#[must_use]
pub fn parse_float_prefix(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    let negative = matches!(bytes.first(), Some(b'-'));
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_end = end;

    let mut frac_end = int_end;
    if end < bytes.len() && bytes[end] == b'.' {
        frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
    }
    let frac_digits = frac_end.saturating_sub(int_end + 1);
    if int_end == int_start && frac_digits == 0 {
        return f64::NAN;
    }
    end = frac_end;

    let mantissa_end = end;
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut probe = end + 1;
        if probe < bytes.len() && matches!(bytes[probe], b'+' | b'-') {
            probe += 1;
        }
        let exp_start = probe;
        while probe < bytes.len() && bytes[probe].is_ascii_digit() {
            probe += 1;
        }
        if probe > exp_start {
            end = probe;
        }
    }

    let int_part = if int_end == int_start { "0" } else { &text[int_start..int_end] };
    let frac_part = if frac_digits == 0 { "0" } else { &text[int_end + 1..frac_end] };
    let literal = format!("{}{int_part}.{frac_part}{}", &text[..int_start], &text[mantissa_end..end]);
    literal.parse::<f64>().unwrap_or(f64::NAN)
}

/// Acknowledgement returned by the backend after a submission.
///
/// The body is not interpreted beyond the optional `message` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionAck(pub Value);

impl SubmissionAck {
    /// The backend's human-readable `message`, if it sent one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    #[must_use]
    pub fn body(&self) -> &Value {
        &self.0
    }
}
