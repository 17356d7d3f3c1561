//! Submission policy: how raw input becomes numbers, and whether the
//! `delta >= tau + 60` gap rejects a submission or only hints at it.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Minimum distance between `tau` and `delta`.
pub const MIN_DELTA_GAP: f64 = 60.0;

/// How `tau`/`delta` text is turned into numbers at submit time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberParsing {
    /// Input must be a finite number; anything else rejects the submission.
    #[default]
    Strict,
    /// Longest numeric prefix, `NaN` otherwise. Sent as-is.
    Lenient,
}

/// Treatment of the `delta >= tau + 60` gap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaGap {
    /// Reject submissions that violate the gap.
    #[default]
    Enforce,
    /// Only surface the gap as the delta input's `min` attribute.
    Hint,
}

/// Combined policy applied by [`crate::FormController::begin_submit`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitPolicy {
    pub numbers: NumberParsing,
    pub delta_gap: DeltaGap,
}

impl SubmitPolicy {
    /// Behavior of the legacy form: parse leniently, never reject.
    #[must_use]
    pub fn legacy() -> Self {
        Self { numbers: NumberParsing::Lenient, delta_gap: DeltaGap::Hint }
    }
}

/// Error returned when a policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}` (expected {expected})")]
pub struct PolicyParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl FromStr for NumberParsing {
    type Err = PolicyParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" | "legacy" => Ok(Self::Lenient),
            _ => Err(PolicyParseError {
                kind: "number parsing",
                value: raw.to_owned(),
                expected: "strict|lenient",
            }),
        }
    }
}

impl FromStr for DeltaGap {
    type Err = PolicyParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "enforce" => Ok(Self::Enforce),
            "hint" => Ok(Self::Hint),
            _ => Err(PolicyParseError { kind: "delta gap", value: raw.to_owned(), expected: "enforce|hint" }),
        }
    }
}

impl fmt::Display for NumberParsing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        })
    }
}

impl fmt::Display for DeltaGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Enforce => "enforce",
            Self::Hint => "hint",
        })
    }
}
