//! Backend base URL and the endpoints the form talks to.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

pub const MEMBERS_PATH: &str = "/members";
pub const SUBMIT_PATH: &str = "/insert_tau_delta";
pub const HEALTH_PATH: &str = "/health";

/// Normalized backend base URL (no trailing slash).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backend {
    base_url: String,
}

impl Backend {
    /// Normalize `raw`; blank input falls back to [`DEFAULT_BACKEND_URL`].
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_BACKEND_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn members_url(&self) -> String {
        format!("{}{MEMBERS_PATH}", self.base_url)
    }

    #[must_use]
    pub fn submit_url(&self) -> String {
        format!("{}{SUBMIT_PATH}", self.base_url)
    }

    #[must_use]
    pub fn health_url(&self) -> String {
        format!("{}{HEALTH_PATH}", self.base_url)
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}
