//! reqwest transport for the backend's three endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Responses are read as text first so that non-2xx bodies can be folded into
//! [`FetchError::Status`] and non-JSON success bodies into
//! [`FetchError::Decode`], matching what the browser adapter reports.

use std::time::Duration;

use form::{Backend, FetchError, MemberMap, SubmissionAck, SubmissionRequest};
use serde_json::Value;

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    backend: Backend,
}

impl BackendClient {
    /// Build a client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(backend: Backend, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, backend })
    }

    #[must_use]
    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Probe `GET {base}/health`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the backend is unreachable or unhealthy.
    pub async fn health(&self) -> Result<Value, FetchError> {
        let response = self.http.get(self.backend.health_url()).send().await.map_err(transport)?;
        read_json(response).await
    }

    /// Fetch the member → consumers map from `GET {base}/members`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, non-2xx status, or a body
    /// that is not a JSON object of string arrays.
    pub async fn fetch_members(&self) -> Result<MemberMap, FetchError> {
        let response = self.http.get(self.backend.members_url()).send().await.map_err(transport)?;
        read_json(response).await
    }

    /// Post one record to `POST {base}/insert_tau_delta`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, non-2xx status, or a
    /// non-JSON acknowledgement.
    pub async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionAck, FetchError> {
        let response = self
            .http
            .post(self.backend.submit_url())
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }
}

fn transport(error: reqwest::Error) -> FetchError {
    FetchError::Transport(error.to_string())
}

async fn read_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, FetchError> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    if !status.is_success() {
        return Err(FetchError::from_status_body(status.as_u16(), &body));
    }
    serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
}
