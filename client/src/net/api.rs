//! HTTP calls from the browser to the tau/delta backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`FetchError::Unavailable`] since the
//! form only talks to the backend from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as a [`FetchError`] so the form can show it;
//! nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use form::{Backend, FetchError, MemberMap, SubmissionAck, SubmissionRequest};

#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: serde::de::DeserializeOwned>(status: u16, ok: bool, body: &str) -> Result<T, FetchError> {
    if !ok {
        return Err(FetchError::from_status_body(status, body));
    }
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch the member → consumers map from `GET {base}/members`.
///
/// # Errors
///
/// Returns [`FetchError`] on network failure, non-2xx status, or a body
/// that is not a JSON object of string arrays.
pub async fn fetch_members(backend: &Backend) -> Result<MemberMap, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&backend.members_url())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let body = resp.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;
        decode_body(resp.status(), resp.ok(), &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = backend;
        Err(FetchError::Unavailable)
    }
}

/// Post one tau/delta record to `POST {base}/insert_tau_delta`.
///
/// # Errors
///
/// Returns [`FetchError`] on network failure, non-2xx status, or a
/// non-JSON acknowledgement.
pub async fn submit_tau_delta(backend: &Backend, request: &SubmissionRequest) -> Result<SubmissionAck, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&backend.submit_url())
            .json(request)
            .map_err(|e| FetchError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let body = resp.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;
        decode_body(resp.status(), resp.ok(), &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (backend, request);
        Err(FetchError::Unavailable)
    }
}
