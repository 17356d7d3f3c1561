use form::{FetchError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("invalid submission: {0}")]
    Invalid(#[from] ValidationError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
