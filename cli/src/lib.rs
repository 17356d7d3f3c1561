//! Terminal client for the tau/delta backend.
//!
//! The binary in `main.rs` parses arguments; this library holds the reqwest
//! transport and the submit flow so they can be exercised against a mock
//! backend.

pub mod backend;
pub mod error;
pub mod session;

pub use backend::BackendClient;
pub use error::CliError;
pub use session::{SubmitInput, load_members, run_submit};
