//! Form core for the tau/delta submission front-end.
//!
//! This crate owns everything the UI and the CLI share: the member map
//! received from the backend, the four-field form state, the controller that
//! mutates it, and the validated request that gets posted. It performs no
//! I/O; transports live in `client` (browser) and `cli` (reqwest) and feed
//! their results back through [`FormController`].

pub mod endpoint;
pub mod error;
pub mod members;
pub mod policy;
pub mod request;
pub mod state;
pub mod status;

pub use endpoint::{Backend, DEFAULT_BACKEND_URL};
pub use error::{FetchError, NumericField, SubmitError, ValidationError};
pub use members::MemberMap;
pub use policy::{DeltaGap, MIN_DELTA_GAP, NumberParsing, PolicyParseError, SubmitPolicy};
pub use request::{SubmissionAck, SubmissionRequest};
pub use state::{FormController, FormState, SubmitTicket};
pub use status::RequestStatus;
