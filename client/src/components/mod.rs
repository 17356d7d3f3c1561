//! UI components for the tau/delta page.
//!
//! ARCHITECTURE
//! ============
//! `TauDeltaForm` owns the form controller; `StatusLine` renders the request
//! statuses it exposes.

pub mod status_line;
pub mod tau_delta_form;
