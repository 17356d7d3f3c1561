//! Inline feedback for the members fetch and the latest submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both network exchanges report through the controller's request statuses;
//! this component turns them into one line each so pending, failed, and
//! successful exchanges look different on screen.

#[cfg(test)]
#[path = "status_line_test.rs"]
mod status_line_test;

use form::state::{MembersStatus, SubmitStatus};
use form::{FormController, RequestStatus, SubmitError};
use leptos::prelude::*;

/// Visual tone of a status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Error,
}

impl StatusTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "status-line status-line--info",
            Self::Success => "status-line status-line--ok",
            Self::Error => "status-line status-line--error",
        }
    }
}

/// Line shown for the members fetch, if any.
pub(crate) fn members_status_line(status: &MembersStatus) -> Option<(StatusTone, String)> {
    match status {
        RequestStatus::Idle | RequestStatus::Succeeded(1..) => None,
        RequestStatus::Pending => Some((StatusTone::Info, "Loading members...".to_owned())),
        RequestStatus::Succeeded(0) => Some((StatusTone::Info, "No members available.".to_owned())),
        RequestStatus::Failed(e) => Some((StatusTone::Error, format!("Could not load members: {e}"))),
    }
}

/// Line shown for the latest submission, if any.
pub(crate) fn submit_status_line(status: &SubmitStatus) -> Option<(StatusTone, String)> {
    match status {
        RequestStatus::Idle => None,
        RequestStatus::Pending => Some((StatusTone::Info, "Submitting...".to_owned())),
        RequestStatus::Succeeded(ack) => {
            Some((StatusTone::Success, ack.message().unwrap_or("Submitted.").to_owned()))
        }
        RequestStatus::Failed(SubmitError::Invalid(e)) => Some((StatusTone::Error, format!("Check the form: {e}"))),
        RequestStatus::Failed(SubmitError::Fetch(e)) => Some((StatusTone::Error, format!("Submission failed: {e}"))),
    }
}

/// Members and submission feedback, each rendered only when there is
/// something to say.
#[component]
pub fn StatusLine(controller: RwSignal<FormController>) -> impl IntoView {
    let members_line = move || controller.with(|c| members_status_line(c.members_status()));
    let submit_line = move || controller.with(|c| submit_status_line(c.submit_status()));

    view! {
        <div class="status-lines" aria-live="polite">
            {move || {
                members_line()
                    .map(|(tone, text)| view! { <p class=tone.class()>{text}</p> })
            }}
            {move || {
                submit_line()
                    .map(|(tone, text)| view! { <p class=tone.class()>{text}</p> })
            }}
        </div>
    }
}
