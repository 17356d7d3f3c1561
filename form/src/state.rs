//! Form state and the controller that owns it.
//!
//! DESIGN
//! ======
//! The controller is the only writer of form state. Each user interaction
//! maps to one handler, and each network exchange is split into a `begin_*`
//! call (before the request leaves) and a completion call (when the result
//! arrives), so transports stay outside this crate and tests can drive the
//! full lifecycle synchronously.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::error::{FetchError, SubmitError, ValidationError};
use crate::members::MemberMap;
use crate::policy::{MIN_DELTA_GAP, SubmitPolicy};
use crate::request::{SubmissionAck, SubmissionRequest, parse_float_prefix};
use crate::status::RequestStatus;

/// Outcome of the members fetch; success carries the member count.
pub type MembersStatus = RequestStatus<usize, FetchError>;

/// Outcome of the latest submission.
pub type SubmitStatus = RequestStatus<SubmissionAck, SubmitError>;

/// Raw user input. Numbers stay as typed until submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub selected_member: String,
    pub selected_consumer: String,
    pub tau: String,
    pub delta: String,
}

/// Identifies one submission so late results of superseded ones are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmitTicket(u64);

/// Owner of the member map, the form fields, and both request statuses.
#[derive(Clone, Debug, Default)]
pub struct FormController {
    members: MemberMap,
    form: FormState,
    policy: SubmitPolicy,
    members_requested: bool,
    members_status: MembersStatus,
    submit_status: SubmitStatus,
    last_ticket: u64,
}

impl FormController {
    #[must_use]
    pub fn new(policy: SubmitPolicy) -> Self {
        Self { policy, ..Self::default() }
    }

    // =========================================================================
    // MEMBERS FETCH
    // =========================================================================

    /// Claim the one members fetch of this controller's lifetime.
    ///
    /// Returns `true` the first time only; the caller then issues the request
    /// and reports back through [`Self::members_loaded`].
    pub fn begin_members_fetch(&mut self) -> bool {
        if self.members_requested {
            return false;
        }
        self.members_requested = true;
        self.members_status = RequestStatus::Pending;
        true
    }

    /// Record the members fetch result. A failure keeps the current map.
    pub fn members_loaded(&mut self, result: Result<MemberMap, FetchError>) {
        self.members_requested = true;
        match result {
            Ok(members) => {
                self.members_status = RequestStatus::Succeeded(members.len());
                self.members = members;
            }
            Err(error) => self.members_status = RequestStatus::Failed(error),
        }
    }

    // =========================================================================
    // FIELD HANDLERS
    // =========================================================================

    /// Select a member. Changing the member clears the consumer selection.
    pub fn select_member(&mut self, member: impl Into<String>) {
        let member = member.into();
        if member != self.form.selected_member {
            self.form.selected_consumer.clear();
        }
        self.form.selected_member = member;
    }

    pub fn select_consumer(&mut self, consumer: impl Into<String>) {
        self.form.selected_consumer = consumer.into();
    }

    pub fn set_tau(&mut self, tau: impl Into<String>) {
        self.form.tau = tau.into();
    }

    pub fn set_delta(&mut self, delta: impl Into<String>) {
        self.form.delta = delta.into();
    }

    // =========================================================================
    // SUBMISSION
    // =========================================================================

    /// Validate the form and mark a submission in flight.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] (also recorded as the submit status)
    /// when the form cannot produce a request; nothing should be sent.
    pub fn begin_submit(&mut self) -> Result<(SubmitTicket, SubmissionRequest), ValidationError> {
        match SubmissionRequest::from_form(&self.form, self.policy) {
            Ok(request) => {
                self.last_ticket += 1;
                self.submit_status = RequestStatus::Pending;
                Ok((SubmitTicket(self.last_ticket), request))
            }
            Err(error) => {
                self.submit_status = RequestStatus::Failed(SubmitError::Invalid(error.clone()));
                Err(error)
            }
        }
    }

    /// Record the result of the submission identified by `ticket`.
    ///
    /// Returns `false` when a newer submission has been started since, in
    /// which case the result is discarded.
    pub fn finish_submit(&mut self, ticket: SubmitTicket, result: Result<SubmissionAck, FetchError>) -> bool {
        if ticket.0 != self.last_ticket {
            return false;
        }
        self.submit_status = result.map_err(SubmitError::Fetch).into();
        true
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn members(&self) -> &MemberMap {
        &self.members
    }

    #[must_use]
    pub fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    #[must_use]
    pub fn members_status(&self) -> &MembersStatus {
        &self.members_status
    }

    #[must_use]
    pub fn submit_status(&self) -> &SubmitStatus {
        &self.submit_status
    }

    /// Member ids for the member dropdown, in backend order.
    pub fn member_options(&self) -> impl Iterator<Item = &str> {
        self.members.members()
    }

    /// Consumers of the selected member; empty when none is selected.
    #[must_use]
    pub fn consumer_options(&self) -> &[String] {
        if self.form.selected_member.is_empty() {
            return &[];
        }
        self.members.consumers_of(&self.form.selected_member)
    }

    #[must_use]
    pub fn consumer_enabled(&self) -> bool {
        !self.form.selected_member.is_empty()
    }

    /// Lower bound suggested for delta, when tau currently reads as a number.
    #[must_use]
    pub fn delta_min_hint(&self) -> Option<f64> {
        Some(parse_float_prefix(&self.form.tau) + MIN_DELTA_GAP).filter(|min| min.is_finite())
    }
}
