//! Submit flow driven through the same controller the browser form uses.
//!
//! The members map is fetched once, then the command-line values are fed
//! through the controller's field handlers in the order a user would pick
//! them, so validation and request construction match the UI exactly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use form::{FormController, SubmissionAck, SubmitPolicy};

use crate::backend::BackendClient;
use crate::error::CliError;

/// Raw command-line input for one submission.
#[derive(Debug, Clone, Default)]
pub struct SubmitInput {
    pub member: String,
    pub consumer: String,
    pub tau: String,
    pub delta: String,
}

/// Run the one members fetch of `controller`, logging the outcome.
///
/// A failure is recorded on the controller and does not stop the caller.
/// Returns `false` when the fetch was already claimed or failed.
pub async fn load_members(client: &BackendClient, controller: &mut FormController) -> bool {
    if !controller.begin_members_fetch() {
        return false;
    }
    let result = client.fetch_members().await;
    match &result {
        Ok(members) => tracing::info!(count = members.len(), "members fetched"),
        Err(error) => tracing::error!(%error, "error fetching members"),
    }
    let ok = result.is_ok();
    controller.members_loaded(result);
    ok
}

/// Validate `input` under `policy` and post it.
///
/// # Errors
///
/// Returns [`CliError::Invalid`] when the form is rejected before sending and
/// [`CliError::Fetch`] when the backend exchange fails.
pub async fn run_submit(
    client: &BackendClient,
    policy: SubmitPolicy,
    input: &SubmitInput,
) -> Result<SubmissionAck, CliError> {
    let mut controller = FormController::new(policy);
    load_members(client, &mut controller).await;

    controller.select_member(input.member.as_str());
    controller.select_consumer(input.consumer.as_str());
    match unlisted_selection(&controller) {
        Some(Unlisted::Member) => tracing::warn!(member = %input.member, "member is not listed by the backend"),
        Some(Unlisted::Consumer) => {
            tracing::warn!(member = %input.member, consumer = %input.consumer, "consumer is not listed for member");
        }
        None => {}
    }
    controller.set_tau(input.tau.as_str());
    controller.set_delta(input.delta.as_str());

    let (ticket, request) = controller.begin_submit()?;
    tracing::debug!(?request, "submitting");

    let result = client.submit(&request).await;
    match &result {
        Ok(ack) => tracing::info!(body = %ack.body(), "submission accepted"),
        Err(error) => tracing::error!(%error, "submission failed"),
    }
    controller.finish_submit(ticket, result.clone());
    result.map_err(CliError::from)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unlisted {
    Member,
    Consumer,
}

/// Which part of the current selection the loaded members map does not list.
///
/// Nothing is reported while the map is empty (fetch failed or no members).
fn unlisted_selection(controller: &FormController) -> Option<Unlisted> {
    if controller.members().is_empty() {
        return None;
    }
    let form = controller.form();
    if !controller.members().contains(&form.selected_member) {
        Some(Unlisted::Member)
    } else if !controller.consumer_options().contains(&form.selected_consumer) {
        Some(Unlisted::Consumer)
    } else {
        None
    }
}
