use form::{FetchError, SubmissionAck, ValidationError};

use super::*;

// =============================================================
// Members status
// =============================================================

#[test]
fn members_line_hidden_when_idle_or_loaded() {
    assert_eq!(members_status_line(&RequestStatus::Idle), None);
    assert_eq!(members_status_line(&RequestStatus::Succeeded(3)), None);
}

#[test]
fn members_line_reports_loading_and_empty() {
    assert_eq!(members_status_line(&RequestStatus::Pending).map(|(tone, _)| tone), Some(StatusTone::Info));
    assert_eq!(
        members_status_line(&RequestStatus::Succeeded(0)),
        Some((StatusTone::Info, "No members available.".to_owned()))
    );
}

#[test]
fn members_line_reports_failure() {
    let line = members_status_line(&RequestStatus::Failed(FetchError::Transport("connection refused".to_owned())));
    assert_eq!(
        line,
        Some((StatusTone::Error, "Could not load members: request failed: connection refused".to_owned()))
    );
}

// =============================================================
// Submit status
// =============================================================

#[test]
fn submit_line_shows_backend_message() {
    let ack = SubmissionAck(serde_json::json!({"message": "Data inserted successfully"}));
    assert_eq!(
        submit_status_line(&RequestStatus::Succeeded(ack)),
        Some((StatusTone::Success, "Data inserted successfully".to_owned()))
    );
}

#[test]
fn submit_line_defaults_when_ack_has_no_message() {
    let ack = SubmissionAck(serde_json::json!({}));
    assert_eq!(submit_status_line(&RequestStatus::Succeeded(ack)), Some((StatusTone::Success, "Submitted.".to_owned())));
}

#[test]
fn submit_line_distinguishes_validation_from_transport() {
    let invalid = submit_status_line(&RequestStatus::Failed(SubmitError::Invalid(ValidationError::MissingConsumer)));
    assert_eq!(invalid, Some((StatusTone::Error, "Check the form: select a consumer".to_owned())));

    let fetch = submit_status_line(&RequestStatus::Failed(SubmitError::Fetch(FetchError::Status {
        code: 500,
        message: "Failed to insert data".to_owned(),
    })));
    assert_eq!(fetch, Some((StatusTone::Error, "Submission failed: backend returned 500: Failed to insert data".to_owned())));
}

#[test]
fn submit_line_hidden_when_idle() {
    assert_eq!(submit_status_line(&RequestStatus::Idle), None);
}

#[test]
fn tone_classes_are_distinct() {
    assert_ne!(StatusTone::Info.class(), StatusTone::Success.class());
    assert_ne!(StatusTone::Success.class(), StatusTone::Error.class());
}
