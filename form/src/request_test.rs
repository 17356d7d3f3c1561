use super::*;

fn filled(member: &str, consumer: &str, tau: &str, delta: &str) -> FormState {
    FormState {
        selected_member: member.to_owned(),
        selected_consumer: consumer.to_owned(),
        tau: tau.to_owned(),
        delta: delta.to_owned(),
    }
}

// =============================================================
// Strict parsing
// =============================================================

#[test]
fn strict_builds_request_from_valid_form() {
    let req = SubmissionRequest::from_form(&filled("A", "x", "10", "100"), SubmitPolicy::default()).expect("valid form");
    assert_eq!(
        req,
        SubmissionRequest { consumer_id: "x".to_owned(), member_id: "A".to_owned(), tau: 10.0, delta: 100.0 }
    );
}

#[test]
fn strict_serializes_expected_wire_body() {
    let req = SubmissionRequest::from_form(&filled("A", "x", "10", "100"), SubmitPolicy::default()).expect("valid form");
    let body = serde_json::to_value(&req).expect("serialize");
    assert_eq!(body, serde_json::json!({"consumer_id": "x", "member_id": "A", "tau": 10, "delta": 100}));
    let text = serde_json::to_string(&req).expect("serialize");
    assert_eq!(text, r#"{"consumer_id":"x","member_id":"A","tau":10,"delta":100}"#);
}

#[test]
fn fractional_and_negative_numbers_keep_their_value_on_the_wire() {
    let req = SubmissionRequest::from_form(&filled("A", "x", "-2.5", "62.5"), SubmitPolicy::default()).expect("valid form");
    let text = serde_json::to_string(&req).expect("serialize");
    assert_eq!(text, r#"{"consumer_id":"x","member_id":"A","tau":-2.5,"delta":62.5}"#);

    let req = SubmissionRequest::from_form(&filled("A", "x", "-0", "1e3"), SubmitPolicy::default()).expect("valid form");
    let body = serde_json::to_value(&req).expect("serialize");
    assert_eq!(body["tau"], serde_json::json!(0));
    assert_eq!(body["delta"], serde_json::json!(1000));
}

#[test]
fn serialized_request_reads_back() {
    let req = SubmissionRequest::from_form(&filled("A", "x", "10", "100"), SubmitPolicy::default()).expect("valid form");
    let text = serde_json::to_string(&req).expect("serialize");
    let back: SubmissionRequest = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back, req);
}

#[test]
fn strict_rejects_missing_member_then_consumer() {
    let policy = SubmitPolicy::default();
    assert_eq!(
        SubmissionRequest::from_form(&filled("", "x", "10", "100"), policy),
        Err(ValidationError::MissingMember)
    );
    assert_eq!(
        SubmissionRequest::from_form(&filled("A", "", "10", "100"), policy),
        Err(ValidationError::MissingConsumer)
    );
}

#[test]
fn strict_rejects_empty_tau() {
    let err = SubmissionRequest::from_form(&filled("A", "x", "", "100"), SubmitPolicy::default()).expect_err("empty tau");
    assert_eq!(err, ValidationError::InvalidNumber { field: NumericField::Tau, raw: String::new() });
}

#[test]
fn strict_rejects_non_numeric_and_non_finite_delta() {
    for raw in ["abc", "12abc", "NaN", "inf"] {
        let err = SubmissionRequest::from_form(&filled("A", "x", "0", raw), SubmitPolicy::default())
            .expect_err("delta should be rejected");
        assert_eq!(err, ValidationError::InvalidNumber { field: NumericField::Delta, raw: raw.to_owned() });
    }
}

#[test]
fn strict_trims_surrounding_whitespace() {
    let req = SubmissionRequest::from_form(&filled("A", "x", " 1.5 ", "61.5\n"), SubmitPolicy::default()).expect("valid form");
    assert!((req.tau - 1.5).abs() < f64::EPSILON);
    assert!((req.delta - 61.5).abs() < f64::EPSILON);
}

// =============================================================
// Delta gap
// =============================================================

#[test]
fn enforced_gap_rejects_delta_below_tau_plus_sixty() {
    let err = SubmissionRequest::from_form(&filled("A", "x", "10", "69.9"), SubmitPolicy::default()).expect_err("gap");
    assert!(matches!(err, ValidationError::DeltaGap { min_delta, .. } if (min_delta - 70.0).abs() < f64::EPSILON));
}

#[test]
fn enforced_gap_accepts_exact_boundary() {
    assert!(SubmissionRequest::from_form(&filled("A", "x", "10", "70"), SubmitPolicy::default()).is_ok());
}

#[test]
fn hinted_gap_sends_violating_values() {
    let policy = SubmitPolicy { delta_gap: DeltaGap::Hint, ..SubmitPolicy::default() };
    let req = SubmissionRequest::from_form(&filled("A", "x", "10", "11"), policy).expect("hint only");
    assert!((req.delta - 11.0).abs() < f64::EPSILON);
}

// =============================================================
// Lenient parsing
// =============================================================

#[test]
fn lenient_sends_nan_tau_as_null() {
    let req = SubmissionRequest::from_form(&filled("A", "x", "", "100"), SubmitPolicy::legacy()).expect("lenient");
    assert!(req.tau.is_nan());
    let body = serde_json::to_value(&req).expect("serialize");
    assert_eq!(body["tau"], serde_json::Value::Null);
    assert_eq!(body["delta"], serde_json::json!(100));
}

#[test]
fn lenient_sends_empty_selections() {
    let req = SubmissionRequest::from_form(&FormState::default(), SubmitPolicy::legacy()).expect("lenient");
    assert_eq!(req.member_id, "");
    assert_eq!(req.consumer_id, "");
}

#[test]
fn lenient_with_enforced_gap_skips_nan_comparison() {
    let policy = SubmitPolicy { numbers: NumberParsing::Lenient, delta_gap: DeltaGap::Enforce };
    assert!(SubmissionRequest::from_form(&filled("A", "x", "abc", "1"), policy).is_ok());
    assert!(SubmissionRequest::from_form(&filled("A", "x", "10", "1"), policy).is_err());
}

#[test]
fn parse_float_prefix_reads_leading_literal() {
    assert!((parse_float_prefix("10") - 10.0).abs() < f64::EPSILON);
    assert!((parse_float_prefix("  3.25xyz") - 3.25).abs() < f64::EPSILON);
    assert!((parse_float_prefix("-.5") + 0.5).abs() < f64::EPSILON);
    assert!((parse_float_prefix("5.") - 5.0).abs() < f64::EPSILON);
    assert!((parse_float_prefix("1e3") - 1000.0).abs() < f64::EPSILON);
    assert!((parse_float_prefix("2E-1") - 0.2).abs() < f64::EPSILON);
    assert!((parse_float_prefix("7e") - 7.0).abs() < f64::EPSILON);
    assert!((parse_float_prefix("+4.e1") - 40.0).abs() < f64::EPSILON);
}

#[test]
fn parse_float_prefix_handles_infinity_and_garbage() {
    assert_eq!(parse_float_prefix("Infinity"), f64::INFINITY);
    assert_eq!(parse_float_prefix("-Infinityx"), f64::NEG_INFINITY);
    assert!(parse_float_prefix("").is_nan());
    assert!(parse_float_prefix(".").is_nan());
    assert!(parse_float_prefix("abc").is_nan());
    assert!(parse_float_prefix("-").is_nan());
}

// =============================================================
// Acknowledgement
// =============================================================

#[test]
fn ack_exposes_backend_message() {
    let ack = SubmissionAck(serde_json::json!({"message": "Data inserted successfully", "tau": 10.0}));
    assert_eq!(ack.message(), Some("Data inserted successfully"));
    assert_eq!(ack.body()["tau"], serde_json::json!(10.0));
}

#[test]
fn ack_without_message_is_none() {
    assert_eq!(SubmissionAck(serde_json::json!([1, 2])).message(), None);
}
