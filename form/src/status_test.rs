use super::*;

type Status = RequestStatus<u32, String>;

#[test]
fn default_is_idle() {
    let status = Status::default();
    assert!(status.is_idle());
    assert!(!status.is_pending());
}

#[test]
fn accessors_match_variant() {
    assert_eq!(Status::Succeeded(7).succeeded(), Some(&7));
    assert_eq!(Status::Succeeded(7).failed(), None);
    assert_eq!(Status::Failed("boom".to_owned()).failed().map(String::as_str), Some("boom"));
    assert!(Status::Pending.is_pending());
    assert_eq!(Status::Pending.succeeded(), None);
}

#[test]
fn from_result_maps_ok_and_err() {
    assert_eq!(Status::from(Ok(1)), Status::Succeeded(1));
    assert_eq!(Status::from(Err("no".to_owned())), Status::Failed("no".to_owned()));
}
