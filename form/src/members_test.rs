use super::*;

fn sample() -> MemberMap {
    serde_json::from_str(r#"{"A": ["x", "y"], "B": []}"#).expect("member map")
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn deserialize_keeps_backend_key_order() {
    let map: MemberMap = serde_json::from_str(r#"{"zeta": [], "alpha": ["c"], "mid": ["a"]}"#).expect("member map");
    assert_eq!(map.members().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn deserialize_lists_integer_keys_first_in_numeric_order() {
    let map: MemberMap = serde_json::from_str(r#"{"b": [], "2": [], "1": [], "10": [], "a": ["x"]}"#).expect("member map");
    assert_eq!(map.members().collect::<Vec<_>>(), vec!["1", "2", "10", "b", "a"]);
    assert_eq!(map.consumers_of("a"), ["x".to_owned()]);
}

#[test]
fn deserialize_treats_non_canonical_numbers_as_names() {
    let map: MemberMap =
        serde_json::from_str(r#"{"07": [], "-1": [], "4294967295": [], "3": [], "1.5": []}"#).expect("member map");
    assert_eq!(map.members().collect::<Vec<_>>(), vec!["3", "07", "-1", "4294967295", "1.5"]);
}

#[test]
fn deserialize_sample_exposes_members_and_consumers() {
    let map = sample();
    assert_eq!(map.members().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(map.consumers_of("A"), ["x".to_owned(), "y".to_owned()]);
    assert!(map.consumers_of("B").is_empty());
}

#[test]
fn deserialize_repeated_key_keeps_first_position_and_last_value() {
    let map: MemberMap = serde_json::from_str(r#"{"A": ["old"], "B": [], "A": ["new"]}"#).expect("member map");
    assert_eq!(map.members().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(map.consumers_of("A"), ["new".to_owned()]);
}

#[test]
fn deserialize_rejects_non_object_body() {
    assert!(serde_json::from_str::<MemberMap>(r#"["A", "B"]"#).is_err());
}

#[test]
fn deserialize_rejects_non_string_consumers() {
    assert!(serde_json::from_str::<MemberMap>(r#"{"A": [1, 2]}"#).is_err());
}

#[test]
fn serialize_preserves_order() {
    let map = MemberMap::from_pairs([("b", vec!["1"]), ("a", vec![])]);
    let json = serde_json::to_string(&map).expect("serialize");
    assert_eq!(json, r#"{"b":["1"],"a":[]}"#);
}

// =============================================================
// Lookups
// =============================================================

#[test]
fn consumers_of_unknown_member_is_empty() {
    assert!(sample().consumers_of("missing").is_empty());
}

#[test]
fn contains_and_len_track_entries() {
    let map = sample();
    assert!(map.contains("A"));
    assert!(!map.contains("C"));
    assert_eq!(map.len(), 2);
    assert!(!map.is_empty());
    assert!(MemberMap::new().is_empty());
}
