#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! Both enums use serde's externally tagged representation.

use maybe_outcome::optional::{Optional, none, some};
use maybe_outcome::outcome::{Outcome, err, ok};
use rstest::rstest;

// =============================================================================
// Optional Integration Tests
// =============================================================================

#[rstest]
#[case(some(1), r#"{"Present":1}"#)]
#[case(none(), r#""Absent""#)]
fn test_optional_json_representation(#[case] value: Optional<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
}

#[rstest]
fn test_optional_json_roundtrip() {
    let present: Optional<String> = some("value".to_string());
    let absent: Optional<String> = none();

    let present_json = serde_json::to_string(&present).unwrap();
    let absent_json = serde_json::to_string(&absent).unwrap();

    let restored_present: Optional<String> = serde_json::from_str(&present_json).unwrap();
    let restored_absent: Optional<String> = serde_json::from_str(&absent_json).unwrap();

    assert_eq!(present, restored_present);
    assert_eq!(absent, restored_absent);
}

// =============================================================================
// Outcome Integration Tests
// =============================================================================

#[rstest]
#[case(ok(1), r#"{"Success":1}"#)]
#[case(err("e".to_string()), r#"{"Failure":"e"}"#)]
fn test_outcome_json_representation(#[case] value: Outcome<i32, String>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
}

#[rstest]
fn test_outcome_nested_roundtrip() {
    let nested: Outcome<Optional<Vec<i32>>, String> = ok(some(vec![1, 2, 3]));
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, r#"{"Success":{"Present":[1,2,3]}}"#);

    let restored: Outcome<Optional<Vec<i32>>, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(nested, restored);
}

#[rstest]
fn test_outcome_rejects_unknown_variant() {
    let parsed: Result<Outcome<i32, String>, _> = serde_json::from_str(r#"{"Pending":1}"#);
    assert!(parsed.is_err());
}
