//! Serde behavior of `Every` and `MatchResult`.

use super::common::apply;
use affirm::{equal, every, Every};

#[test]
fn test_every_serializes_as_a_plain_list() {
    let xs = every!["a".to_string(), "b".to_string()];
    assert_eq!(serde_json::to_string(&xs).unwrap(), r#"["a","b"]"#);
}

#[test]
fn test_every_deserialize_rejects_empty() {
    let xs: Every<u8> = serde_json::from_str("[1, 2]").unwrap();
    assert_eq!(xs, every![1, 2]);

    let err = serde_json::from_str::<Every<u8>>("[]").unwrap_err();
    assert!(err.to_string().contains("Every must contain at least one element"));
}

#[test]
fn test_match_result_serializes_templates_and_args() {
    let result = apply(equal(2), &1);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["matches"], false);
    assert_eq!(json["failure_template"], "{0} did not equal {1}");
    assert_eq!(json["failure_args"][1], "2");
}
