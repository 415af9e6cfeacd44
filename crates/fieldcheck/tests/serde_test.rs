//! Serialization of violations behind the `serde` feature.

#![cfg(feature = "serde")]

use fieldcheck::prelude::*;
use serde_json::json;

#[test]
fn violation_serializes_to_json() {
    let violation = Violation::new("min_length", "Username is too short")
        .with_field("user.name")
        .with_param("min", "6");

    let value = serde_json::to_value(&violation).unwrap();

    assert_eq!(
        value,
        json!({
            "code": "min_length",
            "message": "Username is too short",
            "field": "user.name",
            "params": [["min", "6"]]
        })
    );
}

#[test]
fn empty_optional_parts_are_skipped() {
    let value = serde_json::to_value(Violation::new("email", "Invalid email")).unwrap();
    assert_eq!(value, json!({ "code": "email", "message": "Invalid email" }));
}

#[test]
fn pipeline_failure_as_json() {
    let err = Pipeline::new()
        .email("nope", ValidationError::new("email", "Invalid email"))
        .validate()
        .unwrap_err();

    let violation = err.as_violation().unwrap();
    assert_eq!(serde_json::to_value(violation).unwrap()["code"], "email");
}
