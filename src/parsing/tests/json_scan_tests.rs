//! Tests for the balanced-brace JSON scanner.

use crate::parsing::domain::first_json_object;
use rstest::rstest;

#[rstest]
fn plain_object_is_returned_whole() {
    assert_eq!(
        first_json_object(r#"{"title": "Buy milk"}"#),
        Some(r#"{"title": "Buy milk"}"#)
    );
}

#[rstest]
fn surrounding_prose_is_ignored() {
    let response = r#"Sure! Here is the task you asked for: {"title": "Buy milk"} Hope that helps."#;
    assert_eq!(first_json_object(response), Some(r#"{"title": "Buy milk"}"#));
}

#[rstest]
fn nested_objects_stay_balanced() {
    let response = r#"{"task": {"title": "Buy milk", "meta": {"depth": 2}}} trailing"#;
    assert_eq!(
        first_json_object(response),
        Some(r#"{"task": {"title": "Buy milk", "meta": {"depth": 2}}}"#)
    );
}

#[rstest]
fn braces_inside_strings_do_not_close_the_span() {
    let response = r#"{"title": "use {braces} carefully", "priority": "Low"}"#;
    assert_eq!(first_json_object(response), Some(response));
}

#[rstest]
fn escaped_quotes_inside_strings_are_handled() {
    let response = r#"{"title": "say \"hi\" {later}"}"#;
    assert_eq!(first_json_object(response), Some(response));
}

#[rstest]
fn quoted_braces_before_the_object_do_not_start_the_span() {
    let response = r#"He said "try {x}" first. {"title": "Buy milk"}"#;
    assert_eq!(first_json_object(response), Some(r#"{"title": "Buy milk"}"#));
}

#[rstest]
fn only_the_first_top_level_object_is_returned() {
    assert_eq!(
        first_json_object(r#"{"a": 1} {"b": 2}"#),
        Some(r#"{"a": 1}"#)
    );
}

#[rstest]
#[case("")]
#[case("no json here")]
#[case(r#"{"unterminated": true"#)]
#[case("}{")]
fn incomplete_input_yields_none(#[case] response: &str) {
    assert_eq!(first_json_object(response), None);
}
