//! Tests for the ordered keyword rule tables.

use crate::parsing::domain::{
    Priority, TaskStatus, detect_priority, detect_status, rescan_urgency,
};
use rstest::rstest;

#[rstest]
#[case("this is critical", Priority::High)]
#[case("URGENT: server down", Priority::High)]
#[case("high priority fix", Priority::High)]
#[case("need this asap", Priority::High)]
#[case("low priority cleanup", Priority::Low)]
#[case("not urgent at all", Priority::Low)]
#[case("do it whenever", Priority::Low)]
#[case("buy milk", Priority::Medium)]
fn priority_rules_match_in_order(#[case] text: &str, #[case] expected: Priority) {
    assert_eq!(detect_priority(text), expected);
}

#[rstest]
fn first_matching_priority_rule_wins() {
    // Both tables match; the High rule sits first.
    assert_eq!(
        detect_priority("urgent but also low priority somehow"),
        Priority::High
    );
}

#[rstest]
#[case("migration is in progress", TaskStatus::InProgress)]
#[case("doing the review now", TaskStatus::InProgress)]
#[case("start working on the deck", TaskStatus::InProgress)]
#[case("marked done yesterday", TaskStatus::Done)]
#[case("completed the audit", TaskStatus::Done)]
#[case("finished reading", TaskStatus::Done)]
#[case("buy milk", TaskStatus::ToDo)]
fn status_rules_match_in_order(#[case] text: &str, #[case] expected: TaskStatus) {
    assert_eq!(detect_status(text), expected);
}

#[rstest]
#[case("handle this immediately", Priority::High)]
#[case("it's important", Priority::High)]
#[case("do it now", Priority::High)]
#[case("no rush on this one", Priority::Low)]
#[case("sometime next quarter", Priority::Low)]
#[case("water the plants", Priority::Medium)]
fn urgency_rescan_accepts_softer_cues(#[case] text: &str, #[case] expected: Priority) {
    assert_eq!(rescan_urgency(text), expected);
}

#[rstest]
fn priority_labels_canonicalize_case_insensitively() {
    assert_eq!(Priority::try_from("HIGH"), Ok(Priority::High));
    assert_eq!(Priority::try_from(" low "), Ok(Priority::Low));
    assert!(Priority::try_from("blocker").is_err());
}

#[rstest]
fn status_labels_canonicalize_case_insensitively() {
    assert_eq!(TaskStatus::try_from("to do"), Ok(TaskStatus::ToDo));
    assert_eq!(TaskStatus::try_from("In Progress"), Ok(TaskStatus::InProgress));
    assert!(TaskStatus::try_from("archived").is_err());
}
