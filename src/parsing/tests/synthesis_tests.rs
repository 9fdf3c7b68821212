//! Tests for shared title and description synthesis.

use crate::parsing::domain::{synthesize_description, synthesize_title};
use rstest::rstest;

#[rstest]
fn filler_verbs_are_stripped_from_titles() {
    assert_eq!(
        synthesize_title("Remind me to call John tomorrow"),
        "call John"
    );
}

#[rstest]
fn politeness_is_stripped_from_titles() {
    assert_eq!(
        synthesize_title("Hey, please add buy groceries, thanks"),
        "buy groceries"
    );
}

#[rstest]
fn explicit_to_clause_is_preferred() {
    assert_eq!(
        synthesize_title("I need to buy milk by friday"),
        "buy milk"
    );
}

#[rstest]
fn temporal_clauses_are_truncated() {
    assert_eq!(
        synthesize_title("submit the expense report before monday"),
        "submit the expense report"
    );
    assert_eq!(
        synthesize_title("water the plants tomorrow"),
        "water the plants"
    );
}

#[rstest]
fn demonstratives_and_plain_prepositions_do_not_truncate() {
    assert_eq!(synthesize_title("finish this report"), "finish this report");
    assert_eq!(
        synthesize_title("look after the plants"),
        "look after the plants"
    );
}

#[rstest]
fn first_sentence_segment_bounds_the_title() {
    assert_eq!(
        synthesize_title("book flights, then sort out the hotel"),
        "book flights"
    );
}

#[rstest]
fn trailing_punctuation_is_trimmed() {
    assert_eq!(synthesize_title("fix the login bug."), "fix the login bug");
}

#[rstest]
fn empty_input_synthesizes_an_empty_title() {
    assert_eq!(synthesize_title(""), "");
    assert_eq!(synthesize_title("   "), "");
}

#[rstest]
fn filler_only_input_falls_back_to_raw_text() {
    // Everything is stripped, so the sixty-character raw fallback applies.
    assert_eq!(synthesize_title("please!"), "please!");
}

#[rstest]
fn descriptions_keep_content_but_drop_politeness() {
    assert_eq!(
        synthesize_description("Could you send the invoice to accounting"),
        "send the invoice to accounting"
    );
}

#[rstest]
fn empty_description_falls_back_to_raw_text() {
    assert_eq!(synthesize_description(""), "");
    assert_eq!(synthesize_description("please"), "please");
}
