//! Shared title and description synthesis.
//!
//! Both the heuristic extractor and the completion extractor's fallback need
//! to turn a raw utterance into a short title and a usable description. The
//! logic lives here once so the two paths cannot drift.

use regex::Regex;
use std::sync::LazyLock;

/// Longest title synthesized from raw text before finalization pads or
/// truncates further.
const RAW_TITLE_LIMIT: usize = 60;
/// Word count for the last-ditch title fallback.
const FALLBACK_WORD_COUNT: usize = 6;

static POLITENESS: LazyLock<Regex> = LazyLock::new(|| {
    build(r"(?i)\b(please|kindly|could you|would you|hey|hi|hello)\b")
});
static TRAILING_THANKS: LazyLock<Regex> =
    LazyLock::new(|| build(r"(?i)\b(please|thanks|thank you)[.!]?\s*$"));
static FILLER_VERBS: LazyLock<Regex> =
    LazyLock::new(|| build(r"(?i)\b(remind me to|remind me|create|make|add|task)\b"));
static TO_CLAUSE: LazyLock<Regex> = LazyLock::new(|| build(r"(?i)\bto\s+([a-z][^.,]*)"));
// Clause markers plus the day words the resolver understands. Common
// prepositions and demonstratives ("after", "this") stay out: they appear in
// ordinary task wording far more often than in date clauses.
static TEMPORAL_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    build(r"(?i)\b(by|before|due|on|tomorrow|tonight|today|next)\b")
});

#[expect(
    clippy::unwrap_used,
    reason = "Synthesis patterns are fixed literals exercised by every synthesis test"
)]
fn build(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

/// Synthesizes a short task title from a raw utterance.
///
/// Strips politeness and filler verbs, prefers an explicit "to ..." clause,
/// truncates trailing temporal clauses ("by friday", "tomorrow"), and falls
/// back to the first six words or the first sixty characters of the raw text.
/// Returns an empty string only for effectively empty input.
#[must_use]
pub fn synthesize_title(text: &str) -> String {
    let cleaned = collapse(&FILLER_VERBS.replace_all(&strip_politeness(text), " "));

    let clause = TO_CLAUSE
        .captures(&cleaned)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| cleaned.clone(), |capture| capture.as_str().to_owned());
    let primary = trim_edges(&first_segment(&truncate_temporal_clause(&clause)));

    let six_words = cleaned
        .split_whitespace()
        .take(FALLBACK_WORD_COUNT)
        .collect::<Vec<_>>()
        .join(" ");
    let raw_head: String = text.trim().chars().take(RAW_TITLE_LIMIT).collect();

    [primary, six_words, raw_head.trim().to_owned()]
        .into_iter()
        .find(|candidate| candidate.chars().any(char::is_alphanumeric))
        .unwrap_or_default()
}

/// Synthesizes a description: the utterance with politeness noise removed,
/// or the raw text verbatim when stripping leaves nothing.
#[must_use]
pub fn synthesize_description(text: &str) -> String {
    let cleaned = collapse(&strip_politeness(text));
    if cleaned.is_empty() {
        text.to_owned()
    } else {
        cleaned
    }
}

fn strip_politeness(text: &str) -> String {
    let without_words = POLITENESS.replace_all(text, " ");
    TRAILING_THANKS.replace(&without_words, "").into_owned()
}

/// Cuts the text at the first temporal marker so trailing date phrases do not
/// leak into titles.
fn truncate_temporal_clause(text: &str) -> String {
    TEMPORAL_MARKER
        .find(text)
        .and_then(|marker| text.get(..marker.start()))
        .unwrap_or(text)
        .to_owned()
}

/// Takes the first sentence-like segment, skipping segments emptied by
/// filler stripping.
fn first_segment(text: &str) -> String {
    text.split(['.', ',', ';'])
        .map(str::trim)
        .find(|segment| !segment.is_empty())
        .unwrap_or("")
        .to_owned()
}

fn trim_edges(text: &str) -> String {
    text.trim()
        .trim_start_matches([':', '-', '–', '—'])
        .trim()
        .trim_end_matches(['.', ','])
        .trim()
        .to_owned()
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
