//! Draft finalization: the stage that guarantees output invariants.
//!
//! Candidates arrive here from every path (heuristic, completion response,
//! fallback synthesis) and leave satisfying the same contract: a bounded,
//! capitalized, non-empty title; a non-empty description; a canonical
//! priority; and a due date that is either a parsed instant or absent.

use super::{DraftCandidate, NormalizedFields, Priority, datetime, rules};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Hard ceiling on title length in characters.
const TITLE_LIMIT: usize = 120;
/// Characters kept when a title is truncated, leaving room for the ellipsis.
const TITLE_TRUNCATED: usize = 117;
/// Characters taken from the original text when deriving a missing title.
const DERIVED_TITLE_LIMIT: usize = 60;
/// Title of last resort when nothing can be derived at all.
const DEFAULT_TITLE: &str = "New Task";

/// Normalizes candidate fields against the original transcript.
///
/// Pure given a fixed reference instant. Never fails: unusable candidate
/// values degrade to values derived from `original`.
#[must_use]
pub fn finalize(
    candidate: &DraftCandidate,
    original: &str,
    reference: DateTime<Utc>,
) -> NormalizedFields {
    NormalizedFields {
        title: normalize_title(&candidate.title, original),
        description: normalize_description(&candidate.description, original),
        priority: normalize_priority(&candidate.priority, original),
        due_date: normalize_due_date(&candidate.due_date, original, reference),
    }
}

fn normalize_title(candidate: &str, original: &str) -> String {
    let mut title = candidate.trim().to_owned();
    if title.is_empty() {
        title = original
            .split(['.', ',', ';', '/', '-'])
            .next()
            .unwrap_or("")
            .trim()
            .chars()
            .take(DERIVED_TITLE_LIMIT)
            .collect();
        title = title.trim().to_owned();
    }
    // Punctuation-only input can leave derivation empty; the draft still
    // needs a non-empty title.
    if title.is_empty() {
        title = original.trim().chars().take(DERIVED_TITLE_LIMIT).collect();
    }
    if title.is_empty() {
        title = DEFAULT_TITLE.to_owned();
    }
    if title.chars().count() > TITLE_LIMIT {
        title = title.chars().take(TITLE_TRUNCATED).collect();
        title.push_str("...");
    }
    capitalize_first(&title)
}

fn normalize_description(candidate: &str, original: &str) -> String {
    let description = candidate.trim();
    if description.is_empty() {
        original.to_owned()
    } else {
        description.to_owned()
    }
}

/// Canonicalizes a priority label case-insensitively, or re-scans the
/// original text for urgency keywords when the label is unknown.
fn normalize_priority(candidate: &str, original: &str) -> Priority {
    Priority::try_from(candidate).unwrap_or_else(|_| rules::rescan_urgency(original))
}

/// Validates a candidate due-date string, falling back to resolving the
/// original text. Yields `None` rather than carrying a raw unparsed string.
fn normalize_due_date(
    candidate: &str,
    original: &str,
    reference: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    parse_instant(candidate.trim()).or_else(|| datetime::resolve(original, reference))
}

/// Parses an ISO-8601 instant, accepting RFC 3339, a bare date-time, or a
/// bare date at midnight.
fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn capitalize_first(text: &str) -> String {
    let mut characters = text.chars();
    characters.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(characters).collect()
    })
}
