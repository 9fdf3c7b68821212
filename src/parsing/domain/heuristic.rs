//! Deterministic heuristic extraction and the completeness gate.

use super::{Priority, TaskStatus, datetime, rules, synthesis};
use chrono::{DateTime, Utc};

/// Minimum trimmed title length for a heuristic result to stand on its own.
const MIN_TITLE_CHARS: usize = 2;

/// Field set produced by the heuristic extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicExtraction {
    /// Synthesized title; may be empty for degenerate input.
    pub title: String,
    /// Priority detected from the keyword rule table.
    pub priority: Priority,
    /// Status detected from the keyword rule table.
    pub status: TaskStatus,
    /// Due instant resolved from the text, if any.
    pub due_date: Option<DateTime<Utc>>,
}

/// Extracts title, priority, status, and due date from raw text.
///
/// Pure and deterministic given the same reference instant; performs no I/O.
#[must_use]
pub fn extract(text: &str, reference: DateTime<Utc>) -> HeuristicExtraction {
    HeuristicExtraction {
        title: synthesis::synthesize_title(text),
        priority: rules::detect_priority(text),
        status: rules::detect_status(text),
        due_date: datetime::resolve(text, reference),
    }
}

/// Completeness gate: decides whether the heuristic result is usable or the
/// pipeline must escalate to the completion service.
///
/// Priority and status need no check here; the closed enum types make
/// out-of-vocabulary values unrepresentable.
#[must_use]
pub fn is_incomplete(extraction: &HeuristicExtraction) -> bool {
    extraction.title.trim().chars().count() < MIN_TITLE_CHARS
}
