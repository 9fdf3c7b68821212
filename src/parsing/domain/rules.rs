//! Ordered keyword rule tables for priority and status detection.
//!
//! Each table is an explicit list of `(pattern, value)` pairs evaluated top
//! to bottom with first-match-wins semantics, which keeps every extraction
//! decision auditable and testable per rule.

use super::{Priority, TaskStatus};
use regex::Regex;
use std::sync::LazyLock;

/// A single keyword rule: a pattern and the value it selects.
struct KeywordRule<T> {
    pattern: Regex,
    value: T,
}

impl<T: Copy> KeywordRule<T> {
    #[expect(
        clippy::unwrap_used,
        reason = "Rule patterns are fixed literals validated by the rule-table tests"
    )]
    fn new(pattern: &str, value: T) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            value,
        }
    }

    fn matches(&self, text: &str) -> Option<T> {
        self.pattern.is_match(text).then_some(self.value)
    }
}

fn first_match<T: Copy>(rules: &[KeywordRule<T>], text: &str, default: T) -> T {
    rules
        .iter()
        .find_map(|rule| rule.matches(text))
        .unwrap_or(default)
}

static PRIORITY_RULES: LazyLock<Vec<KeywordRule<Priority>>> = LazyLock::new(|| {
    vec![
        KeywordRule::new(
            r"(?i)\b(critical|urgent|high priority|highly urgent|asap)\b",
            Priority::High,
        ),
        KeywordRule::new(r"(?i)\b(low priority|not urgent|whenever)\b", Priority::Low),
    ]
});

static STATUS_RULES: LazyLock<Vec<KeywordRule<TaskStatus>>> = LazyLock::new(|| {
    vec![
        KeywordRule::new(
            r"(?i)\b(in progress|doing|start working( on)?)\b",
            TaskStatus::InProgress,
        ),
        KeywordRule::new(r"(?i)\b(done|completed|finished)\b", TaskStatus::Done),
    ]
});

static URGENCY_RULES: LazyLock<Vec<KeywordRule<Priority>>> = LazyLock::new(|| {
    vec![
        KeywordRule::new(
            r"(?i)\b(urgent|asap|immediately|important|critical|now)\b",
            Priority::High,
        ),
        KeywordRule::new(
            r"(?i)\b(whenever|sometime|later|not urgent|no rush|low priority)\b",
            Priority::Low,
        ),
    ]
});

/// Detects the priority signalled by the text, defaulting to
/// [`Priority::Medium`].
#[must_use]
pub fn detect_priority(text: &str) -> Priority {
    first_match(&PRIORITY_RULES, text, Priority::Medium)
}

/// Detects the workflow status signalled by the text, defaulting to
/// [`TaskStatus::ToDo`].
#[must_use]
pub fn detect_status(text: &str) -> TaskStatus {
    first_match(&STATUS_RULES, text, TaskStatus::ToDo)
}

/// Re-scans text for urgency keywords when a candidate priority label failed
/// canonicalization. Broader than [`detect_priority`]: this table also
/// accepts softer cues ("important", "now", "no rush").
#[must_use]
pub fn rescan_urgency(text: &str) -> Priority {
    first_match(&URGENCY_RULES, text, Priority::Medium)
}
