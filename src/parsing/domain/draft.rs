//! Task draft types produced by the parsing pipeline.

use super::{ParsePriorityError, ParseStatusError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task urgency level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Urgent work that should be handled first.
    High,
    /// Ordinary work; the default when nothing signals urgency.
    #[default]
    Medium,
    /// Work that can wait.
    Low,
}

impl Priority {
    /// Returns the canonical display representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Task workflow position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    /// Work is underway.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Work is finished.
    Done,
}

impl TaskStatus {
    /// Returns the canonical display representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "to do" | "todo" => Ok(Self::ToDo),
            "in progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

/// Fully validated task draft produced by the pipeline.
///
/// A draft is created fresh per parse invocation, has no identity of its own,
/// and is discarded once the caller consumes it. Persistence is the caller's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTaskDraft {
    /// Normalized title: 1-120 characters, first character uppercase.
    pub title: String,
    /// Free-form description; the original transcript when nothing better
    /// was extracted.
    pub description: String,
    /// Urgency level, always drawn from the closed vocabulary.
    pub priority: Priority,
    /// Workflow position, always drawn from the closed vocabulary.
    pub status: TaskStatus,
    /// Resolved due instant, or `None` when no date expression was found.
    #[serde(rename = "dueDate")]
    pub due_date: Option<DateTime<Utc>>,
}

/// Pipeline output pairing the original transcript with its parsed draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTranscript {
    /// The raw input text, echoed back unchanged.
    pub transcript: String,
    /// The validated draft derived from the transcript.
    pub parsed: ParsedTaskDraft,
}

/// Loosely typed field candidates awaiting finalization.
///
/// Candidates arrive from untrusted sources (a completion-service response or
/// an intermediate merge), so every field is an unvalidated string; the
/// finalizer canonicalizes them into [`NormalizedFields`]. Missing fields
/// decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DraftCandidate {
    /// Proposed title, possibly empty or oversized.
    #[serde(default)]
    pub title: String,
    /// Proposed description, possibly empty.
    #[serde(default)]
    pub description: String,
    /// Proposed priority label in any casing, possibly unknown.
    #[serde(default)]
    pub priority: String,
    /// Proposed due date as free text, possibly malformed.
    #[serde(default, alias = "dueDate")]
    pub due_date: String,
}

/// Fields that have passed finalization and satisfy every draft invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFields {
    /// Normalized title: 1-120 characters, first character uppercase.
    pub title: String,
    /// Description; non-empty whenever the originating transcript was.
    pub description: String,
    /// Canonical priority.
    pub priority: Priority,
    /// Resolved due instant, if any.
    pub due_date: Option<DateTime<Utc>>,
}

impl NormalizedFields {
    /// Assembles a draft from normalized fields and a workflow status.
    #[must_use]
    pub fn into_draft(self, status: TaskStatus) -> ParsedTaskDraft {
        ParsedTaskDraft {
            title: self.title,
            description: self.description,
            priority: self.priority,
            status,
            due_date: self.due_date,
        }
    }
}
