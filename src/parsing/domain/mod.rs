//! Domain model for transcript parsing.
//!
//! The parsing domain models priority and status vocabularies, date/time
//! resolution, heuristic field extraction, title synthesis, and draft
//! finalization while keeping all infrastructure concerns outside of the
//! domain boundary. Everything here is pure and deterministic given a fixed
//! reference instant.

mod datetime;
mod draft;
mod error;
mod finalize;
mod heuristic;
mod json_scan;
mod rules;
mod synthesis;

pub use datetime::resolve;
pub use draft::{
    DraftCandidate, NormalizedFields, ParsedTaskDraft, ParsedTranscript, Priority, TaskStatus,
};
pub use error::{ParsePriorityError, ParseStatusError};
pub use finalize::finalize;
pub use heuristic::{HeuristicExtraction, extract, is_incomplete};
pub use json_scan::first_json_object;
pub use rules::{detect_priority, detect_status, rescan_urgency};
pub use synthesis::{synthesize_description, synthesize_title};
