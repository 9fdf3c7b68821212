//! Orchestration services for transcript parsing.

mod completion_extractor;
mod pipeline;

pub use completion_extractor::{CompletionConfig, CompletionExtractor};
pub use pipeline::TranscriptParser;
