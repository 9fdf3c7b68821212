//! Port contracts for transcript parsing.

mod completion;

pub use completion::{
    CompletionParams, CompletionResult, CompletionService, CompletionServiceError,
};
