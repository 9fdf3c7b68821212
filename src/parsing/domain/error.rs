//! Error types for parsing-domain vocabulary canonicalization.

use thiserror::Error;

/// Error returned while canonicalizing priority labels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while canonicalizing status labels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);
