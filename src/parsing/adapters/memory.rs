//! In-memory completion-service adapters.
//!
//! These adapters exercise every branch of the escalation path without a
//! network: a fixed responder for the happy path, a configured failure for
//! degraded paths, and an unconfigured stand-in for deployments without
//! completion credentials.

use crate::parsing::ports::{
    CompletionParams, CompletionResult, CompletionService, CompletionServiceError,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Completion service returning the same canned response for every prompt.
#[derive(Debug, Default)]
pub struct FixedCompletion {
    response: String,
    calls: AtomicUsize,
}

impl FixedCompletion {
    /// Creates an adapter that answers every prompt with `response`.
    #[must_use]
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of prompts received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionService for FixedCompletion {
    async fn complete(&self, _prompt: &str, _params: &CompletionParams) -> CompletionResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Completion service failing every request with a configured error.
#[derive(Debug)]
pub struct FailingCompletion {
    error: CompletionServiceError,
    calls: AtomicUsize,
}

impl FailingCompletion {
    /// Creates an adapter that fails every prompt with `error`.
    #[must_use]
    pub const fn new(error: CompletionServiceError) -> Self {
        Self {
            error,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of prompts received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionService for FailingCompletion {
    async fn complete(&self, _prompt: &str, _params: &CompletionParams) -> CompletionResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }
}

/// Stand-in for deployments with no completion service configured.
///
/// Every request fails with [`CompletionServiceError::Unconfigured`], which
/// the extractor treats like any other failure: silent fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredCompletion;

#[async_trait]
impl CompletionService for UnconfiguredCompletion {
    async fn complete(&self, _prompt: &str, _params: &CompletionParams) -> CompletionResult<String> {
        Err(CompletionServiceError::Unconfigured)
    }
}
