//! Completion-service port for generative field extraction.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for completion-service operations.
pub type CompletionResult<T> = Result<T, CompletionServiceError>;

/// Sampling parameters sent with each completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    /// Sampling temperature; kept low for reproducible extraction.
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

/// Generative text-completion contract.
///
/// The service may fail at any time, and its response text may or may not
/// contain valid structured data; callers own both failure handling and
/// payload extraction. Implementations should not retry internally.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Sends a prompt and returns the raw response text.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionServiceError`] for any transport, auth, quota, or
    /// configuration failure.
    async fn complete(&self, prompt: &str, params: &CompletionParams) -> CompletionResult<String>;
}

/// Errors returned by completion-service implementations.
#[derive(Debug, Clone, Error)]
pub enum CompletionServiceError {
    /// The request exceeded its deadline.
    #[error("completion request timed out")]
    Timeout,

    /// The service rejected the configured credentials.
    #[error("completion service rejected credentials")]
    Auth,

    /// The service applied rate limiting.
    #[error("completion service rate limited the request")]
    RateLimited,

    /// No service is configured (for example, no credentials are present).
    #[error("no completion service configured")]
    Unconfigured,

    /// Transport-level failure.
    #[error("completion transport error: {0}")]
    Network(String),

    /// Any other service-side failure.
    #[error("completion service error: {0}")]
    Service(Arc<dyn std::error::Error + Send + Sync>),
}

impl CompletionServiceError {
    /// Wraps an opaque service-side error.
    #[must_use]
    pub fn service(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Service(Arc::new(err))
    }
}
