//! Completion-service extraction with total fallback.
//!
//! Builds a structured prompt, invokes the completion port under a bounded
//! timeout, and extracts a JSON payload from the free-form response. Every
//! failure mode (timeout, transport error, missing or malformed payload,
//! cancellation) degrades silently to a heuristic-style synthesis; nothing
//! here ever returns an error to the caller.

use crate::parsing::domain::{
    self, DraftCandidate, NormalizedFields, Priority, first_json_object, synthesize_description,
    synthesize_title,
};
use crate::parsing::ports::{CompletionParams, CompletionService};
use chrono::{DateTime, Utc};
use minijinja::{Environment, context};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Title used when there is nothing to extract from.
const DEFAULT_TITLE: &str = "New Task";
/// Characters of input seeding the last-resort title.
const LAST_RESORT_TITLE_CHARS: usize = 60;

/// Instruction prompt embedding the transcript and the output contract.
const PROMPT_TEMPLATE: &str = r#"You are a task extraction assistant. Given a short spoken sentence, return a JSON object with:
"title" (short 3-7 words),
"description" (1-2 sentence summary),
"priority" (High, Medium, Low),
"dueDate" (ISO-8601 timestamp if a date/time is present, otherwise empty string).

Input:
"{{ transcript }}"

Return ONLY valid JSON."#;

/// Configuration for completion-service invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionConfig {
    /// Deadline for a single completion call. There are no retries: on
    /// expiry the extractor falls back immediately.
    pub timeout: Duration,
    /// Sampling temperature; low by default for reproducible extraction.
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(3),
            temperature: 0.2,
            max_tokens: 400,
        }
    }
}

/// Extractor escalating to a completion service, with total fallback.
#[derive(Clone)]
pub struct CompletionExtractor<S>
where
    S: CompletionService,
{
    service: Arc<S>,
    config: CompletionConfig,
}

impl<S> CompletionExtractor<S>
where
    S: CompletionService,
{
    /// Creates an extractor with default configuration.
    #[must_use]
    pub fn new(service: Arc<S>) -> Self {
        Self::with_config(service, CompletionConfig::default())
    }

    /// Creates an extractor with explicit configuration.
    #[must_use]
    pub const fn with_config(service: Arc<S>, config: CompletionConfig) -> Self {
        Self { service, config }
    }

    /// Extracts candidate fields from `text`, never failing.
    pub async fn extract(&self, text: &str, reference: DateTime<Utc>) -> NormalizedFields {
        self.extract_until(text, reference, std::future::pending())
            .await
    }

    /// Extracts candidate fields, honouring an external cancellation future.
    ///
    /// Cancellation is treated exactly like any other completion failure:
    /// the extractor proceeds directly to the heuristic-style fallback.
    pub async fn extract_until(
        &self,
        text: &str,
        reference: DateTime<Utc>,
        cancel: impl Future<Output = ()> + Send,
    ) -> NormalizedFields {
        let raw = text.trim();
        if raw.is_empty() {
            return default_fields();
        }

        let prompt = match render_prompt(raw) {
            Ok(rendered) => rendered,
            Err(error) => {
                warn!(%error, "prompt rendering failed; returning last-resort draft");
                return last_resort_fields(text);
            }
        };

        let response = self.invoke(&prompt, cancel).await;
        response.map_or_else(
            || fallback_fields(raw, reference),
            |body| {
                decode_candidate(&body).map_or_else(
                    || {
                        warn!("completion response carried no decodable JSON object; falling back");
                        fallback_fields(raw, reference)
                    },
                    |candidate| domain::finalize(&candidate, raw, reference),
                )
            },
        )
    }

    /// Runs the completion call under the configured deadline. Returns `None`
    /// on any failure, which the caller maps to the fallback path.
    async fn invoke(&self, prompt: &str, cancel: impl Future<Output = ()> + Send) -> Option<String> {
        let params = CompletionParams {
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };
        let call = tokio::time::timeout(self.config.timeout, self.service.complete(prompt, &params));
        tokio::select! {
            () = cancel => {
                warn!("completion request cancelled; falling back");
                None
            }
            outcome = call => match outcome {
                Ok(Ok(response)) => Some(response),
                Ok(Err(error)) => {
                    warn!(%error, "completion request failed; falling back");
                    None
                }
                Err(_elapsed) => {
                    warn!(timeout = ?self.config.timeout, "completion request timed out; falling back");
                    None
                }
            }
        }
    }
}

fn render_prompt(transcript: &str) -> Result<String, minijinja::Error> {
    let environment = Environment::new();
    environment.render_str(PROMPT_TEMPLATE, context! { transcript })
}

/// Scans the response for the first balanced JSON object and decodes it.
fn decode_candidate(response: &str) -> Option<DraftCandidate> {
    let span = first_json_object(response)?;
    serde_json::from_str(span).ok()
}

/// Heuristic-style synthesis used when the service produced nothing usable.
///
/// Priority and due date are left empty so the finalizer's urgency rescan
/// and date resolution run against the original text.
fn fallback_fields(raw: &str, reference: DateTime<Utc>) -> NormalizedFields {
    let candidate = DraftCandidate {
        title: synthesize_title(raw),
        description: synthesize_description(raw),
        priority: String::new(),
        due_date: String::new(),
    };
    domain::finalize(&candidate, raw, reference)
}

/// Fixed default for effectively empty input.
fn default_fields() -> NormalizedFields {
    NormalizedFields {
        title: DEFAULT_TITLE.to_owned(),
        description: String::new(),
        priority: Priority::Medium,
        due_date: None,
    }
}

/// Absolute last resort: a usable draft seeded from the raw input.
fn last_resort_fields(text: &str) -> NormalizedFields {
    let seeded: String = text.trim().chars().take(LAST_RESORT_TITLE_CHARS).collect();
    let title = if seeded.is_empty() {
        DEFAULT_TITLE.to_owned()
    } else {
        seeded
    };
    NormalizedFields {
        title,
        description: text.to_owned(),
        priority: Priority::Medium,
        due_date: None,
    }
}
