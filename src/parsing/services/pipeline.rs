//! Parse orchestration: heuristic first, completion service as escalation.

use crate::parsing::domain::{
    self, DraftCandidate, HeuristicExtraction, NormalizedFields, ParsedTranscript,
};
use crate::parsing::ports::CompletionService;
use crate::parsing::services::{CompletionConfig, CompletionExtractor};
use mockable::Clock;
use std::future::Future;
use std::sync::Arc;

/// Transcript parsing orchestrator.
///
/// Each call is an independent, stateless pipeline invocation: run the
/// heuristic extractor, consult the completeness gate, escalate to the
/// completion service only when needed, merge field by field, and finalize.
/// The result is always a well-formed draft; no failure escapes to the
/// caller.
#[derive(Clone)]
pub struct TranscriptParser<S, C>
where
    S: CompletionService,
    C: Clock + Send + Sync,
{
    completion: CompletionExtractor<S>,
    clock: Arc<C>,
}

impl<S, C> TranscriptParser<S, C>
where
    S: CompletionService,
    C: Clock + Send + Sync,
{
    /// Creates a parser with default completion configuration.
    #[must_use]
    pub fn new(service: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            completion: CompletionExtractor::new(service),
            clock,
        }
    }

    /// Creates a parser with explicit completion configuration.
    #[must_use]
    pub fn with_config(service: Arc<S>, clock: Arc<C>, config: CompletionConfig) -> Self {
        Self {
            completion: CompletionExtractor::with_config(service, config),
            clock,
        }
    }

    /// Parses a transcript into a validated draft.
    pub async fn parse(&self, transcript: &str) -> ParsedTranscript {
        self.parse_until(transcript, std::future::pending()).await
    }

    /// Parses a transcript, honouring an external cancellation future.
    ///
    /// Cancellation only affects the completion-service call; the pipeline
    /// still returns a complete draft via the heuristic fallback.
    pub async fn parse_until(
        &self,
        transcript: &str,
        cancel: impl Future<Output = ()> + Send,
    ) -> ParsedTranscript {
        let reference = self.clock.utc();
        let heuristic = domain::extract(transcript, reference);
        let status = heuristic.status;

        let candidate = if domain::is_incomplete(&heuristic) {
            let completion = self
                .completion
                .extract_until(transcript, reference, cancel)
                .await;
            merge(completion, &heuristic)
        } else {
            heuristic_candidate(heuristic)
        };

        let fields = domain::finalize(&candidate, transcript, reference);
        ParsedTranscript {
            transcript: transcript.to_owned(),
            parsed: fields.into_draft(status),
        }
    }
}

/// Merges escalated fields with the heuristic result, preferring the
/// completion value when present and falling back to the heuristic value.
///
/// Status never appears here: the completion path does not produce one, so
/// the orchestrator always keeps the heuristic status.
fn merge(completion: NormalizedFields, heuristic: &HeuristicExtraction) -> DraftCandidate {
    DraftCandidate {
        title: completion.title,
        description: completion.description,
        priority: completion.priority.as_str().to_owned(),
        due_date: completion
            .due_date
            .or(heuristic.due_date)
            .map(|instant| instant.to_rfc3339())
            .unwrap_or_default(),
    }
}

/// Shapes a sufficient heuristic extraction for finalization.
fn heuristic_candidate(heuristic: HeuristicExtraction) -> DraftCandidate {
    DraftCandidate {
        title: heuristic.title,
        description: String::new(),
        priority: heuristic.priority.as_str().to_owned(),
        due_date: heuristic
            .due_date
            .map(|instant| instant.to_rfc3339())
            .unwrap_or_default(),
    }
}
