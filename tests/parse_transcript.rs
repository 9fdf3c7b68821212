//! End-to-end pipeline tests against the in-memory completion adapters.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use dictask::parsing::adapters::memory::{FailingCompletion, FixedCompletion};
use dictask::parsing::domain::{Priority, TaskStatus};
use dictask::parsing::ports::CompletionServiceError;
use dictask::parsing::services::TranscriptParser;
use mockable::Clock;
use rstest::{fixture, rstest};
use std::sync::Arc;

/// Clock pinned to 2024-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy)]
struct NewYear2024;

impl Clock for NewYear2024 {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("valid reference instant")
    }
}

#[fixture]
fn clock() -> Arc<NewYear2024> {
    Arc::new(NewYear2024)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn spoken_reminder_parses_without_any_completion_service(clock: Arc<NewYear2024>) {
    let pipeline = TranscriptParser::new(
        Arc::new(FailingCompletion::new(CompletionServiceError::Unconfigured)),
        clock,
    );

    let result = pipeline
        .parse("Remind me to call John tomorrow, it's urgent")
        .await;

    assert_eq!(result.parsed.title, "Call John");
    assert_eq!(result.parsed.priority, Priority::High);
    assert_eq!(result.parsed.status, TaskStatus::ToDo);
    assert_eq!(
        result.parsed.due_date.map(|due| due.date_naive()),
        NaiveDate::from_ymd_opt(2024, 1, 2)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn garbled_input_escalates_to_the_completion_service(clock: Arc<NewYear2024>) {
    let service = Arc::new(FixedCompletion::new(
        r#"Here: {"title": "transcribe meeting notes", "description": "Audio was unclear.", "priority": "Medium", "dueDate": ""}"#,
    ));
    let pipeline = TranscriptParser::new(Arc::clone(&service), clock);

    let result = pipeline.parse("x").await;

    assert_eq!(service.call_count(), 1);
    assert_eq!(result.parsed.title, "Transcribe meeting notes");
    assert_eq!(result.parsed.description, "Audio was unclear.");
    assert_eq!(result.parsed.status, TaskStatus::ToDo);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drafts_serialize_to_the_wire_shape(clock: Arc<NewYear2024>) {
    let pipeline = TranscriptParser::new(
        Arc::new(FailingCompletion::new(CompletionServiceError::Unconfigured)),
        clock,
    );

    let result = pipeline.parse("submit the expense report tomorrow").await;
    let value = serde_json::to_value(&result).expect("draft should serialize");

    assert_eq!(
        value["transcript"],
        "submit the expense report tomorrow"
    );
    assert_eq!(value["parsed"]["title"], "Submit the expense report");
    assert_eq!(value["parsed"]["priority"], "Medium");
    assert_eq!(value["parsed"]["status"], "To Do");
    assert!(
        value["parsed"]["dueDate"]
            .as_str()
            .is_some_and(|due| due.starts_with("2024-01-02"))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_path_produces_a_usable_draft(clock: Arc<NewYear2024>) {
    let inputs = [
        "",
        "x",
        "...",
        "please",
        "do the thing whenever",
        "buy milk tomorrow at 5pm",
    ];
    let pipeline = TranscriptParser::new(
        Arc::new(FailingCompletion::new(CompletionServiceError::Timeout)),
        clock,
    );

    for input in inputs {
        let result = pipeline.parse(input).await;
        let title_length = result.parsed.title.chars().count();
        assert!(title_length >= 1, "no title for input {input:?}");
        assert!(title_length <= 120);
    }
}
