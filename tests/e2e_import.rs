// qna-import - tests/e2e_import.rs
//
// End-to-end tests for the transcript -> filter -> sanitize -> publish
// pipeline.
//
// These tests read a real CSV fixture from disk with the real csv reader,
// run the real rule set, and drive the orchestrator with an in-memory
// publisher. Nothing touches the network.

use qna_import::app::import::{run_import, ImportOptions};
use qna_import::app::preview::DryRunPublisher;
use qna_import::core::model::{DiscussionDraft, PublishedDiscussion};
use qna_import::core::publisher::Publisher;
use qna_import::core::transcript::{read_transcript, read_transcript_file};
use qna_import::util::error::{PublishError, TranscriptError};
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Keeps every draft; optionally rejects drafts whose title contains a marker.
#[derive(Default)]
struct RecordingPublisher {
    drafts: Vec<DiscussionDraft>,
    reject_containing: Option<&'static str>,
}

impl Publisher for RecordingPublisher {
    fn publish(&mut self, draft: &DiscussionDraft) -> Result<PublishedDiscussion, PublishError> {
        self.drafts.push(draft.clone());
        if let Some(marker) = self.reject_containing {
            if draft.title.contains(marker) {
                return Err(PublishError::GraphQl {
                    operation: "createDiscussion",
                    messages: vec!["rejected".to_string()],
                });
            }
        }
        Ok(PublishedDiscussion {
            id: format!("D_{}", self.drafts.len()),
            url: Some(format!("https://example.test/discussions/{}", self.drafts.len())),
        })
    }
}

// =============================================================================
// Fixture import
// =============================================================================

/// The sample export yields exactly the four attendee questions, in order,
/// with emails and signatures stripped.
#[test]
fn e2e_fixture_imports_attendee_questions() {
    let rows = read_transcript_file(&fixture("qa_report_sample.csv")).unwrap();
    assert_eq!(rows.len(), 9);

    let mut publisher = RecordingPublisher::default();
    let summary = run_import(&rows, &mut publisher, &ImportOptions::default());

    assert_eq!(summary.total_rows, 9);
    assert_eq!(summary.qualifying, 4);
    assert_eq!(summary.created, 4);
    assert_eq!(summary.failed, 0);

    let titles: Vec<_> = publisher.drafts.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Q&A: How do I use Copilot? Contact me at [redacted-email]",
            "Q&A: Is there a way to make Copilot follow the coding...",
            "Q&A: Can I get the slides?",
            "Q&A: Where are the lab files?",
        ]
    );

    let bodies: Vec<_> = publisher.drafts.iter().map(|d| d.body.as_str()).collect();
    assert_eq!(
        bodies[0],
        "How do I use Copilot?\nContact me at [redacted-email]"
    );
    assert_eq!(bodies[2], "Can I get the slides?");
    assert_eq!(bodies[3], "Where are the lab files?");

    for draft in &publisher.drafts {
        assert_eq!(draft.category, "Session Questions");
        assert!(!draft.body.contains('@'), "email leaked: {:?}", draft.body);
        assert!(!draft.body.contains("John Doe"));
        assert!(!draft.body.contains("Priya"));
        assert!(!draft.body.contains("Sam Lee"));
        assert!(!draft.title.contains('\n'));
    }
}

/// A rejected row is counted and the rows after it are still published.
#[test]
fn e2e_publish_failure_is_isolated_to_its_row() {
    let rows = read_transcript_file(&fixture("qa_report_sample.csv")).unwrap();
    let mut publisher = RecordingPublisher {
        reject_containing: Some("coding"),
        ..Default::default()
    };

    let summary = run_import(&rows, &mut publisher, &ImportOptions::default());

    assert_eq!(publisher.drafts.len(), 4);
    assert_eq!(summary.created, 3);
    assert_eq!(summary.failed, 1);
    assert!(!summary.is_success());
}

/// The dry-run publisher renders every draft and never reports failure.
#[test]
fn e2e_dry_run_preview() {
    let rows = read_transcript_file(&fixture("qa_report_sample.csv")).unwrap();
    let mut preview = DryRunPublisher::new(Vec::new());
    preview.write_header("qa_report_sample.csv").unwrap();
    let summary = run_import(&rows, &mut preview, &ImportOptions::default());
    preview.write_summary(&summary).unwrap();
    assert_eq!(preview.count(), 4);

    let text = String::from_utf8(preview.into_inner()).unwrap();
    assert!(text.contains("DRY RUN MODE"));
    assert!(text.contains("Discussion #4"));
    assert!(text.contains("1 email address(es) redacted"));
    assert!(text.contains("Signature lines removed"));
    assert!(text.contains("4 discussions would be created"));
    assert!(!text.contains("user@example.com"));
    assert!(summary.is_success());
}

// =============================================================================
// Transcript edge cases on disk
// =============================================================================

/// A CSV without the Type column is rejected before anything is published.
#[test]
fn e2e_missing_required_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.csv");
    fs::write(&path, "Source,Content\nATTENDEE,Hello?\n").unwrap();

    let err = read_transcript_file(&path).unwrap_err();
    assert!(
        matches!(err, TranscriptError::MissingColumns { ref missing, .. } if missing == &vec!["Type"]),
        "expected MissingColumns, got {err:?}"
    );
}

/// A transcript with no qualifying rows publishes nothing.
#[test]
fn e2e_no_questions() {
    let csv = "Source,Type,Content\nMODERATOR,ANSWER,Sure\nATTENDEE,COMMENT,Nice\n";
    let rows = read_transcript(csv.as_bytes()).unwrap();
    let mut publisher = RecordingPublisher::default();
    let summary = run_import(&rows, &mut publisher, &ImportOptions::default());
    assert_eq!(summary.qualifying, 0);
    assert_eq!(summary.created, 0);
    assert!(summary.is_success());
    assert!(publisher.drafts.is_empty());
}

/// Custom category and title length flow through to every draft.
#[test]
fn e2e_options_applied() {
    let csv = "Source,Type,Content\n\
               ATTENDEE,QUESTION,What is the difference between agent mode and edit mode?\n";
    let rows = read_transcript(csv.as_bytes()).unwrap();
    let options = ImportOptions {
        category: "Office Hours".to_string(),
        title_max_chars: 30,
    };
    let mut publisher = RecordingPublisher::default();
    run_import(&rows, &mut publisher, &options);

    let draft = &publisher.drafts[0];
    assert_eq!(draft.category, "Office Hours");
    assert_eq!(draft.title, "Q&A: What is the difference...");
    assert!(draft.title.chars().count() <= 5 + 30 + 3);
}

/// Addresses with accents or apostrophes are redacted in full, and a real
/// question that follows "thanks" on the last line is published intact.
#[test]
fn e2e_redaction_keeps_questions_and_catches_unicode_addresses() {
    let csv = "Source,Type,Content\n\
               ATTENDEE,QUESTION,\"Can josé@example.com and o'brien@corp.com both join?\nThanks,\nJosé\"\n\
               ATTENDEE,QUESTION,\"Great demo. Thanks to the team, how do I enable agent mode in VS Code?\"\n";
    let rows = read_transcript(csv.as_bytes()).unwrap();
    let mut publisher = RecordingPublisher::default();
    run_import(&rows, &mut publisher, &ImportOptions::default());

    assert_eq!(
        publisher.drafts[0].body,
        "Can [redacted-email] and [redacted-email] both join?"
    );
    assert_eq!(publisher.drafts[0].privacy.emails_redacted, 2);
    assert_eq!(
        publisher.drafts[1].body,
        "Great demo. Thanks to the team, how do I enable agent mode in VS Code?"
    );
    assert!(!publisher.drafts[1].privacy.signature_removed);
}
