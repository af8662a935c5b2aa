// qna-import - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::Serialize;

// =============================================================================
// Transcript row (one CSV record)
// =============================================================================

/// One record of the Q&A transcript export.
///
/// Every field is optional: a column missing from the row, or a cell that
/// is blank, is `None`. The Row Filter treats `None` as disqualifying, so
/// ambiguous rows are never imported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranscriptRow {
    /// 1-based record number within the CSV (header excluded).
    pub line: u64,

    /// Author label, e.g. `ATTENDEE`, `MODERATOR`, `PRESENTER`.
    pub source: Option<String>,

    /// Row kind from the `Type` column, e.g. `QUESTION`, `ANSWER`, `COMMENT`.
    pub kind: Option<String>,

    /// Raw message text. May span several lines.
    pub content: Option<String>,

    /// Reaction summary. Carried through, never consulted.
    pub reactions: Option<String>,
}

impl TranscriptRow {
    /// Convenience constructor for a fully populated row.
    pub fn new(source: &str, kind: &str, content: &str) -> Self {
        Self {
            line: 0,
            source: Some(source.to_string()),
            kind: Some(kind.to_string()),
            content: Some(content.to_string()),
            reactions: None,
        }
    }
}

// =============================================================================
// Sanitizer output
// =============================================================================

/// A question that has passed redaction and is ready to be titled and filed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizedQuestion {
    /// `Q&A: ` followed by the first characters of the body, single line.
    pub title: String,

    /// Redacted body with the signature block removed.
    pub body: String,
}

/// Which privacy rules fired for one question. Used for previews and debug
/// logging in place of the raw text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PrivacyReport {
    pub emails_redacted: usize,
    pub signature_removed: bool,
}

impl PrivacyReport {
    pub fn any(&self) -> bool {
        self.emails_redacted > 0 || self.signature_removed
    }
}

// =============================================================================
// Publishing
// =============================================================================

/// What the orchestrator hands to a publisher for one qualifying row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscussionDraft {
    pub title: String,
    pub body: String,
    pub category: String,

    /// Not sent anywhere; lets previews say what was stripped.
    pub privacy: PrivacyReport,
}

impl DiscussionDraft {
    pub fn new(question: SanitizedQuestion, category: &str, privacy: PrivacyReport) -> Self {
        Self {
            title: question.title,
            body: question.body,
            category: category.to_string(),
            privacy,
        }
    }
}

/// A discussion that the platform accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedDiscussion {
    /// Platform node ID (empty for dry runs).
    pub id: String,

    /// Public URL, when the platform reports one.
    pub url: Option<String>,
}

// =============================================================================
// Run summary
// =============================================================================

/// Tally reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Rows read from the transcript.
    pub total_rows: usize,

    /// Rows that passed the Row Filter.
    pub qualifying: usize,

    /// Discussions the publisher accepted.
    pub created: usize,

    /// Qualifying rows whose publish attempt failed.
    pub failed: usize,
}

impl ImportSummary {
    /// A run succeeds when no qualifying row failed to publish.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
