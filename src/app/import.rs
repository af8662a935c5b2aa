// qna-import - app/import.rs
//
// Orchestrator: Row Filter, then Content Sanitizer, then Publisher, one row
// at a time in file order. A failed publish is logged and counted; it never
// stops the rows after it.

use crate::core::filter;
use crate::core::model::{DiscussionDraft, ImportSummary, TranscriptRow};
use crate::core::publisher::Publisher;
use crate::core::rules::RedactionRuleSet;
use crate::core::sanitize;
use crate::util::constants;

/// Per-run knobs for turning rows into drafts.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub category: String,
    pub title_max_chars: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            category: constants::DEFAULT_CATEGORY.to_string(),
            title_max_chars: constants::DEFAULT_TITLE_MAX_CHARS,
        }
    }
}

/// Build the draft for one row, or `None` when the row does not qualify.
pub fn draft_for(row: &TranscriptRow, options: &ImportOptions) -> Option<DiscussionDraft> {
    if !filter::qualifies(row) {
        return None;
    }
    let raw = row.content.as_deref()?;
    let rules = RedactionRuleSet::standard();
    let question = sanitize::sanitize_with(raw, rules, options.title_max_chars);
    let privacy = sanitize::privacy_report(raw, rules);
    Some(DiscussionDraft::new(question, &options.category, privacy))
}

/// Publish every qualifying row and return the tally.
pub fn run_import(
    rows: &[TranscriptRow],
    publisher: &mut dyn Publisher,
    options: &ImportOptions,
) -> ImportSummary {
    let questions = filter::filter_questions(rows);
    let mut summary = ImportSummary {
        total_rows: rows.len(),
        qualifying: questions.len(),
        ..Default::default()
    };

    tracing::info!(
        total = summary.total_rows,
        questions = summary.qualifying,
        "Filtered transcript to attendee questions"
    );

    for (idx, row) in questions.iter().enumerate() {
        let position = idx + 1;
        let Some(draft) = draft_for(row, options) else {
            continue;
        };

        tracing::debug!(
            row = row.line,
            title_chars = draft.title.chars().count(),
            body_chars = draft.body.chars().count(),
            emails_redacted = draft.privacy.emails_redacted,
            signature_removed = draft.privacy.signature_removed,
            "Sanitized question"
        );

        match publisher.publish(&draft) {
            Ok(published) => {
                summary.created += 1;
                tracing::info!(
                    position,
                    of = summary.qualifying,
                    row = row.line,
                    url = published.url.as_deref().unwrap_or(""),
                    "Created discussion"
                );
            }
            Err(e) => {
                summary.failed += 1;
                tracing::warn!(
                    position,
                    of = summary.qualifying,
                    row = row.line,
                    error = %e,
                    "Failed to create discussion; continuing"
                );
            }
        }
    }

    tracing::info!(
        created = summary.created,
        failed = summary.failed,
        "Import finished"
    );
    summary
}
