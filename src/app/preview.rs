// qna-import - app/preview.rs
//
// Dry-run publisher: prints each draft instead of creating it, so the CSV
// processing and redaction can be checked without credentials.

use crate::core::model::{DiscussionDraft, ImportSummary, PublishedDiscussion};
use crate::core::publisher::Publisher;
use crate::util::error::PublishError;
use std::io::{self, Write};

const RULE_WIDTH: usize = 80;

/// Writes a numbered preview of every draft to `out`.
pub struct DryRunPublisher<W: Write> {
    out: W,
    count: usize,
}

impl<W: Write> DryRunPublisher<W> {
    pub fn new(out: W) -> Self {
        Self { out, count: 0 }
    }

    /// Drafts previewed so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Banner printed before the first draft.
    pub fn write_header(&mut self, csv_path: &str) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "GitHub Discussions Importer - DRY RUN MODE")?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "Transcript: {csv_path}")?;
        writeln!(self.out, "No discussions will be created.")
    }

    /// Closing tally.
    pub fn write_summary(&mut self, summary: &ImportSummary) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out)?;
        writeln!(self.out, "{rule}")?;
        writeln!(
            self.out,
            "Summary: {} of {} rows are attendee questions; {} discussions would be created",
            summary.qualifying, summary.total_rows, summary.created
        )?;
        writeln!(self.out, "{rule}")
    }

    fn write_draft(&mut self, draft: &DiscussionDraft) -> io::Result<()> {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(self.out)?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "Discussion #{}", self.count)?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "Title:     {}", draft.title)?;
        writeln!(self.out, "Category:  {}", draft.category)?;
        writeln!(self.out)?;
        writeln!(self.out, "Body:")?;
        writeln!(self.out, "{}", draft.body)?;

        if draft.privacy.any() {
            writeln!(self.out)?;
            writeln!(self.out, "[Privacy Protection Applied]")?;
            if draft.privacy.emails_redacted > 0 {
                writeln!(
                    self.out,
                    "  - {} email address(es) redacted",
                    draft.privacy.emails_redacted
                )?;
            }
            if draft.privacy.signature_removed {
                writeln!(self.out, "  - Signature lines removed")?;
            }
        }
        Ok(())
    }
}

impl<W: Write> Publisher for DryRunPublisher<W> {
    fn publish(&mut self, draft: &DiscussionDraft) -> Result<PublishedDiscussion, PublishError> {
        self.count += 1;
        self.write_draft(draft)
            .map_err(|source| PublishError::Output { source })?;
        Ok(PublishedDiscussion {
            id: String::new(),
            url: None,
        })
    }
}
