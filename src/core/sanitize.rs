// qna-import - core/sanitize.rs
//
// Content Sanitizer: turns qualifying raw text into a redacted body and a
// single-line title.
//
// Pass order is fixed: email redaction runs over the full text before the
// signature scan, so an email on a signature line is never left exposed
// even if signature detection misses the line.
//
// Total over all strings: nothing here can fail or panic.

use crate::core::model::{PrivacyReport, SanitizedQuestion};
use crate::core::rules::RedactionRuleSet;
use crate::util::constants;
use std::borrow::Cow;

/// Sanitize with the standard rule set and default title length.
pub fn sanitize(raw: &str) -> SanitizedQuestion {
    sanitize_with(
        raw,
        RedactionRuleSet::standard(),
        constants::DEFAULT_TITLE_MAX_CHARS,
    )
}

/// Sanitize with an explicit rule set and title budget (in characters).
pub fn sanitize_with(raw: &str, rules: &RedactionRuleSet, title_max_chars: usize) -> SanitizedQuestion {
    let body = sanitize_body(raw, rules);
    let title = synthesize_title(&body, title_max_chars);
    SanitizedQuestion { title, body }
}

/// Email redaction followed by signature removal.
pub fn sanitize_body(raw: &str, rules: &RedactionRuleSet) -> String {
    let redacted = rules.redact_emails(raw);
    strip_signature(&redacted, rules)
}

/// Drop the first signature-start line and everything after it, then any
/// sign-off glued onto the end of the last remaining line.
///
/// Lines above the signature are kept verbatim. Blank lines at either end
/// and trailing whitespace are trimmed from the result.
pub fn strip_signature(text: &str, rules: &RedactionRuleSet) -> String {
    let kept: Vec<&str> = text
        .split('\n')
        .take_while(|line| !rules.is_signature_start(line))
        .collect();

    let body = trim_blank_edges(&kept.join("\n"));
    strip_trailing_signoff(body, rules)
}

/// Build the discussion title from a sanitized body.
///
/// Whitespace runs (newlines included) collapse to one space. When the
/// collapsed text exceeds `max_chars`, it is cut at `max_chars` characters,
/// pulled back to the last word boundary if that keeps most of the budget,
/// and marked with an ellipsis.
pub fn synthesize_title(body: &str, max_chars: usize) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut title = String::from(constants::TITLE_PREFIX);

    let cut = match collapsed.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => byte_idx,
        None => {
            title.push_str(&collapsed);
            return title;
        }
    };

    let mut head = &collapsed[..cut];
    if let Some(space) = head.rfind(' ') {
        let boundary = head[..space].chars().count() as f64;
        if boundary > max_chars as f64 * constants::TITLE_WORD_BOUNDARY_THRESHOLD {
            head = &head[..space];
        }
    }

    title.push_str(head.trim_end());
    title.push_str(constants::TITLE_ELLIPSIS);
    title
}

// =============================================================================
// Privacy report
// =============================================================================

/// Compare what redaction alone would leave with the final body.
pub fn privacy_report(raw: &str, rules: &RedactionRuleSet) -> PrivacyReport {
    let redacted = rules.redact_emails(raw);
    let body = strip_signature(&redacted, rules);
    PrivacyReport {
        emails_redacted: rules.count_emails(raw),
        signature_removed: body != trim_blank_edges(&redacted),
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Remove blank lines at both ends and trailing whitespace.
fn trim_blank_edges(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |i| i + 1);
    lines[start..end].join("\n").trim_end().to_string()
}

fn strip_trailing_signoff(body: String, rules: &RedactionRuleSet) -> String {
    let (head, last) = match body.rfind('\n') {
        Some(idx) => body.split_at(idx + 1),
        None => ("", body.as_str()),
    };
    let stripped = match rules.strip_inline_signoff(last) {
        Cow::Borrowed(_) => None,
        Cow::Owned(line) => Some(format!("{head}{line}")),
    };
    match stripped {
        Some(text) => trim_blank_edges(&text),
        None => body,
    }
}
