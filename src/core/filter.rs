// qna-import - core/filter.rs
//
// Row Filter: decides whether a transcript row is an importable attendee
// question. Matching is exact and case-sensitive; absent fields fail closed.
// Core layer: pure logic, no I/O.

use crate::core::model::TranscriptRow;
use crate::util::constants;

/// Returns true only for rows authored by an attendee, classified as a
/// question, and carrying content.
pub fn qualifies(row: &TranscriptRow) -> bool {
    let is_attendee = row.source.as_deref() == Some(constants::SOURCE_ATTENDEE);
    let is_question = row.kind.as_deref() == Some(constants::TYPE_QUESTION);
    is_attendee && is_question && row.content.is_some()
}

/// Keep the qualifying rows, in input order.
pub fn filter_questions(rows: &[TranscriptRow]) -> Vec<&TranscriptRow> {
    rows.iter().filter(|row| qualifies(row)).collect()
}
