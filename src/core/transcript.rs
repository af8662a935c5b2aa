// qna-import - core/transcript.rs
//
// CSV reading of the Q&A transcript export.
// Core layer: reads from any Read trait object; the file-path wrapper only
// adds the size guard and path context to errors.
//
// Required headers: Source, Type, Content. Reactions is optional.
// Quoted multi-line Content cells are preserved as-is.

use crate::core::model::TranscriptRow;
use crate::util::constants;
use crate::util::error::TranscriptError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Column positions resolved from the header record.
#[derive(Debug, Clone, Copy)]
struct Columns {
    source: usize,
    kind: usize,
    content: usize,
    reactions: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, TranscriptError> {
        let names: Vec<String> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        let find = |wanted: &str| names.iter().position(|n| n == wanted);

        let source = find(constants::COLUMN_SOURCE);
        let kind = find(constants::COLUMN_TYPE);
        let content = find(constants::COLUMN_CONTENT);

        match (source, kind, content) {
            (Some(source), Some(kind), Some(content)) => Ok(Self {
                source,
                kind,
                content,
                reactions: find(constants::COLUMN_REACTIONS),
            }),
            _ => {
                let missing = [
                    (constants::COLUMN_SOURCE, source),
                    (constants::COLUMN_TYPE, kind),
                    (constants::COLUMN_CONTENT, content),
                ]
                .into_iter()
                .filter(|(_, idx)| idx.is_none())
                .map(|(name, _)| name)
                .collect();
                Err(TranscriptError::MissingColumns {
                    missing,
                    found: names,
                })
            }
        }
    }
}

/// Read every transcript row from `reader`, in file order.
///
/// Short rows are tolerated: cells past the end of a record are `None`.
/// Blank cells are `None` too, so the Row Filter never sees an empty
/// question.
pub fn read_transcript<R: Read>(reader: R) -> Result<Vec<TranscriptRow>, TranscriptError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::resolve(csv_reader.headers()?)?;

    let mut rows = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        rows.push(TranscriptRow {
            line: idx as u64 + 1,
            source: cell(&record, Some(columns.source)),
            kind: cell(&record, Some(columns.kind)),
            content: cell(&record, Some(columns.content)),
            reactions: cell(&record, columns.reactions),
        });
    }

    tracing::debug!(rows = rows.len(), "Transcript parsed");
    Ok(rows)
}

/// Open and read a transcript file, rejecting files above the size limit.
pub fn read_transcript_file(path: &Path) -> Result<Vec<TranscriptRow>, TranscriptError> {
    let io_err = |source| TranscriptError::Io {
        path: path.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(path).map_err(io_err)?;
    if metadata.len() > constants::MAX_TRANSCRIPT_FILE_SIZE {
        return Err(TranscriptError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_TRANSCRIPT_FILE_SIZE,
        });
    }

    let file = File::open(path).map_err(io_err)?;
    let rows = read_transcript(BufReader::new(file))?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Loaded transcript");
    Ok(rows)
}

fn cell(record: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i))
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_rows_in_order() {
        let csv = "Source,Type,Content,Reactions\n\
                   ATTENDEE,QUESTION,First?,2\n\
                   MODERATOR,ANSWER,Reply,0\n";
        let rows = read_transcript(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 1);
        assert_eq!(rows[0].source.as_deref(), Some("ATTENDEE"));
        assert_eq!(rows[0].kind.as_deref(), Some("QUESTION"));
        assert_eq!(rows[0].content.as_deref(), Some("First?"));
        assert_eq!(rows[0].reactions.as_deref(), Some("2"));
        assert_eq!(rows[1].line, 2);
    }

    #[test]
    fn test_multiline_quoted_content() {
        let csv = "Source,Type,Content\n\
                   ATTENDEE,QUESTION,\"Line one\nLine two, with comma\nThanks,\nJo\"\n";
        let rows = read_transcript(csv.as_bytes()).unwrap();
        assert_eq!(
            rows[0].content.as_deref(),
            Some("Line one\nLine two, with comma\nThanks,\nJo")
        );
    }

    #[test]
    fn test_reactions_column_optional_and_order_free() {
        let csv = "Content,Type,Source\nHello?,QUESTION,ATTENDEE\n";
        let rows = read_transcript(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].content.as_deref(), Some("Hello?"));
        assert_eq!(rows[0].source.as_deref(), Some("ATTENDEE"));
        assert!(rows[0].reactions.is_none());
    }

    #[test]
    fn test_missing_column_is_reported() {
        let csv = "Source,Content\nATTENDEE,Hi\n";
        let err = read_transcript(csv.as_bytes()).unwrap_err();
        match err {
            TranscriptError::MissingColumns { missing, found } => {
                assert_eq!(missing, vec!["Type"]);
                assert_eq!(found, vec!["Source", "Content"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_short_and_blank_cells_become_none() {
        let csv = "Source,Type,Content,Reactions\n\
                   ATTENDEE,QUESTION\n\
                   ATTENDEE,QUESTION,   ,1\n";
        let rows = read_transcript(csv.as_bytes()).unwrap();
        assert!(rows[0].content.is_none());
        assert!(rows[0].reactions.is_none());
        assert!(rows[1].content.is_none());
        assert_eq!(rows[1].reactions.as_deref(), Some("1"));
    }

    #[test]
    fn test_bom_and_padded_headers() {
        let csv = "\u{feff}Source , Type,Content\nATTENDEE,QUESTION,Hi?\n";
        let rows = read_transcript(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].source.as_deref(), Some("ATTENDEE"));
    }

    #[test]
    fn test_empty_file_has_no_columns() {
        let err = read_transcript("".as_bytes()).unwrap_err();
        assert!(matches!(err, TranscriptError::MissingColumns { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_transcript_file(Path::new("/nonexistent/qna-import/qa.csv")).unwrap_err();
        assert!(matches!(err, TranscriptError::Io { .. }));
    }
}
