//! Sequence files and `id,sequence` CSV records
//!
//! Batch files are plain two-column CSV with a header row:
//!
//! ```text
//! id,sequence
//! 0,qwertyuiop...
//! ```
//!
//! Curve output adds a third, quoted column holding the curve as a list literal,
//! e.g. `0,abc...,"[0, 0, 1, 4]"`.

use crate::core::{Sequence, SequenceError};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const RECORDS_HEADER: &str = "id,sequence";
const CURVE_HEADER: &str = "id,sequence,num_words_curve";

/// One row of a batch file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub id: String,
    pub sequence: Sequence,
}

/// Error reading a batch file
#[derive(Debug)]
pub enum RecordError {
    Io(io::Error),
    MissingHeader,
    MalformedLine { line: usize },
    InvalidSequence { line: usize, source: SequenceError },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MissingHeader => write!(f, "Expected header line {RECORDS_HEADER:?}"),
            Self::MalformedLine { line } => {
                write!(f, "Line {line}: expected two comma-separated fields")
            }
            Self::InvalidSequence { line, source } => write!(f, "Line {line}: {source}"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidSequence { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for RecordError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Load a single sequence from a text file
///
/// # Errors
///
/// Returns `RecordError::Io` if the file cannot be read and
/// `RecordError::InvalidSequence` if it holds anything but letters and whitespace.
pub fn load_sequence<P: AsRef<Path>>(path: P) -> Result<Sequence, RecordError> {
    let content = fs::read_to_string(path)?;
    Sequence::parse(&content).map_err(|source| RecordError::InvalidSequence { line: 1, source })
}

/// Parse `id,sequence` records
///
/// Blank lines are ignored. Line numbers in errors are 1-based.
///
/// # Errors
///
/// Returns an error if the header is missing, a line does not have exactly two
/// fields, or a sequence holds invalid characters.
pub fn parse_records(content: &str) -> Result<Vec<SequenceRecord>, RecordError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    match lines.next() {
        Some((_, header)) if header.eq_ignore_ascii_case(RECORDS_HEADER) => {}
        _ => return Err(RecordError::MissingHeader),
    }

    lines
        .map(|(line, text)| -> Result<SequenceRecord, RecordError> {
            let (id, sequence) = text
                .split_once(',')
                .filter(|(_, rest)| !rest.contains(','))
                .ok_or(RecordError::MalformedLine { line })?;
            let sequence = Sequence::parse(sequence)
                .map_err(|source| RecordError::InvalidSequence { line, source })?;
            Ok(SequenceRecord {
                id: id.trim().to_string(),
                sequence,
            })
        })
        .collect()
}

/// Load `id,sequence` records from a file
///
/// # Errors
///
/// Returns `RecordError::Io` if the file cannot be read, otherwise as
/// `parse_records`.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<SequenceRecord>, RecordError> {
    parse_records(&fs::read_to_string(path)?)
}

/// Write `id,sequence` records with a header
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_records<W: Write>(writer: &mut W, records: &[SequenceRecord]) -> io::Result<()> {
    writeln!(writer, "{RECORDS_HEADER}")?;
    for record in records {
        writeln!(writer, "{},{}", record.id, record.sequence)?;
    }
    Ok(())
}

/// Render a curve as a list literal, e.g. `[0, 1, 3]`
#[must_use]
pub fn format_curve(curve: &[usize]) -> String {
    let items: Vec<String> = curve.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Write records with their curves as `id,sequence,num_words_curve`
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_curves<W: Write>(
    writer: &mut W,
    records: &[SequenceRecord],
    curves: &[Vec<usize>],
) -> io::Result<()> {
    writeln!(writer, "{CURVE_HEADER}")?;
    for (record, curve) in records.iter().zip(curves) {
        writeln!(
            writer,
            "{},{},\"{}\"",
            record.id,
            record.sequence,
            format_curve(curve)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_records_reads_rows() {
        let content = "id,sequence\n0,Apple\n\n1, grape \n";
        let records = parse_records(content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "0");
        assert_eq!(records[0].sequence.to_string(), "apple");
        assert_eq!(records[1].id, "1");
        assert_eq!(records[1].sequence.to_string(), "grape");
    }

    #[test]
    fn parse_records_requires_header() {
        assert!(matches!(
            parse_records("0,apple\n"),
            Err(RecordError::MissingHeader)
        ));
        assert!(matches!(parse_records(""), Err(RecordError::MissingHeader)));
    }

    #[test]
    fn parse_records_rejects_malformed_lines() {
        let content = "id,sequence\n0,apple\n1\n";
        assert!(matches!(
            parse_records(content),
            Err(RecordError::MalformedLine { line: 3 })
        ));

        let content = "id,sequence\n0,apple,extra\n";
        assert!(matches!(
            parse_records(content),
            Err(RecordError::MalformedLine { line: 2 })
        ));
    }

    #[test]
    fn parse_records_rejects_bad_sequence() {
        let content = "id,sequence\n0,ap9le\n";
        assert!(matches!(
            parse_records(content),
            Err(RecordError::InvalidSequence { line: 2, .. })
        ));
    }

    #[test]
    fn records_written_then_parsed() {
        let records = vec![
            SequenceRecord {
                id: "7".to_string(),
                sequence: Sequence::parse("lemon").unwrap(),
            },
            SequenceRecord {
                id: "8".to_string(),
                sequence: Sequence::parse("melon").unwrap(),
            },
        ];

        let mut out = Vec::new();
        write_records(&mut out, &records).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, "id,sequence\n7,lemon\n8,melon\n");
        assert_eq!(parse_records(&text).unwrap(), records);
    }

    #[test]
    fn curves_are_quoted_lists() {
        let records = vec![SequenceRecord {
            id: "0".to_string(),
            sequence: Sequence::parse("ab").unwrap(),
        }];
        let mut out = Vec::new();
        write_curves(&mut out, &records, &[vec![0, 1, 3]]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id,sequence,num_words_curve\n0,ab,\"[0, 1, 3]\"\n"
        );
    }

    #[test]
    fn format_curve_empty() {
        assert_eq!(format_curve(&[]), "[]");
    }

    #[test]
    fn missing_sequence_file_is_io_error() {
        let result = load_sequence("/nonexistent/path/to/sequence.txt");
        assert!(matches!(result, Err(RecordError::Io(_))));
    }
}
