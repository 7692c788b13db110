use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Document,
    Query,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Document => f.write_str("document"),
            RecordKind::Query => f.write_str("query"),
        }
    }
}

/// Per-record problems. None of these abort a batch: the record is skipped
/// and the error is logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("{kind} {id} is missing required field `{field}`")]
    MissingField { kind: RecordKind, id: String, field: &'static str },
    #[error("{kind} {id} has empty or non-textual `{field}`")]
    InvalidContent { kind: RecordKind, id: String, field: &'static str },
}

/// Why a textual tag list like `"['a', 'b']"` could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagListError {
    #[error("tag list is not enclosed in square brackets")]
    NotAList,
    #[error("unterminated string literal starting at byte {0}")]
    Unterminated(usize),
    #[error("unexpected {found:?} at byte {pos}")]
    Unexpected { pos: usize, found: char },
}
