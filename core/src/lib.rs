//! Boolean retrieval over a corpus of short text documents.
//!
//! Documents are normalized into terms and folded into a presence-only
//! inverted index. Queries combine a conjunctive title with disjunctive tags
//! and relax to a plain disjunction when that matches nothing. Results come
//! out as TREC-style run lines.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod config;
pub mod error;
pub mod eval;
pub mod index;
pub mod persist;
pub mod pipeline;
pub mod query;
pub mod rank;
pub mod tokenizer;

pub use config::RetrievalConfig;
pub use error::{RecordError, RecordKind, TagListError};
pub use eval::{evaluate, evaluate_detailed, Evaluation, Strategy};
pub use index::{BuildStats, IndexBuilder, InvertedIndex, PostingSet};
pub use pipeline::{BatchOutput, BatchStats, Pipeline};
pub use query::{ParsedQuery, Query, TagSource};
pub use rank::{rank, ResultEntry};

/// Identifier of a document or query as it appears in the input JSON.
///
/// Integers order numerically and sort before strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Num(i64),
    Text(String),
}

pub type DocId = RecordId;
pub type QueryId = RecordId;

impl RecordId {
    /// A string id with nothing but whitespace counts as absent.
    pub fn is_blank(&self) -> bool {
        matches!(self, RecordId::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Num(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self { RecordId::Num(n) }
}

impl From<i32> for RecordId {
    fn from(n: i32) -> Self { RecordId::Num(n.into()) }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self { RecordId::Text(s.to_string()) }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self { RecordId::Text(s) }
}

/// A corpus record. `text` stays an untyped JSON value so that non-textual
/// content can be told apart from a missing field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "Id", alias = "id", default)]
    pub id: Option<DocId>,
    #[serde(rename = "Text", alias = "text", default)]
    pub text: Option<serde_json::Value>,
}

impl Document {
    pub fn new(id: impl Into<DocId>, text: impl Into<String>) -> Self {
        Self { id: Some(id.into()), text: Some(serde_json::Value::String(text.into())) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_deserialize_from_numbers_and_strings() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[7, "a-7", ""]"#).unwrap();
        assert_eq!(ids[0], RecordId::Num(7));
        assert_eq!(ids[1], RecordId::Text("a-7".into()));
        assert!(ids[2].is_blank());
        assert_eq!(ids[0].to_string(), "7");
    }

    #[test]
    fn numeric_ids_sort_numerically_before_strings() {
        let mut ids = vec![RecordId::from("b"), RecordId::from(10), RecordId::from(9), RecordId::from("a")];
        ids.sort();
        assert_eq!(ids, vec![RecordId::from(9), RecordId::from(10), RecordId::from("a"), RecordId::from("b")]);
    }

    #[test]
    fn document_accepts_lowercase_field_names() {
        let doc: Document = serde_json::from_str(r#"{"id": 3, "text": "hello"}"#).unwrap();
        assert_eq!(doc.id, Some(RecordId::Num(3)));
        assert_eq!(doc.text, Some(serde_json::Value::String("hello".into())));

        let doc: Document = serde_json::from_str(r#"{"Id": 4, "body": "hello"}"#).unwrap();
        assert!(doc.text.is_none());
    }
}
