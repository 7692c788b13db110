use crate::error::{RecordError, RecordKind};
use crate::tokenizer::normalize;
use crate::{DocId, Document};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Documents containing a term, in ascending id order.
pub type PostingSet = BTreeSet<DocId>;

/// Term → documents containing it. Presence only: term frequency is not kept.
///
/// Only [`IndexBuilder::finish`] produces one, and it has no mutators, so a
/// query can never see a half-built index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: HashMap<String, PostingSet>,
    num_docs: usize,
}

impl InvertedIndex {
    /// Build from a whole corpus. Invalid documents are logged and skipped.
    pub fn build<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a Document>,
    {
        let mut builder = IndexBuilder::new();
        for doc in documents {
            builder.add(doc);
        }
        builder.finish()
    }

    pub fn postings(&self, term: &str) -> Option<&PostingSet> { self.postings.get(term) }

    pub fn contains(&self, term: &str) -> bool { self.postings.contains_key(term) }

    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ { self.postings.keys().map(String::as_str) }

    pub fn num_terms(&self) -> usize { self.postings.len() }

    /// Number of distinct document ids that made it into the index.
    pub fn num_docs(&self) -> usize { self.num_docs }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Distinct document ids indexed.
    pub indexed: usize,
    pub skipped: usize,
    /// Records whose id was already indexed; their terms are merged in.
    pub duplicates: usize,
}

/// Accumulates documents into an [`InvertedIndex`]. Each document's
/// contribution is independent, so insertion order doesn't matter.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    postings: HashMap<String, PostingSet>,
    seen: HashSet<DocId>,
    stats: BuildStats,
}

impl IndexBuilder {
    pub fn new() -> Self { Self::default() }

    /// Index one document, or say why it can't be.
    pub fn add_document(&mut self, doc: &Document) -> Result<(), RecordError> {
        let (id, text) = match validate(doc) {
            Ok(ok) => ok,
            Err(e) => {
                self.stats.skipped += 1;
                return Err(e);
            }
        };
        let terms: HashSet<String> = normalize(text).into_iter().collect();
        for term in terms {
            self.postings.entry(term).or_default().insert(id.clone());
        }
        if self.seen.insert(id.clone()) {
            self.stats.indexed += 1;
        } else {
            tracing::debug!(doc = %id, "duplicate document id, merging terms");
            self.stats.duplicates += 1;
        }
        Ok(())
    }

    /// [`add_document`](Self::add_document), logging instead of returning the error.
    pub fn add(&mut self, doc: &Document) -> bool {
        match self.add_document(doc) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%error, "skipping document");
                false
            }
        }
    }

    pub fn stats(&self) -> BuildStats { self.stats }

    pub fn finish(self) -> InvertedIndex {
        tracing::info!(
            indexed = self.stats.indexed,
            skipped = self.stats.skipped,
            duplicates = self.stats.duplicates,
            num_terms = self.postings.len(),
            "inverted index built"
        );
        InvertedIndex { postings: self.postings, num_docs: self.stats.indexed }
    }
}

fn validate(doc: &Document) -> Result<(&DocId, &str), RecordError> {
    let id = match &doc.id {
        Some(id) if !id.is_blank() => id,
        _ => {
            return Err(RecordError::MissingField {
                kind: RecordKind::Document,
                id: "<unknown>".into(),
                field: "Id",
            })
        }
    };
    match &doc.text {
        None => Err(RecordError::MissingField { kind: RecordKind::Document, id: id.to_string(), field: "Text" }),
        Some(Value::String(text)) if !text.trim().is_empty() => Ok((id, text.as_str())),
        Some(_) => Err(RecordError::InvalidContent { kind: RecordKind::Document, id: id.to_string(), field: "Text" }),
    }
}
