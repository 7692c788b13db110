use crate::error::RecordError;
use crate::index::{InvertedIndex, PostingSet};
use crate::query::{ParsedQuery, Query};

/// Which pass produced a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Title terms ANDed, then tag terms ORed in.
    Primary,
    /// Every title and tag term ORed, after the primary pass came back empty.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub docs: PostingSet,
    pub strategy: Strategy,
}

/// Documents matching `query`. A malformed query matches nothing and is logged.
pub fn evaluate(query: &Query, index: &InvertedIndex) -> PostingSet {
    match evaluate_detailed(query, index) {
        Ok(evaluation) => evaluation.docs,
        Err(error) => {
            tracing::warn!(%error, "skipping query");
            PostingSet::new()
        }
    }
}

pub fn evaluate_detailed(query: &Query, index: &InvertedIndex) -> Result<Evaluation, RecordError> {
    Ok(evaluate_parsed(&query.parse()?, index))
}

/// Primary pass: `AND(required) ∪ OR(optional)`, or just `OR(optional)` when
/// the title has no terms. If that is empty, `OR(required ∪ optional)`.
///
/// Note the optional terms widen the result rather than only reorder it.
pub fn evaluate_parsed(query: &ParsedQuery, index: &InvertedIndex) -> Evaluation {
    let optional = resolve_optional(&query.optional, index);
    let combined = match resolve_required(&query.required, index) {
        Some(mut required) => {
            required.extend(optional);
            required
        }
        None => optional,
    };
    if !combined.is_empty() {
        return Evaluation { docs: combined, strategy: Strategy::Primary };
    }

    tracing::debug!(query = %query.id, "no primary matches, relaxing to OR over all terms");
    let docs = resolve_optional(query.required.iter().chain(&query.optional), index);
    Evaluation { docs, strategy: Strategy::Fallback }
}

/// Intersection of the postings of every term. `None` when there are no
/// terms at all; empty as soon as one term is not in the index.
pub fn resolve_required(terms: &[String], index: &InvertedIndex) -> Option<PostingSet> {
    let (first, rest) = terms.split_first()?;
    let Some(first) = index.postings(first) else {
        return Some(PostingSet::new());
    };
    let mut docs = first.clone();
    for term in rest {
        match index.postings(term) {
            Some(postings) => docs.retain(|doc| postings.contains(doc)),
            None => return Some(PostingSet::new()),
        }
    }
    Some(docs)
}

/// Union of the postings of every term; unknown terms add nothing.
pub fn resolve_optional<'a, I>(terms: I, index: &InvertedIndex) -> PostingSet
where
    I: IntoIterator<Item = &'a String>,
{
    terms
        .into_iter()
        .filter_map(|term| index.postings(term))
        .flatten()
        .cloned()
        .collect()
}
