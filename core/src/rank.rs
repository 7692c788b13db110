use crate::config::RetrievalConfig;
use crate::{DocId, QueryId};
use serde::Serialize;
use std::fmt;

/// Second column of every run line.
pub const TREC_MARKER: &str = "Q0";

/// One line of a TREC run file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    pub query_id: QueryId,
    pub doc_id: DocId,
    /// 1-based.
    pub rank: usize,
    pub score: usize,
    pub run_label: String,
}

impl fmt::Display for ResultEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.query_id, TREC_MARKER, self.doc_id, self.rank, self.score, self.run_label
        )
    }
}

/// Number the documents in iteration order, keeping at most
/// `config.max_results`. Rank `r` scores `max_results - r + 1`, which never
/// overflows since `r <= max_results`.
///
/// There is no relevance ordering: with a [`PostingSet`](crate::PostingSet)
/// the order is ascending document id.
pub fn rank<'a, I>(query_id: &QueryId, docs: I, config: &RetrievalConfig) -> Vec<ResultEntry>
where
    I: IntoIterator<Item = &'a DocId>,
{
    docs.into_iter()
        .take(config.max_results)
        .zip(1..)
        .map(|(doc_id, rank)| ResultEntry {
            query_id: query_id.clone(),
            doc_id: doc_id.clone(),
            rank,
            score: config.max_results - rank + 1,
            run_label: config.run_label.clone(),
        })
        .collect()
}
