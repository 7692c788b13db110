use crate::config::RetrievalConfig;
use crate::error::RecordError;
use crate::eval::{evaluate_parsed, Strategy};
use crate::index::InvertedIndex;
use crate::query::Query;
use crate::rank::{rank, ResultEntry};
use crate::Document;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub processed: usize,
    pub skipped: usize,
    pub fallbacks: usize,
    pub entries: usize,
}

#[derive(Debug, Clone, Default)]
pub struct BatchOutput {
    /// Run lines, queries in input order, each query's lines in rank order.
    pub entries: Vec<ResultEntry>,
    pub stats: BatchStats,
}

/// Owns the index for the run and answers query batches against it.
pub struct Pipeline {
    index: InvertedIndex,
    config: RetrievalConfig,
}

impl Pipeline {
    pub fn new(index: InvertedIndex, config: RetrievalConfig) -> Self { Self { index, config } }

    pub fn from_documents(documents: &[Document], config: RetrievalConfig) -> Self {
        Self::new(InvertedIndex::build(documents), config)
    }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    /// Ranked entries for a single query.
    pub fn search(&self, query: &Query) -> Result<Vec<ResultEntry>, RecordError> {
        let parsed = query.parse()?;
        let evaluation = evaluate_parsed(&parsed, &self.index);
        Ok(rank(&parsed.id, &evaluation.docs, &self.config))
    }

    /// Evaluate every query in order. Malformed queries are logged and
    /// contribute no lines.
    pub fn run_batch(&self, queries: &[Query]) -> BatchOutput {
        let mut out = BatchOutput::default();
        for query in queries {
            let parsed = match query.parse() {
                Ok(parsed) => parsed,
                Err(error) => {
                    tracing::warn!(%error, "skipping query");
                    out.stats.skipped += 1;
                    continue;
                }
            };
            let evaluation = evaluate_parsed(&parsed, &self.index);
            if evaluation.strategy == Strategy::Fallback {
                out.stats.fallbacks += 1;
            }
            let entries = rank(&parsed.id, &evaluation.docs, &self.config);
            tracing::debug!(query = %parsed.id, hits = evaluation.docs.len(), kept = entries.len(), "query evaluated");
            out.stats.processed += 1;
            out.entries.extend(entries);
        }
        out.stats.entries = out.entries.len();
        tracing::info!(
            processed = out.stats.processed,
            skipped = out.stats.skipped,
            fallbacks = out.stats.fallbacks,
            entries = out.stats.entries,
            "query batch complete"
        );
        out
    }
}
