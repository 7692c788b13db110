use anyhow::Result;
use boolir_core::persist::{load_documents, load_queries, save_results};
use boolir_core::{Pipeline, Query, ResultEntry, RetrievalConfig, TagSource};
use std::path::{Path, PathBuf};

/// Run file name for the `n`th topics input (1-based).
pub fn result_file_name(n: usize) -> String { format!("result_binary_{n}.tsv") }

/// Index `answers` once, then write one run file per topics input into
/// `output_dir`. Returns the written paths in input order.
pub fn run_batches(answers: &Path, topics: &[PathBuf], output_dir: &Path, config: RetrievalConfig) -> Result<Vec<PathBuf>> {
    let docs = load_documents(answers)?;
    let pipeline = Pipeline::from_documents(&docs, config);
    tracing::info!(num_docs = pipeline.index().num_docs(), num_terms = pipeline.index().num_terms(), "index ready");

    let mut written = Vec::with_capacity(topics.len());
    for (n, topic_path) in topics.iter().enumerate() {
        let queries = load_queries(topic_path)?;
        let out = pipeline.run_batch(&queries);
        let path = output_dir.join(result_file_name(n + 1));
        save_results(&path, &out.entries)?;
        written.push(path);
    }
    Ok(written)
}

/// Evaluate a single ad-hoc query against `answers`.
pub fn search_once(answers: &Path, title: &str, tags: Vec<String>, config: RetrievalConfig) -> Result<Vec<ResultEntry>> {
    let docs = load_documents(answers)?;
    let pipeline = Pipeline::from_documents(&docs, config);
    let query = Query::new("adhoc", title, TagSource::List(tags));
    Ok(pipeline.search(&query)?)
}
