use crate::query::Query;
use crate::rank::ResultEntry;
use crate::Document;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Load corpus records from a `.json`/`.jsonl` file or a directory of them.
pub fn load_documents<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let docs = load_records(path.as_ref())?;
    tracing::info!(path = %path.as_ref().display(), count = docs.len(), "loaded documents");
    Ok(docs)
}

/// Load topic records from a `.json`/`.jsonl` file or a directory of them.
pub fn load_queries<P: AsRef<Path>>(path: P) -> Result<Vec<Query>> {
    let queries = load_records(path.as_ref())?;
    tracing::info!(path = %path.as_ref().display(), count = queries.len(), "loaded queries");
    Ok(queries)
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut records = Vec::new();
    for file in input_files(path)? {
        if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            read_jsonl(&file, &mut records)?;
        } else {
            read_json(&file, &mut records)?;
        }
    }
    Ok(records)
}

fn input_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        anyhow::bail!("input not found: {}", path.display());
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
        let p = entry.path();
        if p.is_file() && matches!(p.extension().and_then(|s| s.to_str()), Some("json" | "jsonl")) {
            files.push(p.to_path_buf());
        }
    }
    Ok(files)
}

fn read_jsonl<T: DeserializeOwned>(file: &Path, out: &mut Vec<T>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    for (lineno, line) in BufReader::new(f).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let value = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid JSON", file.display(), lineno + 1))?;
        push_record(value, file, lineno + 1, out);
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(file: &Path, out: &mut Vec<T>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("{}: invalid JSON", file.display()))?;
    match json {
        serde_json::Value::Array(arr) => {
            for (n, v) in arr.into_iter().enumerate() {
                push_record(v, file, n + 1, out);
            }
        }
        serde_json::Value::Object(_) => push_record(json, file, 1, out),
        other => anyhow::bail!("{}: expected an array or object, found {other}", file.display()),
    }
    Ok(())
}

/// A record whose fields have the wrong JSON types is dropped with a
/// warning; the rest of the file still loads.
fn push_record<T: DeserializeOwned>(value: serde_json::Value, file: &Path, position: usize, out: &mut Vec<T>) {
    match serde_json::from_value(value) {
        Ok(record) => out.push(record),
        Err(error) => tracing::warn!(file = %file.display(), position, %error, "skipping unreadable record"),
    }
}

/// Write run lines, one per entry, in the order given.
pub fn write_results<W: Write>(mut w: W, entries: &[ResultEntry]) -> Result<()> {
    for entry in entries {
        writeln!(w, "{entry}")?;
    }
    w.flush()?;
    Ok(())
}

pub fn save_results<P: AsRef<Path>>(path: P, entries: &[ResultEntry]) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir)?;
    }
    let f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_results(BufWriter::new(f), entries)?;
    tracing::info!(path = %path.display(), entries = entries.len(), "saved run file");
    Ok(())
}
