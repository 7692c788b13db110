use boolir_core::persist::{load_documents, load_queries, save_results};
use boolir_core::{DocId, Pipeline, QueryId, RetrievalConfig, TagSource};
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_json_arrays_and_jsonl() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("answers.json");
    fs::write(&json, r#"[{"Id": 1, "Text": "first answer"}, {"Id": "x2", "Text": "second"}]"#).unwrap();
    let jsonl = dir.path().join("more.jsonl");
    fs::write(&jsonl, "{\"Id\": 3, \"Text\": \"third\"}\n\n{\"Id\": 4}\n").unwrap();

    let docs = load_documents(&json).unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1].id, Some(DocId::from("x2")));

    let docs = load_documents(&jsonl).unwrap();
    assert_eq!(docs.len(), 2);
    assert!(docs[1].text.is_none());

    // directory: files in name order
    let all = load_documents(dir.path()).unwrap();
    let ids: Vec<String> = all.iter().map(|d| d.id.as_ref().unwrap().to_string()).collect();
    assert_eq!(ids, vec!["1", "x2", "3", "4"]);
}

#[test]
fn loads_topics_with_either_tag_form() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("topics.json");
    fs::write(
        &path,
        r#"[{"Id": "T1", "Title": "a", "Tags": "['x', 'y']"}, {"Id": "T2", "Title": "b", "Tags": ["z"]}, {"Id": "T3", "Title": "c"}]"#,
    )
    .unwrap();
    let queries = load_queries(&path).unwrap();
    assert_eq!(queries.len(), 3);
    assert_eq!(queries[0].id, Some(QueryId::from("T1")));
    assert!(matches!(queries[0].tags, Some(TagSource::Text(_))));
    assert!(matches!(queries[1].tags, Some(TagSource::List(_))));
    assert!(queries[2].tags.is_none());
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(load_documents(dir.path().join("nope.json")).is_err());
    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    assert!(load_documents(&bad).is_err());
}

#[test]
fn saves_six_column_run_file() {
    let dir = tempdir().unwrap();
    let docs = vec![boolir_core::Document::new(11, "matrix inverse"), boolir_core::Document::new(12, "matrix rank")];
    let pipeline = Pipeline::from_documents(&docs, RetrievalConfig::new("run_a"));
    let out = pipeline.run_batch(&[boolir_core::Query::new(1, "matrix", Vec::<String>::new())]);

    let path = dir.path().join("runs/result.tsv");
    save_results(&path, &out.entries).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<Vec<&str>> = text.lines().map(|l| l.split('\t').collect()).collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|cols| cols.len() == 6 && cols[1] == "Q0" && cols[5] == "run_a"));
    assert_eq!(lines[0], vec!["1", "Q0", "11", "1", "100", "run_a"]);
    assert_eq!(lines[1], vec!["1", "Q0", "12", "2", "99", "run_a"]);
}

#[test]
fn wrongly_typed_records_are_skipped_not_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("topics.json");
    fs::write(
        &path,
        r#"[
            {"Id": 1, "Title": "cats", "Tags": []},
            {"Id": 2, "Title": 42, "Tags": []},
            {"Id": 3, "Title": "dogs", "Tags": ["a", null]},
            {"Id": 4, "Title": "birds", "Tags": ["b"]}
        ]"#,
    )
    .unwrap();
    let queries = load_queries(&path).unwrap();
    let ids: Vec<QueryId> = queries.iter().filter_map(|q| q.id.clone()).collect();
    assert_eq!(ids, vec![QueryId::from(1), QueryId::from(4)]);

    let lines = dir.path().join("answers.jsonl");
    fs::write(&lines, "{\"Id\": 1, \"Text\": \"kept\"}\n{\"Id\": 2.5, \"Text\": \"float id\"}\n{\"Id\": 3, \"Text\": \"also kept\"}\n").unwrap();
    let docs = load_documents(&lines).unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1].id, Some(DocId::from(3)));
}
