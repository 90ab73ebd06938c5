use search::config::CorpusArgs;
use search::loader::load_directory;
use search::open_index;
use search::repl::{run_repl, NO_RESULTS};
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;
use tfidf_core::{IndexConfig, SearchIndex};

fn build_tiny_corpus(dir: &std::path::Path) {
    fs::write(dir.join("b_dogs.txt"), "The dog sat on the mat.").unwrap();
    fs::write(dir.join("a_cats.txt"), "The cat sat, purring.").unwrap();
    fs::write(dir.join("notes.md"), "cat cat cat").unwrap();
    fs::write(
        dir.join("c_pets.jsonl"),
        "{\"id\": \"p1\", \"title\": \"Pets\", \"body\": \"Cats and dogs are pets\", \"url\": \"https://example.org/pets\"}\n\n",
    )
    .unwrap();
}

#[test]
fn loads_supported_files_in_name_order() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let corpus = load_directory(dir.path(), false).unwrap();
    let titles: Vec<&str> = corpus.iter().map(|d| d.meta.title.as_str()).collect();
    assert_eq!(titles, vec!["a_cats", "b_dogs", "Pets"]);
    let pets = corpus.get(2).unwrap();
    assert_eq!(pets.meta.external_id, "p1");
    assert_eq!(pets.meta.url.as_deref(), Some("https://example.org/pets"));
    assert_eq!(corpus.get(0).unwrap().meta.external_id, "a_cats.txt");
}

#[test]
fn json_arrays_and_nested_directories() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(
        dir.path().join("batch.json"),
        r#"[{"id": "1", "title": "One", "body": "first body"}, {"id": "2", "title": "Two", "body": "second body"}]"#,
    )
    .unwrap();
    fs::write(dir.path().join("nested/deep.txt"), "deep text").unwrap();

    assert_eq!(load_directory(dir.path(), false).unwrap().len(), 2);
    let corpus = load_directory(dir.path(), true).unwrap();
    assert_eq!(corpus.len(), 3);
    assert!(corpus.iter().any(|d| d.meta.title == "deep"));
}

#[test]
fn single_json_object_is_one_document() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("single.json"),
        r#"{"id": "solo", "title": "Solo", "body": "just one", "url": "https://example.org/solo"}"#,
    )
    .unwrap();
    fs::write(dir.path().join("scalar.json"), "42").unwrap();
    let corpus = load_directory(dir.path(), false).unwrap();
    assert_eq!(corpus.len(), 1);
    let doc = corpus.get(0).unwrap();
    assert_eq!(doc.meta.external_id, "solo");
    assert_eq!(doc.text, "just one");
    assert_eq!(doc.meta.url.as_deref(), Some("https://example.org/solo"));
}

#[test]
fn missing_or_empty_directories_fail() {
    let dir = tempdir().unwrap();
    let err = load_directory(dir.path(), false).unwrap_err();
    assert!(err.to_string().contains("no documents found"));
    let err = load_directory(&dir.path().join("absent"), false).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn malformed_json_names_the_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("broken.jsonl"), "{not json}\n").unwrap();
    let err = load_directory(dir.path(), false).unwrap_err();
    assert!(format!("{err:#}").contains("broken.jsonl:1"));
}

#[test]
fn repl_ranks_queries_until_exit() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let index = SearchIndex::build(load_directory(dir.path(), false).unwrap(), IndexConfig::default()).unwrap();

    let input = Cursor::new("cat\nzebra\nEXIT\nnever reached\n");
    let mut out = Vec::new();
    run_repl(&index, input, &mut out, None).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Welcome to the TF-IDF Search Engine!"));
    assert!(text.contains("1. a_cats (Score: "));
    assert!(!text.contains("b_dogs (Score"));
    assert!(text.contains(NO_RESULTS));
    assert!(text.trim_end().ends_with("Exiting the search engine. Goodbye!"));
    assert_eq!(text.matches("Enter query").count(), 3);
}

#[test]
fn repl_stops_at_end_of_input() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let index = SearchIndex::build(load_directory(dir.path(), false).unwrap(), IndexConfig::default()).unwrap();
    let mut out = Vec::new();
    run_repl(&index, Cursor::new("dog"), &mut out, None).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("1. b_dogs (Score: "));
    assert!(!text.contains("Goodbye"));
}

#[test]
fn open_index_uses_config_file() {
    let dir = tempdir().unwrap();
    let docs = dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(docs.join("only.txt"), "solitary lighthouse").unwrap();
    let config_path = dir.path().join("search.json");
    fs::write(
        &config_path,
        format!(r#"{{"dir": {:?}, "index": {{"idf": "smoothed"}}}}"#, docs.to_string_lossy()),
    )
    .unwrap();

    let args = CorpusArgs { config: Some(config_path), ..Default::default() };
    let index = open_index(&args.resolve().unwrap()).unwrap();
    let score = index.search("lighthouse").score_of(0).unwrap();
    assert!(score > 0.0 && score <= 1.0 + 1e-12);
}
