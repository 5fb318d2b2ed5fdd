use codeqa_core::corpus::{definition_documents, file_documents};
use codeqa_core::{extract_definitions, Corpus, CorpusMode, RetrievalError, Retriever};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn one_file_document_per_readable_file() {
    let dir = tempdir().unwrap();
    let paths = vec![
        write(dir.path(), "a.py", "def foo(): pass"),
        write(dir.path(), "b.rs", "fn main() {}"),
        write(dir.path(), "c.go", "package main"),
    ];
    let docs = file_documents(&paths);
    assert_eq!(docs.len(), 3);
    assert_eq!(docs[0].identifier, paths[0].to_string_lossy());
}

#[test]
fn missing_files_are_skipped() {
    let dir = tempdir().unwrap();
    let paths = vec![
        dir.path().join("missing.js"),
        write(dir.path(), "present.js", "let x = 1;"),
        dir.path().to_path_buf(),
    ];
    let corpus = Corpus::build(&paths, CorpusMode::Files).unwrap();
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.content(&paths[1].to_string_lossy()), Some("let x = 1;"));
}

#[test]
fn no_readable_files_is_an_empty_corpus() {
    let dir = tempdir().unwrap();
    let paths = vec![dir.path().join("nope.py")];
    let err = Corpus::build(&paths, CorpusMode::FilesAndDefinitions).unwrap_err();
    assert!(matches!(err, RetrievalError::EmptyCorpus));
}

#[test]
fn higher_term_density_ranks_first() {
    let dir = tempdir().unwrap();
    let a = write(dir.path(), "a.py", "def foo(): pass");
    let b = write(dir.path(), "b.py", "def bar(): pass\ndef foo(): return 1");
    let corpus = Corpus::build(&[&a, &b], CorpusMode::Files).unwrap();
    let hits = Retriever::new(corpus).unwrap().search("foo", 10).unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].identifier, b.to_string_lossy());
    assert_eq!(hits[1].identifier, a.to_string_lossy());
    assert!(hits[0].score >= hits[1].score);
}

#[test]
fn definitions_in_pattern_order() {
    let dir = tempdir().unwrap();
    let js = write(dir.path(), "math.js", "function add(a,b) { return a+b; }\nclass Foo { }");
    let defs = extract_definitions(&[&js]);
    let found = &defs[&js];
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].text, "function add(a,b) { return a+b; }");
    assert_eq!(found[0].ordinal, 0);
    assert_eq!(found[1].text, "class Foo { }");
    assert_eq!(found[1].ordinal, 1);
}

#[test]
fn files_without_definitions_are_omitted() {
    let dir = tempdir().unwrap();
    let py = write(dir.path(), "plain.py", "def foo():\n    return 1\n");
    let missing = dir.path().join("gone.js");
    let defs = extract_definitions(&[&py, &missing]);
    assert!(defs.is_empty());
    assert!(!defs.contains_key(&py));
}

#[test]
fn composite_corpus_appends_definition_documents() {
    let dir = tempdir().unwrap();
    let app = write(
        dir.path(),
        "app.js",
        "function register(app) { app.use(chat); }\nconst send = (req) => { return binary.write(req); }\n",
    );
    let readme = write(dir.path(), "notes.txt", "chat handlers are registered in app.js");
    let mut paths = vec![app.clone(), readme.clone()];
    for (i, filler) in ["build scripts", "license text", "changelog entries"].iter().enumerate() {
        paths.push(write(dir.path(), &format!("filler{i}.md"), filler));
    }

    assert_eq!(definition_documents(&paths).len(), 2);

    let corpus = Corpus::build(&paths, CorpusMode::FilesAndDefinitions).unwrap();
    assert_eq!(corpus.len(), paths.len() + 2);
    let ids: Vec<&str> = corpus.documents().iter().map(|d| d.identifier.as_str()).collect();
    let app_id = app.to_string_lossy().into_owned();
    assert_eq!(ids[0], app_id);
    assert_eq!(ids[1], readme.to_string_lossy());
    assert_eq!(ids[5], format!("{app_id} - item 0"));
    assert_eq!(ids[6], format!("{app_id} - item 1"));

    let hits = Retriever::new(corpus).unwrap().search("send request binary", 4).unwrap();
    assert_eq!(hits[0].identifier, format!("{app_id} - item 1"));
    assert_eq!(hits[0].content, "send = (req) => { return binary.write(req); }");
}

#[test]
fn search_results_round_trip_raw_content() {
    let dir = tempdir().unwrap();
    let text = "/* Header */\nfunction Hello(World) {\n\treturn WORLD + 1;\n}\n";
    let path = write(dir.path(), "hello.js", text);
    let corpus = Corpus::build(&[&path], CorpusMode::FilesAndDefinitions).unwrap();
    let retriever = Retriever::new(corpus).unwrap();
    for hit in retriever.search("hello world", 5).unwrap() {
        assert_eq!(retriever.corpus().content(&hit.identifier), Some(hit.content.as_str()));
    }
    let hits = retriever.search("hello world", 5).unwrap();
    let file_hit = hits.iter().find(|h| h.identifier == path.to_string_lossy()).unwrap();
    assert_eq!(file_hit.content, text);
}
