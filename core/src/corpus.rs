use crate::error::{Result, RetrievalError};
use crate::extract::extract_definitions;
use crate::tokenizer::tokenize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One retrievable unit: a whole file or a definition carved out of one.
#[derive(Debug, Clone)]
pub struct Document {
    pub identifier: String,
    pub raw_content: String,
    pub tokens: Vec<String>,
}

impl Document {
    pub fn new(identifier: impl Into<String>, raw_content: impl Into<String>) -> Self {
        let raw_content = raw_content.into();
        let tokens = tokenize(&raw_content);
        Self { identifier: identifier.into(), raw_content, tokens }
    }
}

/// Which document kinds a corpus is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorpusMode {
    /// One document per readable file.
    Files,
    /// File documents followed by one document per extracted definition.
    #[default]
    FilesAndDefinitions,
}

/// Ordered documents plus an identifier lookup. Positions never change once a
/// document is pushed; they are the join key with the scoring index.
#[derive(Debug, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    positions: HashMap<String, usize>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    /// Build a corpus from already-constructed documents.
    pub fn from_documents<I>(docs: I) -> Result<Self>
    where
        I: IntoIterator<Item = Document>,
    {
        let mut corpus = Self::new();
        for doc in docs {
            corpus.push(doc);
        }
        if corpus.is_empty() {
            return Err(RetrievalError::EmptyCorpus);
        }
        Ok(corpus)
    }

    /// Read, tokenize and collect the given files.
    pub fn build<P: AsRef<Path>>(paths: &[P], mode: CorpusMode) -> Result<Self> {
        let mut docs = file_documents(paths);
        if mode == CorpusMode::FilesAndDefinitions {
            docs.extend(definition_documents(paths));
        }
        let corpus = Self::from_documents(docs)?;
        tracing::info!(documents = corpus.len(), ?mode, "corpus built");
        Ok(corpus)
    }

    /// Append a document. Returns false, leaving the corpus untouched, when the
    /// identifier is already present.
    pub fn push(&mut self, doc: Document) -> bool {
        if self.positions.contains_key(&doc.identifier) {
            tracing::warn!(identifier = %doc.identifier, "duplicate document identifier skipped");
            return false;
        }
        self.positions.insert(doc.identifier.clone(), self.documents.len());
        self.documents.push(doc);
        true
    }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    pub fn documents(&self) -> &[Document] { &self.documents }

    pub fn get(&self, position: usize) -> Option<&Document> { self.documents.get(position) }

    /// Original text of the document with this identifier.
    pub fn content(&self, identifier: &str) -> Option<&str> {
        self.positions
            .get(identifier)
            .map(|&pos| self.documents[pos].raw_content.as_str())
    }
}

/// Read a file as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| RetrievalError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Stable string form of a path, used as a document identifier.
pub fn path_identifier(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// One document per readable file, in input order. Unreadable files are
/// logged and skipped.
pub fn file_documents<P: AsRef<Path>>(paths: &[P]) -> Vec<Document> {
    let mut docs = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        match read_source(path) {
            Ok(content) => docs.push(Document::new(path_identifier(path), content)),
            Err(err) => tracing::warn!(error = %err, "file skipped"),
        }
    }
    docs
}

/// One document per extracted definition, grouped by file in input order and
/// by discovery order within a file.
pub fn definition_documents<P: AsRef<Path>>(paths: &[P]) -> Vec<Document> {
    let mut by_file = extract_definitions(paths);
    let mut docs = Vec::new();
    for path in paths {
        let path: PathBuf = path.as_ref().to_path_buf();
        let Some(definitions) = by_file.remove(&path) else { continue };
        for def in definitions {
            let identifier = def.identifier();
            docs.push(Document::new(identifier, def.text));
        }
    }
    docs
}
