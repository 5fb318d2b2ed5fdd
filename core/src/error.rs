use std::path::PathBuf;

/// Errors raised while building or querying a retrieval index.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// A source file could not be read as UTF-8 text. Absorbed per file.
    #[error("cannot read {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No documents were available to index.
    #[error("no valid documents provided")]
    EmptyCorpus,

    /// The index was queried before it was built.
    #[error("BM25 index is not initialized")]
    UninitializedIndex,
}

pub type Result<T> = std::result::Result<T, RetrievalError>;
