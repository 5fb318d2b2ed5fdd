//! Lexical retrieval over a directory of source files.
//!
//! Files are read into [`Document`]s, optionally joined by one document per
//! function/class definition found by [`extract`], and ranked against a
//! question with Okapi BM25 by a [`Retriever`].

pub mod corpus;
pub mod error;
pub mod extract;
pub mod index;
pub mod search;
pub mod tokenizer;

pub use corpus::{Corpus, CorpusMode, Document};
pub use error::{Result, RetrievalError};
pub use extract::{extract_definitions, Definition};
pub use index::{Bm25Index, Bm25Params, DocId, Posting, TermId};
pub use search::{Retriever, ScoredResult};
pub use tokenizer::tokenize;
