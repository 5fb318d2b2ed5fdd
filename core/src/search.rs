use crate::corpus::Corpus;
use crate::error::Result;
use crate::index::{Bm25Index, Bm25Params};
use crate::tokenizer::tokenize;
use serde::Serialize;
use std::cmp::Ordering;

/// A ranked hit with the original, untokenized content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    pub identifier: String,
    pub content: String,
    pub score: f64,
}

/// A corpus and the BM25 index built over it.
#[derive(Debug)]
pub struct Retriever {
    corpus: Corpus,
    index: Bm25Index,
}

impl Retriever {
    pub fn new(corpus: Corpus) -> Result<Self> {
        Self::with_params(corpus, Bm25Params::default())
    }

    pub fn with_params(corpus: Corpus, params: Bm25Params) -> Result<Self> {
        let index = Bm25Index::build_with(corpus.documents().iter().map(|d| d.tokens.as_slice()), params)?;
        Ok(Self { corpus, index })
    }

    pub fn corpus(&self) -> &Corpus { &self.corpus }

    pub fn index(&self) -> &Bm25Index { &self.index }

    /// The `top_n` best documents for `query`, best first. Equal scores keep
    /// corpus insertion order.
    pub fn search(&self, query: &str, top_n: usize) -> Result<Vec<ScoredResult>> {
        let q_tokens = tokenize(query);
        let scores = self.index.scores(&q_tokens)?;

        let mut ranked: Vec<usize> = (0..scores.len()).collect();
        // stable: ties stay in position order
        ranked.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));
        ranked.truncate(top_n);

        let results: Vec<ScoredResult> = ranked
            .into_iter()
            .filter_map(|pos| {
                let doc = self.corpus.get(pos)?;
                let content = self.corpus.content(&doc.identifier)?;
                Some(ScoredResult { identifier: doc.identifier.clone(), content: content.to_string(), score: scores[pos] })
            })
            .collect();
        tracing::debug!(query, hits = results.len(), "search complete");
        Ok(results)
    }
}
