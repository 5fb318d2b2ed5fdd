use crate::error::{Result, RetrievalError};
use std::collections::{HashMap, HashSet};

pub type TermId = u32;
/// Position of a document in its corpus.
pub type DocId = u32;

#[derive(Debug, Clone, Copy)]
pub struct Posting {
    pub doc_id: DocId,
    pub tf: u32,
}

/// Okapi BM25 tuning constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Params {
    pub k1: f64,
    pub b: f64,
    /// Negative IDFs are floored to `epsilon * average_idf`.
    pub epsilon: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75, epsilon: 0.25 }
    }
}

/// In-memory BM25 index over tokenized documents. Built once, read-only after.
#[derive(Debug, Default)]
pub struct Bm25Index {
    pub params: Bm25Params,
    pub dictionary: HashMap<String, TermId>,
    pub df: Vec<u32>,
    pub idf: Vec<f64>,
    pub postings: Vec<Vec<Posting>>, // indexed by TermId, sorted by doc_id
    pub doc_len: Vec<u32>,
    pub avgdl: f64,
    pub num_docs: u32,
}

impl Bm25Index {
    pub fn new() -> Self { Self::default() }

    /// Build over token sequences, one per document, in corpus order.
    pub fn build<'a, I>(docs: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        Self::build_with(docs, Bm25Params::default())
    }

    pub fn build_with<'a, I>(docs: I, params: Bm25Params) -> Result<Self>
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut dictionary: HashMap<String, TermId> = HashMap::new();
        let mut postings: Vec<Vec<Posting>> = Vec::new();
        let mut doc_len: Vec<u32> = Vec::new();

        for (doc_id, tokens) in docs.into_iter().enumerate() {
            doc_len.push(tokens.len() as u32);
            let mut tf_counts: HashMap<TermId, u32> = HashMap::new();
            for term in tokens {
                let tid = match dictionary.get(term) {
                    Some(&tid) => tid,
                    None => {
                        let tid = postings.len() as TermId;
                        dictionary.insert(term.clone(), tid);
                        postings.push(Vec::new());
                        tid
                    }
                };
                *tf_counts.entry(tid).or_insert(0) += 1;
            }
            for (tid, tf) in tf_counts {
                postings[tid as usize].push(Posting { doc_id: doc_id as DocId, tf });
            }
        }

        if doc_len.is_empty() {
            return Err(RetrievalError::EmptyCorpus);
        }
        let num_docs = doc_len.len() as u32;
        let avgdl = doc_len.iter().map(|&l| l as f64).sum::<f64>() / num_docs as f64;
        let df: Vec<u32> = postings.iter().map(|p| p.len() as u32).collect();
        let idf = compute_idf(&df, num_docs, params.epsilon);

        tracing::debug!(num_docs, num_terms = dictionary.len(), avgdl, "bm25 index built");
        Ok(Self { params, dictionary, df, idf, postings, doc_len, avgdl, num_docs })
    }

    pub fn is_built(&self) -> bool { self.num_docs > 0 }

    /// Score of every document, by position. Repeated query terms count once
    /// and terms outside the vocabulary contribute nothing.
    pub fn scores<T: AsRef<str>>(&self, query: &[T]) -> Result<Vec<f64>> {
        if !self.is_built() {
            return Err(RetrievalError::UninitializedIndex);
        }
        let Bm25Params { k1, b, .. } = self.params;
        let mut scores = vec![0.0f64; self.num_docs as usize];
        let mut seen: HashSet<TermId> = HashSet::new();
        for term in query {
            let Some(&tid) = self.dictionary.get(term.as_ref()) else { continue };
            if !seen.insert(tid) {
                continue;
            }
            let idf = self.idf[tid as usize];
            for p in &self.postings[tid as usize] {
                let tf = p.tf as f64;
                let dl = self.doc_len[p.doc_id as usize] as f64;
                let norm = tf + k1 * (1.0 - b + b * dl / self.avgdl);
                scores[p.doc_id as usize] += idf * tf * (k1 + 1.0) / norm;
            }
        }
        Ok(scores)
    }
}

fn compute_idf(df: &[u32], num_docs: u32, epsilon: f64) -> Vec<f64> {
    let n = num_docs as f64;
    let mut idf: Vec<f64> = df
        .iter()
        .map(|&d| {
            let d = d as f64;
            ((n - d + 0.5) / (d + 0.5)).ln()
        })
        .collect();
    if idf.is_empty() {
        return idf;
    }
    let average = idf.iter().sum::<f64>() / idf.len() as f64;
    let floor = epsilon * average;
    for w in idf.iter_mut() {
        if *w < 0.0 {
            *w = floor;
        }
    }
    idf
}
