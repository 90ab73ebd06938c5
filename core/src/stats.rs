//! Per-document term frequency and corpus-wide inverse document frequency.

use crate::{Error, Result, Term};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Relative frequency of each distinct term in one token sequence.
pub type TermFrequencies = HashMap<Term, f64>;

/// Frequency of each distinct term divided by the total token count.
pub fn compute_tf(tokens: &[Term]) -> Result<TermFrequencies> {
    if tokens.is_empty() {
        return Err(Error::EmptyDocument);
    }
    Ok(relative_frequencies(tokens))
}

/// TF of a token sequence the caller has already checked is non-empty.
pub(crate) fn relative_frequencies(tokens: &[Term]) -> TermFrequencies {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    let total = tokens.len() as f64;
    counts
        .into_iter()
        .map(|(term, count)| (term.to_string(), count as f64 / total))
        .collect()
}

/// How document frequency is turned into an IDF weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdfPolicy {
    /// `ln(N / df)`. Terms present in every document weigh 0.
    #[default]
    Standard,
    /// `ln(N / (df + 1)) + 1`. Strictly positive for every corpus term.
    Smoothed,
}

impl IdfPolicy {
    pub fn weight(self, num_docs: usize, doc_frequency: usize) -> f64 {
        let n = num_docs as f64;
        let df = doc_frequency as f64;
        match self {
            IdfPolicy::Standard => (n / df).ln(),
            IdfPolicy::Smoothed => (n / (df + 1.0)).ln() + 1.0,
        }
    }
}

/// IDF weight for every term seen in the corpus at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct IdfTable {
    weights: HashMap<Term, f64>,
    num_docs: usize,
    policy: IdfPolicy,
}

impl IdfTable {
    /// IDF of `term`; 0 for terms never seen in the corpus.
    pub fn get(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, term: &str) -> bool { self.weights.contains_key(term) }

    /// Number of distinct corpus terms.
    pub fn len(&self) -> usize { self.weights.len() }

    pub fn is_empty(&self) -> bool { self.weights.is_empty() }

    pub fn num_docs(&self) -> usize { self.num_docs }

    pub fn policy(&self) -> IdfPolicy { self.policy }
}

/// Compute IDF over a tokenized corpus. Document frequency counts each
/// document at most once per term.
pub fn compute_idf(corpus_tokens: &[Vec<Term>], policy: IdfPolicy) -> Result<IdfTable> {
    if corpus_tokens.is_empty() {
        return Err(Error::EmptyCorpus);
    }
    let mut df: HashMap<&str, usize> = HashMap::new();
    for doc in corpus_tokens {
        let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }
    let num_docs = corpus_tokens.len();
    let weights = df
        .into_iter()
        .map(|(term, doc_frequency)| (term.to_string(), policy.weight(num_docs, doc_frequency)))
        .collect();
    Ok(IdfTable { weights, num_docs, policy })
}
