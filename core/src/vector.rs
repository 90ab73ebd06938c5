use crate::stats::{IdfTable, TermFrequencies};
use crate::Term;
use serde::Serialize;
use std::collections::HashMap;

/// Sparse TF-IDF vector. Zero weights are never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TermVector {
    weights: HashMap<Term, f64>,
}

impl TermVector {
    pub fn new() -> Self { Self::default() }

    /// Set the weight of `term`. A zero weight removes the entry.
    pub fn insert(&mut self, term: impl Into<Term>, weight: f64) {
        let term = term.into();
        if weight == 0.0 {
            self.weights.remove(&term);
        } else {
            self.weights.insert(term, weight);
        }
    }

    /// Weight of `term`; 0 when absent.
    pub fn get(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Number of non-zero entries.
    pub fn len(&self) -> usize { self.weights.len() }

    pub fn is_empty(&self) -> bool { self.weights.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(t, w)| (t.as_str(), *w))
    }

    pub fn squared_norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum()
    }

    /// Euclidean norm over the non-zero entries.
    pub fn norm(&self) -> f64 { self.squared_norm().sqrt() }

    /// Dot product summed over this vector's own terms only.
    pub fn dot(&self, other: &TermVector) -> f64 {
        self.weights.iter().map(|(term, w)| w * other.get(term)).sum()
    }
}

impl FromIterator<(Term, f64)> for TermVector {
    fn from_iter<I: IntoIterator<Item = (Term, f64)>>(iter: I) -> Self {
        let mut vector = TermVector::new();
        for (term, weight) in iter {
            vector.insert(term, weight);
        }
        vector
    }
}

/// Weight each term by `tf * idf`; terms unknown to the IDF table drop out.
pub fn build_vector(tf: &TermFrequencies, idf: &IdfTable) -> TermVector {
    tf.iter()
        .map(|(term, freq)| (term.clone(), freq * idf.get(term)))
        .collect()
}
