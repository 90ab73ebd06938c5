//! TF-IDF ranking core: tokenization, corpus statistics, sparse term vectors
//! and cosine-similarity ranking over an in-memory corpus.
//!
//! The corpus and its IDF table are built once by [`SearchIndex::build`] and are
//! read-only afterwards; every query is tokenized, vectorized against the same
//! IDF table and ranked against the cached document vectors.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod error;
pub mod expand;
pub mod index;
pub mod ranker;
pub mod stats;
pub mod tokenizer;
pub mod vector;

pub use error::{Error, Result};
pub use expand::{expand_query, NoExpansion, SynonymTable, TermExpander};
pub use index::{IndexConfig, SearchIndex};
pub use ranker::{cosine_similarity, rank, RankedResult, ScoredDoc};
pub use stats::{compute_idf, compute_tf, IdfPolicy, IdfTable, TermFrequencies};
pub use tokenizer::{tokenize, Tokenizer, TokenizerConfig};
pub use vector::{build_vector, TermVector};

/// A normalized token: lowercase, punctuation stripped.
pub type Term = String;
/// Position of a document in its corpus. Stable for the lifetime of an index.
pub type DocId = usize;

/// Caller-owned metadata attached to a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocMeta {
    pub external_id: String,
    pub title: String,
    pub url: Option<String>,
    /// Source file the text was read from, if any.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub text: String,
    pub meta: DocMeta,
}

impl Document {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            text: text.into(),
            meta: DocMeta { external_id: title.clone(), title, url: None, path: None },
        }
    }

    pub fn with_meta(text: impl Into<String>, meta: DocMeta) -> Self {
        Self { text: text.into(), meta }
    }
}

/// Ordered collection of documents; a document's position is its [`DocId`].
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<Document>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    /// Build a corpus from bare texts, titled `Document 1..=N`.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Document::new(format!("Document {}", i + 1), text))
            .collect()
    }

    /// Append a document and return the id it was assigned.
    pub fn push(&mut self, doc: Document) -> DocId {
        self.docs.push(doc);
        self.docs.len() - 1
    }

    pub fn get(&self, id: DocId) -> Option<&Document> { self.docs.get(id) }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> { self.docs.iter() }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self { docs: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter { self.docs.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_sequential_ids() {
        let mut corpus = Corpus::new();
        assert_eq!(corpus.push(Document::new("a", "alpha")), 0);
        assert_eq!(corpus.push(Document::new("b", "beta")), 1);
        assert_eq!(corpus.get(1).map(|d| d.meta.title.as_str()), Some("b"));
        assert!(corpus.get(2).is_none());
    }

    #[test]
    fn from_texts_numbers_titles_from_one() {
        let corpus = Corpus::from_texts(["x", "y"]);
        let titles: Vec<&str> = corpus.iter().map(|d| d.meta.title.as_str()).collect();
        assert_eq!(titles, vec!["Document 1", "Document 2"]);
    }
}
