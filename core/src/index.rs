use crate::expand::{expand_query, TermExpander};
use crate::ranker::{rank, RankedResult};
use crate::stats::{compute_idf, compute_tf, relative_frequencies, IdfPolicy, IdfTable};
use crate::tokenizer::{Tokenizer, TokenizerConfig};
use crate::vector::{build_vector, TermVector};
use crate::{Corpus, DocId, Document, Error, Result, Term};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub tokenizer: TokenizerConfig,
    pub idf: IdfPolicy,
}

/// A corpus frozen together with its IDF table and document vectors.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    corpus: Corpus,
    config: IndexConfig,
    tokenizer: Tokenizer,
    idf: IdfTable,
    vectors: Vec<TermVector>,
}

impl SearchIndex {
    /// Tokenize every document once, derive IDF and cache one vector per document.
    ///
    /// Documents without tokens keep their position and get a zero vector; they
    /// still count towards the corpus size used for IDF.
    pub fn build(corpus: Corpus, config: IndexConfig) -> Result<Self> {
        let tokenizer = Tokenizer::new(config.tokenizer);
        let tokenized: Vec<Vec<Term>> = corpus.iter().map(|doc| tokenizer.tokenize(&doc.text)).collect();
        let idf = compute_idf(&tokenized, config.idf)?;

        let mut vectors = Vec::with_capacity(tokenized.len());
        for (doc_id, (tokens, doc)) in tokenized.iter().zip(corpus.iter()).enumerate() {
            let vector = match compute_tf(tokens) {
                Ok(tf) => build_vector(&tf, &idf),
                Err(Error::EmptyDocument) => {
                    tracing::warn!(doc_id, title = %doc.meta.title, "document has no terms, indexing as zero vector");
                    TermVector::new()
                }
                Err(e) => return Err(e),
            };
            vectors.push(vector);
        }

        tracing::info!(num_docs = corpus.len(), num_terms = idf.len(), policy = ?idf.policy(), "built search index");
        Ok(Self { corpus, config, tokenizer, idf, vectors })
    }

    pub fn tokenize(&self, text: &str) -> Vec<Term> { self.tokenizer.tokenize(text) }

    /// Tokenize `query` and append related terms from `expander`.
    pub fn expand(&self, query: &str, expander: &dyn TermExpander) -> Vec<Term> {
        expand_query(&self.tokenize(query), expander, &self.tokenizer)
    }

    /// TF-IDF vector of an already tokenized query; empty for no tokens.
    pub fn vectorize(&self, tokens: &[Term]) -> TermVector {
        if tokens.is_empty() {
            return TermVector::new();
        }
        build_vector(&relative_frequencies(tokens), &self.idf)
    }

    pub fn query_vector(&self, query: &str) -> TermVector {
        self.vectorize(&self.tokenize(query))
    }

    pub fn query_vector_expanded(&self, query: &str, expander: &dyn TermExpander) -> TermVector {
        self.vectorize(&self.expand(query, expander))
    }

    pub fn search(&self, query: &str) -> RankedResult {
        let result = rank(&self.query_vector(query), &self.vectors);
        tracing::debug!(query, hits = result.relevant().count(), "ranked query");
        result
    }

    pub fn search_expanded(&self, query: &str, expander: &dyn TermExpander) -> RankedResult {
        let result = rank(&self.query_vector_expanded(query, expander), &self.vectors);
        tracing::debug!(query, hits = result.relevant().count(), "ranked expanded query");
        result
    }

    pub fn document(&self, id: DocId) -> Option<&Document> { self.corpus.get(id) }

    pub fn idf(&self) -> &IdfTable { &self.idf }

    pub fn vectors(&self) -> &[TermVector] { &self.vectors }

    pub fn config(&self) -> IndexConfig { self.config }

    pub fn len(&self) -> usize { self.corpus.len() }

    pub fn is_empty(&self) -> bool { self.corpus.is_empty() }
}
