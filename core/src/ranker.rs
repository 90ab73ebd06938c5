//! Cosine-similarity ranking of one query vector against a document set.

use crate::vector::TermVector;
use crate::DocId;
use serde::Serialize;

/// Cosine similarity of `query` and `doc`, or 0 when either vector has zero norm.
///
/// The dot product runs over the query's terms; document-only terms have zero
/// query weight and cannot contribute.
pub fn cosine_similarity(query: &TermVector, doc: &TermVector) -> f64 {
    let query_sq = query.squared_norm();
    let doc_sq = doc.squared_norm();
    if query_sq == 0.0 || doc_sq == 0.0 {
        return 0.0;
    }
    query.dot(doc) / (query_sq * doc_sq).sqrt()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDoc {
    pub doc: DocId,
    pub score: f64,
}

impl ScoredDoc {
    pub fn relevance_percent(&self) -> f64 { self.score * 100.0 }
}

/// Every document with its similarity, best first. Ties keep corpus order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedResult {
    hits: Vec<ScoredDoc>,
}

impl RankedResult {
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredDoc> { self.hits.iter() }

    pub fn len(&self) -> usize { self.hits.len() }

    pub fn is_empty(&self) -> bool { self.hits.is_empty() }

    pub fn top(&self, k: usize) -> &[ScoredDoc] { &self.hits[..k.min(self.hits.len())] }

    /// Entries scoring above zero, in rank order.
    pub fn relevant(&self) -> impl Iterator<Item = &ScoredDoc> + '_ {
        self.hits.iter().filter(|hit| hit.score > 0.0)
    }

    /// Similarity of `doc`, if it is part of this result.
    pub fn score_of(&self, doc: DocId) -> Option<f64> {
        self.hits.iter().find(|hit| hit.doc == doc).map(|hit| hit.score)
    }

    pub fn into_vec(self) -> Vec<ScoredDoc> { self.hits }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a ScoredDoc;
    type IntoIter = std::slice::Iter<'a, ScoredDoc>;

    fn into_iter(self) -> Self::IntoIter { self.hits.iter() }
}

/// Score `query` against every document vector and sort descending.
pub fn rank(query: &TermVector, documents: &[TermVector]) -> RankedResult {
    let mut hits: Vec<ScoredDoc> = documents
        .iter()
        .enumerate()
        .map(|(doc, vector)| ScoredDoc { doc, score: cosine_similarity(query, vector) })
        .collect();
    // Stable sort: equal scores stay in document order.
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    RankedResult { hits }
}
