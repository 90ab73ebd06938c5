//! Voice-assistant demo: synonym-expanded search over a small fixed corpus.

use anyhow::Result;
use std::io::Write;
use tfidf_core::{Corpus, IdfPolicy, IndexConfig, RankedResult, SearchIndex, TermExpander};

pub const ARTICLES: [&str; 5] = [
    "Regular exercise provides numerous benefits for physical and mental health",
    "Workouts can improve cardiovascular wellness and overall fitness",
    "Physical activity is crucial for maintaining good health and preventing diseases",
    "Benefits of consistent training include increased energy and reduced stress",
    "Wellness programs emphasize the importance of regular exercise and healthy lifestyle",
];

pub const SAMPLE_QUERIES: [&str; 3] = [
    "Find me articles about the benefits of exercise for health",
    "Tell me about workouts and wellness",
    "Physical activity and its advantages",
];

/// Number of articles reported per query.
pub const TOP_ARTICLES: usize = 2;

pub fn assistant_index() -> Result<SearchIndex> {
    let config = IndexConfig { idf: IdfPolicy::Smoothed, ..Default::default() };
    Ok(SearchIndex::build(Corpus::from_texts(ARTICLES), config)?)
}

/// Print each pipeline stage for `query` and return the full ranking.
pub fn run_pipeline<W: Write>(
    index: &SearchIndex,
    expander: &dyn TermExpander,
    query: &str,
    out: &mut W,
) -> Result<RankedResult> {
    writeln!(out, "Voice Query: {query}")?;
    writeln!(out, "Preprocessed Tokens: {:?}", index.tokenize(query))?;
    writeln!(out, "Expanded Query: {:?}", index.expand(query, expander))?;

    let result = index.search_expanded(query, expander);
    writeln!(out, "\nRetrieved Articles:")?;
    for hit in result.top(TOP_ARTICLES) {
        let text = index.document(hit.doc).map(|d| d.text.as_str()).unwrap_or("");
        writeln!(out, "- {text} (Relevance: {:.2})", hit.score)?;
    }
    Ok(result)
}
