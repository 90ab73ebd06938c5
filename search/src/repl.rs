//! Presentation of ranked results and the interactive query loop.

use serde::Serialize;
use std::io::{self, BufRead, Write};
use tfidf_core::{RankedResult, SearchIndex};

pub const NO_RESULTS: &str =
    "Sorry, no relevant documents found for your query. Please try again with different terms.";

#[derive(Debug, Serialize)]
pub struct JsonHit<'a> {
    pub rank: usize,
    pub doc: usize,
    pub title: &'a str,
    pub score: f64,
    /// Score expressed as a percentage.
    pub relevance: f64,
}

/// Positive-score hits with their 1-based rank, capped at `limit`.
pub fn json_hits<'a>(index: &'a SearchIndex, result: &RankedResult, limit: Option<usize>) -> Vec<JsonHit<'a>> {
    result
        .relevant()
        .enumerate()
        .take(limit.unwrap_or(usize::MAX))
        .map(|(i, hit)| JsonHit {
            rank: i + 1,
            doc: hit.doc,
            title: index.document(hit.doc).map(|d| d.meta.title.as_str()).unwrap_or(""),
            score: hit.score,
            relevance: hit.relevance_percent(),
        })
        .collect()
}

/// Write one line per positive-score hit, or the no-results message.
/// Returns the number of hits written.
pub fn write_hits<W: Write>(
    index: &SearchIndex,
    result: &RankedResult,
    limit: Option<usize>,
    out: &mut W,
) -> io::Result<usize> {
    let hits = json_hits(index, result, limit);
    if hits.is_empty() {
        writeln!(out, "\n{NO_RESULTS}")?;
        return Ok(0);
    }
    for hit in &hits {
        writeln!(
            out,
            "{}. {} (Score: {:.4}) & (Relevance: {:.2}%)",
            hit.rank,
            hit.title,
            hit.score,
            hit.relevance
        )?;
    }
    Ok(hits.len())
}

/// Prompt for queries on `input` until `exit` or end of input.
pub fn run_repl<R: BufRead, W: Write>(
    index: &SearchIndex,
    mut input: R,
    mut out: W,
    limit: Option<usize>,
) -> io::Result<()> {
    writeln!(out, "Welcome to the TF-IDF Search Engine!")?;
    writeln!(out, "Enter your query to find the most relevant documents.")?;
    let mut line = String::new();
    loop {
        write!(out, "\nEnter query (or 'exit' to quit): ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let query = line.trim();
        if query.eq_ignore_ascii_case("exit") {
            writeln!(out, "Exiting the search engine. Goodbye!")?;
            break;
        }
        let result = index.search(query);
        write_hits(index, &result, limit, &mut out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfidf_core::{Corpus, Document, IndexConfig};

    fn index() -> SearchIndex {
        let corpus: Corpus = [
            Document::new("rust", "rust ownership and borrowing"),
            Document::new("python", "python scripting"),
            Document::new("both", "rust and python bindings"),
        ]
        .into_iter()
        .collect();
        SearchIndex::build(corpus, IndexConfig::default()).unwrap()
    }

    #[test]
    fn hit_lines_use_rank_title_score_and_percent() {
        let index = index();
        let mut out = Vec::new();
        let written = write_hits(&index, &index.search("ownership"), None, &mut out).unwrap();
        assert_eq!(written, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("1. rust (Score: "), "{text}");
        assert!(text.trim_end().ends_with("%)"), "{text}");
    }

    #[test]
    fn printed_percent_matches_json_relevance() {
        let index = index();
        let hits = json_hits(&index, &index.search("ownership"), None);
        assert!((hits[0].relevance - hits[0].score * 100.0).abs() < 1e-9);
        let mut out = Vec::new();
        write_hits(&index, &index.search("ownership"), None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&format!("(Relevance: {:.2}%)", hits[0].relevance)), "{text}");
    }

    #[test]
    fn limit_caps_output() {
        let index = index();
        let hits = json_hits(&index, &index.search("rust python"), Some(1));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].rank, 1);
    }

    #[test]
    fn no_hits_prints_apology() {
        let index = index();
        let mut out = Vec::new();
        assert_eq!(write_hits(&index, &index.search("haskell"), None, &mut out).unwrap(), 0);
        assert!(String::from_utf8(out).unwrap().contains(NO_RESULTS));
    }
}
