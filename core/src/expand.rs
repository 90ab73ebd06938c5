//! Query expansion applied to tokens before they reach the statistics stage.

use crate::tokenizer::Tokenizer;
use crate::Term;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Source of related terms for a query token.
pub trait TermExpander {
    /// Terms or phrases related to `term`, excluding `term` itself.
    fn expand(&self, term: &str) -> BTreeSet<String>;
}

/// Expander that adds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExpansion;

impl TermExpander for NoExpansion {
    fn expand(&self, _term: &str) -> BTreeSet<String> { BTreeSet::new() }
}

/// Fixed lookup table of related terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable {
    entries: HashMap<Term, Vec<String>>,
}

impl SynonymTable {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, term: &str, related: &[&str]) -> Self {
        self.insert(term, related);
        self
    }

    pub fn insert(&mut self, term: &str, related: &[&str]) {
        self.entries
            .entry(term.to_string())
            .or_default()
            .extend(related.iter().map(|r| r.to_string()));
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Health and fitness vocabulary used by the voice-assistant demo.
    pub fn assistant() -> Self {
        Self::new()
            .with("benefits", &["advantages", "positive effects", "gains"])
            .with("exercise", &["workouts", "physical activity", "training", "fitness"])
            .with("health", &["wellness", "well-being", "fitness", "vitality"])
            .with("workout", &["exercise", "training", "physical activity"])
            .with("wellness", &["health", "well-being", "fitness"])
    }
}

impl TermExpander for SynonymTable {
    fn expand(&self, term: &str) -> BTreeSet<String> {
        self.entries
            .get(term)
            .map(|related| related.iter().filter(|r| r.as_str() != term).cloned().collect())
            .unwrap_or_default()
    }
}

/// Append each token's expansions after it. Multi-word expansions go through
/// `tokenizer`, and the result keeps only the first occurrence of every term.
pub fn expand_query(tokens: &[Term], expander: &dyn TermExpander, tokenizer: &Tokenizer) -> Vec<Term> {
    let mut seen: HashSet<Term> = HashSet::new();
    let mut expanded = Vec::with_capacity(tokens.len());
    for token in tokens {
        let related = expander.expand(token);
        let candidates = std::iter::once(token.clone())
            .chain(related.iter().flat_map(|phrase| tokenizer.tokenize(phrase)));
        for term in candidates {
            if seen.insert(term.clone()) {
                expanded.push(term);
            }
        }
    }
    expanded
}
