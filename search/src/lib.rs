//! Command-line collaborators around `tfidf_core`: directory loading,
//! configuration, the interactive query loop and the voice-assistant demo.

pub mod assistant;
pub mod config;
pub mod loader;
pub mod repl;

use anyhow::{Context, Result};
use tfidf_core::SearchIndex;

/// Load the configured directory and freeze it into a search index.
pub fn open_index(settings: &config::Settings) -> Result<SearchIndex> {
    let corpus = loader::load_directory(&settings.dir, settings.recursive)?;
    SearchIndex::build(corpus, settings.index)
        .with_context(|| format!("failed to index {}", settings.dir.display()))
}
