use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tfidf_core::{IdfPolicy, IndexConfig};

pub const DEFAULT_CORPUS_DIR: &str = "./documents";

/// Corpus and ranking options shared by the `repl` and `query` commands.
#[derive(Args, Debug, Clone, Default)]
pub struct CorpusArgs {
    /// Directory of .txt / .json / .jsonl documents [default: ./documents]
    #[arg(long)]
    pub dir: Option<PathBuf>,
    /// Descend into subdirectories
    #[arg(long, default_value_t = false)]
    pub recursive: bool,
    /// Use smoothed IDF = ln(N/(df+1)) + 1 instead of ln(N/df)
    #[arg(long, default_value_t = false)]
    pub smoothed_idf: bool,
    /// Drop common English stopwords
    #[arg(long, default_value_t = false)]
    pub stopwords: bool,
    /// Stem terms with the English Snowball stemmer
    #[arg(long, default_value_t = false)]
    pub stem: bool,
    /// Apply NFKC normalization before tokenizing
    #[arg(long, default_value_t = false)]
    pub nfkc: bool,
    /// Print at most this many hits per query
    #[arg(long)]
    pub limit: Option<usize>,
    /// JSON file with defaults for any of the options above
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// On-disk defaults, e.g. `{"dir": "docs", "index": {"idf": "smoothed"}}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub dir: Option<PathBuf>,
    pub recursive: bool,
    pub limit: Option<usize>,
    pub index: IndexConfig,
}

pub fn load_config(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub dir: PathBuf,
    pub recursive: bool,
    pub limit: Option<usize>,
    pub index: IndexConfig,
}

impl CorpusArgs {
    /// Merge command-line flags over the optional config file.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => load_config(path)?,
            None => FileConfig::default(),
        };
        Ok(self.merge(file))
    }

    pub fn merge(&self, file: FileConfig) -> Settings {
        let mut index = file.index;
        index.tokenizer.remove_stopwords |= self.stopwords;
        index.tokenizer.stem |= self.stem;
        index.tokenizer.normalize_unicode |= self.nfkc;
        if self.smoothed_idf {
            index.idf = IdfPolicy::Smoothed;
        }
        Settings {
            dir: self.dir.clone().or(file.dir).unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS_DIR)),
            recursive: self.recursive || file.recursive,
            limit: self.limit.or(file.limit),
            index,
        }
    }
}
