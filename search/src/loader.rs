use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tfidf_core::{Corpus, DocMeta, Document};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct InputDoc {
    id: String,
    title: String,
    body: String,
    #[serde(default)]
    url: Option<String>,
}

/// Load every `.txt`, `.json` and `.jsonl` file under `dir`, in file-name order.
///
/// Plain text files become one document titled by their file stem. JSON files
/// hold one `{id, title, body, url?}` object or an array of them; JSONL files
/// hold one object per line.
pub fn load_directory(dir: &Path, recursive: bool) -> Result<Corpus> {
    if !dir.is_dir() {
        bail!("corpus directory {} does not exist", dir.display());
    }
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut corpus = Corpus::new();
    for entry in WalkDir::new(dir).max_depth(max_depth).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        match path.extension().and_then(|s| s.to_str()) {
            Some("txt") => load_text(dir, path, &mut corpus)?,
            Some(ext @ ("json" | "jsonl")) => {
                for doc in parse_docs(path, ext == "jsonl")? {
                    ingest_doc(doc, path, &mut corpus);
                }
            }
            _ => tracing::debug!(path = %path.display(), "skipping unsupported file"),
        }
    }
    if corpus.is_empty() {
        bail!("no documents found in {}", dir.display());
    }
    tracing::info!(num_docs = corpus.len(), dir = %dir.display(), "loaded corpus");
    Ok(corpus)
}

fn load_text(root: &Path, path: &Path, corpus: &mut Corpus) -> Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let title = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let external_id = path.strip_prefix(root).unwrap_or(path).to_string_lossy().into_owned();
    let meta = DocMeta { external_id, title, url: None, path: Some(path.to_path_buf()) };
    corpus.push(Document::with_meta(text, meta));
    Ok(())
}

/// Parse `{id, title, body, url?}` documents from a JSON (`jsonl == false`)
/// or JSON-lines file.
fn parse_docs(path: &Path, jsonl: bool) -> Result<Vec<InputDoc>> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    if jsonl {
        return raw
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(lineno, line)| {
                serde_json::from_str::<InputDoc>(line)
                    .with_context(|| format!("{}:{}: invalid document", path.display(), lineno + 1))
            })
            .collect();
    }
    let values = match serde_json::from_str::<serde_json::Value>(&raw).with_context(|| format!("{}: invalid JSON", path.display()))? {
        serde_json::Value::Array(arr) => arr,
        obj @ serde_json::Value::Object(_) => vec![obj],
        _ => {
            tracing::warn!(path = %path.display(), "JSON file is neither an object nor an array, skipping");
            Vec::new()
        }
    };
    values
        .into_iter()
        .map(|v| serde_json::from_value::<InputDoc>(v).with_context(|| format!("{}: invalid document", path.display())))
        .collect()
}

fn ingest_doc(doc: InputDoc, path: &Path, corpus: &mut Corpus) {
    let meta = DocMeta { external_id: doc.id, title: doc.title, url: doc.url, path: Some(path.to_path_buf()) };
    corpus.push(Document::with_meta(doc.body, meta));
}
