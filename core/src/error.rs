/// Errors raised while building corpus statistics.
///
/// Both are structural: they come from bad input data during index setup and
/// never surface once an index has been built.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// IDF was requested over zero documents.
    #[error("empty corpus: at least one document is required to compute IDF")]
    EmptyCorpus,
    /// TF was requested over a document with no tokens.
    #[error("empty document: term frequency is undefined without tokens")]
    EmptyDocument,
}

pub type Result<T> = std::result::Result<T, Error>;
