//! Article-set error types

use thiserror::Error;

/// Decode, validation, and encode errors for article-set documents
#[derive(Error, Debug)]
pub enum BlogsetError {
    /// Document deviates from the required shape: a missing field, a field
    /// of the wrong primitive kind, or a non-array sequence
    #[error("schema violation: {0}")]
    SchemaViolation(String),

    /// Input is not syntactically valid JSON
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// A paired field's xml fragment could not be parsed as markup
    #[error("malformed markup: {0}")]
    MalformedMarkup(String),

    /// A paired field's text does not equal its tag-stripped xml
    #[error("inconsistent {field} pair: text does not match tag-stripped xml")]
    PairMismatch {
        /// Name of the offending paired field
        field: &'static str,
    },

    /// Serialization failed (possible with caller-supplied key types)
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error while reading or writing a document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using BlogsetError
pub type Result<T> = std::result::Result<T, BlogsetError>;
