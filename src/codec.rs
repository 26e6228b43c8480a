//! JSON decode and encode for article-set documents
//!
//! Decoding is strict about shape: wrong member types, missing required
//! members and other schema departures come back as
//! [`BlogsetError::SchemaViolation`], while input that is not JSON at all
//! comes back as [`BlogsetError::MalformedJson`]. Unknown object members
//! are ignored so documents from newer producers still decode.
//!
//! Decoding does not check content invariants such as pair consistency.
//! Call [`ArticleSet::validate`] after decoding when those guarantees
//! matter.

use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::set::ArticleSet;
use crate::{BlogsetError, Result};

/// Split a serde_json decode failure into schema and syntax errors
fn decode_error(e: serde_json::Error) -> BlogsetError {
    use serde_json::error::Category;

    match e.classify() {
        Category::Data => BlogsetError::SchemaViolation(e.to_string()),
        Category::Syntax | Category::Eof => BlogsetError::MalformedJson(e.to_string()),
        Category::Io => BlogsetError::Io(e.into()),
    }
}

/// Split a serde_json encode failure into serialization and I/O errors
fn encode_error(e: serde_json::Error) -> BlogsetError {
    use serde_json::error::Category;

    match e.classify() {
        Category::Io => BlogsetError::Io(e.into()),
        _ => BlogsetError::Serialize(e),
    }
}

/// Decode an article-set document from a JSON string
///
/// # Errors
///
/// Returns [`BlogsetError::SchemaViolation`] when the JSON parses but does
/// not match the document schema, or [`BlogsetError::MalformedJson`] when
/// the input is not valid JSON.
///
/// # Examples
///
/// ```
/// let json = r#"{"version": "0.1.0", "articles": []}"#;
///
/// let set: blogset::ArticleSet = blogset::parse(json).unwrap();
/// assert_eq!(set.version, "0.1.0");
/// assert!(set.is_empty());
/// ```
pub fn parse<K: DeserializeOwned>(json: &str) -> Result<ArticleSet<K>> {
    let set: ArticleSet<K> = serde_json::from_str(json).map_err(decode_error)?;
    debug!(
        "Decoded article set: {} articles (version {})",
        set.len(),
        set.version
    );
    Ok(set)
}

/// Decode an article-set document from raw JSON bytes
///
/// # Errors
///
/// Same classification as [`parse`].
pub fn from_slice<K: DeserializeOwned>(bytes: &[u8]) -> Result<ArticleSet<K>> {
    let set: ArticleSet<K> = serde_json::from_slice(bytes).map_err(decode_error)?;
    debug!(
        "Decoded article set: {} articles (version {})",
        set.len(),
        set.version
    );
    Ok(set)
}

/// Decode an article-set document from a reader
///
/// Reads the stream to completion. Useful for files and pipes; for data
/// already in memory prefer [`parse`] or [`from_slice`].
///
/// # Errors
///
/// Same classification as [`parse`], plus [`BlogsetError::Io`] when the
/// reader itself fails.
pub fn from_reader<K: DeserializeOwned, R: Read>(reader: R) -> Result<ArticleSet<K>> {
    let set: ArticleSet<K> = serde_json::from_reader(reader).map_err(decode_error)?;
    debug!(
        "Decoded article set: {} articles (version {})",
        set.len(),
        set.version
    );
    Ok(set)
}

impl<K: Serialize> ArticleSet<K> {
    /// Encode the set as compact JSON
    ///
    /// Articles, tags and pair members are written in their stored order,
    /// so a decode of the output yields an equal set.
    ///
    /// # Errors
    ///
    /// Returns [`BlogsetError::Serialize`] if a `keys` value fails to
    /// serialize.
    ///
    /// # Examples
    ///
    /// ```
    /// use blogset::ArticleSet;
    ///
    /// let set: ArticleSet = ArticleSet::new("0.1.0");
    /// let json = set.to_json().unwrap();
    ///
    /// assert_eq!(json, r#"{"version":"0.1.0","articles":[]}"#);
    /// ```
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self).map_err(encode_error)?;
        debug!(
            "Encoded article set: {} articles (version {})",
            self.len(),
            self.version
        );
        Ok(json)
    }

    /// Encode the set as indented, human-readable JSON
    ///
    /// # Errors
    ///
    /// Same as [`ArticleSet::to_json`].
    pub fn to_json_pretty(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self).map_err(encode_error)?;
        debug!(
            "Encoded article set: {} articles (version {})",
            self.len(),
            self.version
        );
        Ok(json)
    }

    /// Encode the set as compact JSON into a writer
    ///
    /// # Errors
    ///
    /// Same as [`ArticleSet::to_json`], plus [`BlogsetError::Io`] when the
    /// underlying stream fails.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, self).map_err(encode_error)?;
        debug!(
            "Encoded article set: {} articles (version {})",
            self.len(),
            self.version
        );
        Ok(())
    }
}
