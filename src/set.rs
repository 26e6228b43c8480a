//! The top-level article-set document
//!
//! An [`ArticleSet`] is the envelope an aggregation tool emits: the version
//! of the producing tool plus every article record, in the order the
//! producer arranged them. That order is significant and survives a
//! decode/encode round-trip; [`ArticleSet::sort`] exists for consumers who
//! want one of the conventional presentation orders instead.

use serde::{Deserialize, Serialize};

use crate::article::{Article, Keys};
use crate::{BlogsetError, Result};

/// An article-set document: a format version plus ordered article records
///
/// The `K` parameter types every article's `keys` map and defaults to
/// [`Keys`] (string-to-string).
///
/// # Examples
///
/// ```
/// use blogset::{ArticleBuilder, ArticleSet};
///
/// let mut set = ArticleSet::new("0.1.0");
/// set.articles.push(
///     ArticleBuilder::new()
///         .src("a.xml")
///         .base("a")
///         .stripbase("a")
///         .striplangbase("a")
///         .time(1000)
///         .body("<p>Body</p>")
///         .build()
///         .unwrap(),
/// );
///
/// assert_eq!(set.len(), 1);
/// assert!(set.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSet<K = Keys> {
    /// Version of the tool that produced the document
    pub version: String,
    /// Article records, in document order
    pub articles: Vec<Article<K>>,
}

/// Presentation orders for an article set
///
/// The names accepted by [`SortOrder::lookup`] are the conventional ones
/// used by aggregation tools ("date", "rdate", "filename", ...). Date
/// orders compare the publication epoch; title orders compare the stripped
/// `title.text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest publication first ("date")
    Date,
    /// Oldest publication first ("rdate")
    ReverseDate,
    /// Ascending by source filename ("filename")
    Filename,
    /// Descending by source filename ("rfilename")
    ReverseFilename,
    /// Ascending by title text ("title")
    Title,
    /// Descending by title text ("rtitle")
    ReverseTitle,
    /// Ascending by title text, ASCII case-insensitive ("ititle")
    CaselessTitle,
    /// Descending by title text, ASCII case-insensitive ("rititle")
    ReverseCaselessTitle,
}

impl SortOrder {
    /// Resolve a conventional order name, case-insensitively
    ///
    /// Returns `None` for names with no corresponding order.
    ///
    /// # Examples
    ///
    /// ```
    /// use blogset::SortOrder;
    ///
    /// assert_eq!(SortOrder::lookup("date"), Some(SortOrder::Date));
    /// assert_eq!(SortOrder::lookup("RDATE"), Some(SortOrder::ReverseDate));
    /// assert_eq!(SortOrder::lookup("shuffled"), None);
    /// ```
    pub fn lookup(name: &str) -> Option<SortOrder> {
        match name.to_ascii_lowercase().as_str() {
            "date" => Some(SortOrder::Date),
            "rdate" => Some(SortOrder::ReverseDate),
            "filename" => Some(SortOrder::Filename),
            "rfilename" => Some(SortOrder::ReverseFilename),
            "title" => Some(SortOrder::Title),
            "rtitle" => Some(SortOrder::ReverseTitle),
            "ititle" => Some(SortOrder::CaselessTitle),
            "rititle" => Some(SortOrder::ReverseCaselessTitle),
            _ => None,
        }
    }
}

impl<K> ArticleSet<K> {
    /// Create an empty article set with the given version tag
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            articles: Vec::new(),
        }
    }

    /// Number of article records
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the set holds no articles
    ///
    /// An empty set is a valid document, not an error.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Verify the content invariants of every article
    ///
    /// # Errors
    ///
    /// Returns [`BlogsetError::SchemaViolation`] wrapping the first failing
    /// article's error with its index and source filename.
    pub fn validate(&self) -> Result<()> {
        for (i, article) in self.articles.iter().enumerate() {
            article.validate().map_err(|e| {
                BlogsetError::SchemaViolation(format!("article {} ({}): {}", i, article.src, e))
            })?;
        }

        Ok(())
    }

    /// All tags across the set, sorted and de-duplicated
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self
            .articles
            .iter()
            .flat_map(|a| a.tags.iter().map(String::as_str))
            .collect();
        tags.sort_unstable();
        tags.dedup();
        tags
    }

    /// Reorder the articles in place
    ///
    /// Sorting is stable: articles comparing equal keep their document
    /// order.
    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::Date => self.articles.sort_by(|a, b| b.time.cmp(&a.time)),
            SortOrder::ReverseDate => self.articles.sort_by(|a, b| a.time.cmp(&b.time)),
            SortOrder::Filename => self.articles.sort_by(|a, b| a.src.cmp(&b.src)),
            SortOrder::ReverseFilename => self.articles.sort_by(|a, b| b.src.cmp(&a.src)),
            SortOrder::Title => self
                .articles
                .sort_by(|a, b| a.title.text.cmp(&b.title.text)),
            SortOrder::ReverseTitle => self
                .articles
                .sort_by(|a, b| b.title.text.cmp(&a.title.text)),
            SortOrder::CaselessTitle => self.articles.sort_by(|a, b| {
                a.title
                    .text
                    .to_ascii_lowercase()
                    .cmp(&b.title.text.to_ascii_lowercase())
            }),
            SortOrder::ReverseCaselessTitle => self.articles.sort_by(|a, b| {
                b.title
                    .text
                    .to_ascii_lowercase()
                    .cmp(&a.title.text.to_ascii_lowercase())
            }),
        }
    }
}
