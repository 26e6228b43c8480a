//! Article records and their content fields
//!
//! An article record is one published item in an article-set document. Its
//! path fields (`src`, `base`, `stripbase`, `striplangbase`) are opaque
//! strings supplied by the producing tool; the stripping rules that relate
//! them are owned by the producer and never applied here. Content fields
//! come paired ([`Pair`]: markup-stripped text plus the markup itself) or
//! markup-only ([`Markup`], the article body).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::markup::strip_tags;
use crate::{BlogsetError, Result};

/// Default type for an article's `keys` map
///
/// Documents guarantee string-to-string typing; consumers wanting a
/// stricter shape substitute their own type for the `K` parameter of
/// [`Article`] and [`ArticleSet`](crate::ArticleSet).
pub type Keys = HashMap<String, String>;

/// Content carried in both markup-stripped and markup-retaining form
///
/// Titles, asides, and authors are exposed twice: `text` holds the content
/// with every tag removed, `xml` holds the same content with its markup.
/// A conformant document keeps the two in sync; [`Pair::is_consistent`]
/// verifies it.
///
/// # Examples
///
/// ```
/// use blogset::Pair;
///
/// let title = Pair::new("Hello", "<b>Hello</b>");
/// assert!(title.is_consistent().unwrap());
///
/// let broken = Pair::new("Hello", "<b>Goodbye</b>");
/// assert!(!broken.is_consistent().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    /// Content with all markup tags stripped
    pub text: String,
    /// The same content retaining its markup tags
    pub xml: String,
}

impl Pair {
    /// Pair a stripped text rendition with its markup form
    pub fn new(text: impl Into<String>, xml: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            xml: xml.into(),
        }
    }

    /// Tag-free pair: text and markup are the same plain string
    pub fn plain(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            text: content.clone(),
            xml: content,
        }
    }

    /// Check that `text` equals `xml` with its tags stripped
    ///
    /// # Errors
    ///
    /// Returns [`BlogsetError::MalformedMarkup`] when `xml` cannot be
    /// parsed as markup.
    pub fn is_consistent(&self) -> Result<bool> {
        Ok(strip_tags(&self.xml)? == self.text)
    }
}

/// Markup-only content
///
/// The article body has no stripped-text rendition in the document, so it
/// is a single `xml` property rather than a [`Pair`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Markup {
    /// Content with its markup tags
    pub xml: String,
}

impl Markup {
    /// Wrap a markup fragment
    pub fn new(xml: impl Into<String>) -> Self {
        Self { xml: xml.into() }
    }
}

/// One published item in an article-set document
///
/// Every field is required on the wire; field names match the JSON
/// property names exactly. The `K` parameter types the `keys` map and
/// defaults to [`Keys`] (string-to-string).
///
/// # Examples
///
/// ```
/// use blogset::ArticleBuilder;
///
/// let article = ArticleBuilder::new()
///     .src("posts/hello.xml")
///     .base("posts/hello")
///     .stripbase("hello")
///     .striplangbase("hello")
///     .time(1692700000)
///     .title("Hello", "<b>Hello</b>")
///     .body("<p>First post.</p>")
///     .tag("news")
///     .build()
///     .unwrap();
///
/// assert_eq!(article.title.text, "Hello");
/// assert!(article.has_tag("news"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article<K = Keys> {
    /// Source filename
    pub src: String,
    /// `src` without its file-extension suffix
    pub base: String,
    /// `base` with the producer's path-prefix strip applied
    pub stripbase: String,
    /// `stripbase` without a trailing language suffix
    pub striplangbase: String,
    /// Date of publication, in seconds since the Unix epoch
    pub time: i64,
    /// Title content
    pub title: Pair,
    /// Aside content
    pub aside: Pair,
    /// Author content
    pub author: Pair,
    /// Full article content
    pub article: Markup,
    /// Variables set in the article
    pub keys: K,
    /// Tags set in the article, in document order (duplicates permitted)
    pub tags: Vec<String>,
}

impl<K> Article<K> {
    /// Publication time as a UTC datetime
    ///
    /// Returns `None` when `time` falls outside the representable range.
    pub fn published(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }

    /// Whether the article carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Verify the content invariants of this record
    ///
    /// Each paired field's `text` must equal its `xml` with the tags
    /// stripped.
    ///
    /// # Errors
    ///
    /// Returns [`BlogsetError::PairMismatch`] naming the first offending
    /// field, or [`BlogsetError::MalformedMarkup`] when a fragment cannot
    /// be parsed.
    pub fn validate(&self) -> Result<()> {
        let pairs = [
            ("title", &self.title),
            ("aside", &self.aside),
            ("author", &self.author),
        ];

        for (field, pair) in pairs {
            if !pair.is_consistent()? {
                return Err(BlogsetError::PairMismatch { field });
            }
        }

        Ok(())
    }
}
