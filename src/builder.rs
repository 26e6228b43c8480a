//! Builder for constructing article records in code
//!
//! Documents normally come from a producer and are decoded with
//! [`crate::parse`]; the builder is for tests, fixtures and tools that
//! synthesize records directly. Pairs left unset fall back to the
//! producer's untitled defaults.
//!
//! # Examples
//!
//! ```
//! use blogset::ArticleBuilder;
//!
//! let article = ArticleBuilder::new()
//!     .src("posts/first.xml")
//!     .base("posts/first")
//!     .stripbase("first")
//!     .striplangbase("first")
//!     .time(1692700000)
//!     .body("<p>Hello.</p>")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(article.title.text, "Untitled article");
//! assert_eq!(article.author.text, "Untitled author");
//! ```

use crate::article::{Article, Keys, Markup, Pair};
use crate::{BlogsetError, Result};

#[must_use]
#[derive(Debug, Clone)]
pub struct ArticleBuilder {
    src: Option<String>,
    base: Option<String>,
    stripbase: Option<String>,
    striplangbase: Option<String>,
    time: Option<i64>,
    title: Option<Pair>,
    aside: Option<Pair>,
    author: Option<Pair>,
    body: Option<String>,
    keys: Keys,
    tags: Vec<String>,
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleBuilder {
    /// Create a new ArticleBuilder with no fields set
    pub fn new() -> Self {
        Self {
            src: None,
            base: None,
            stripbase: None,
            striplangbase: None,
            time: None,
            title: None,
            aside: None,
            author: None,
            body: None,
            keys: Keys::new(),
            tags: Vec::new(),
        }
    }

    /// Set the source filename (required)
    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// Set the source filename without its suffix (required)
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Set the directory-stripped base name (required)
    pub fn stripbase(mut self, stripbase: impl Into<String>) -> Self {
        self.stripbase = Some(stripbase.into());
        self
    }

    /// Set the directory- and language-stripped base name (required)
    pub fn striplangbase(mut self, striplangbase: impl Into<String>) -> Self {
        self.striplangbase = Some(striplangbase.into());
        self
    }

    /// Set the publication time as a Unix epoch (required)
    pub fn time(mut self, time: i64) -> Self {
        self.time = Some(time);
        self
    }

    /// Set the title pair (default: "Untitled article")
    pub fn title(mut self, text: impl Into<String>, xml: impl Into<String>) -> Self {
        self.title = Some(Pair::new(text, xml));
        self
    }

    /// Set the aside pair (default: empty)
    pub fn aside(mut self, text: impl Into<String>, xml: impl Into<String>) -> Self {
        self.aside = Some(Pair::new(text, xml));
        self
    }

    /// Set the author pair (default: "Untitled author")
    pub fn author(mut self, text: impl Into<String>, xml: impl Into<String>) -> Self {
        self.author = Some(Pair::new(text, xml));
        self
    }

    /// Set the article body markup (required)
    pub fn body(mut self, xml: impl Into<String>) -> Self {
        self.body = Some(xml.into());
        self
    }

    /// Add a custom key/value pair
    pub fn key(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.keys.insert(name.into(), value.into());
        self
    }

    /// Set the tag list, replacing any tags added so far
    pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(|t| t.into()).collect();
        self
    }

    /// Add a single tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Build the article, validating required fields and pair consistency
    ///
    /// Returns an error if a required field (src, base, stripbase,
    /// striplangbase, time, article markup) is missing, or if a provided
    /// pair's text does not match its tag-stripped xml.
    pub fn build(self) -> Result<Article> {
        let src = self
            .src
            .ok_or_else(|| BlogsetError::SchemaViolation("src is required".to_string()))?;
        let base = self
            .base
            .ok_or_else(|| BlogsetError::SchemaViolation("base is required".to_string()))?;
        let stripbase = self
            .stripbase
            .ok_or_else(|| BlogsetError::SchemaViolation("stripbase is required".to_string()))?;
        let striplangbase = self.striplangbase.ok_or_else(|| {
            BlogsetError::SchemaViolation("striplangbase is required".to_string())
        })?;
        let time = self
            .time
            .ok_or_else(|| BlogsetError::SchemaViolation("time is required".to_string()))?;
        let body = self.body.ok_or_else(|| {
            BlogsetError::SchemaViolation("article markup is required".to_string())
        })?;

        let article = Article {
            src,
            base,
            stripbase,
            striplangbase,
            time,
            title: self
                .title
                .unwrap_or_else(|| Pair::plain("Untitled article")),
            aside: self.aside.unwrap_or_else(|| Pair::plain("")),
            author: self
                .author
                .unwrap_or_else(|| Pair::plain("Untitled author")),
            article: Markup::new(body),
            keys: self.keys,
            tags: self.tags,
        };

        article.validate()?;
        Ok(article)
    }
}
