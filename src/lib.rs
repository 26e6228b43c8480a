#![doc = include_str!("../README.md")]

/// Article records and their markup pairs
pub mod article;
mod builder;
/// JSON decode and encode for article-set documents
pub mod codec;
mod error;
/// Tag stripping for XHTML fragments
pub mod markup;
/// The top-level article-set document
pub mod set;

pub use article::{Article, Keys, Markup, Pair};
pub use builder::ArticleBuilder;
pub use codec::{from_reader, from_slice, parse};
pub use error::{BlogsetError, Result};
pub use markup::strip_tags;
pub use set::{ArticleSet, SortOrder};
