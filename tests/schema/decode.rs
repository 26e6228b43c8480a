//! Decode tests
//!
//! Shape departures must surface as SchemaViolation, broken JSON as
//! MalformedJson, and unknown members must be ignored.

use blogset::{parse, ArticleSet, BlogsetError};
use serde::Deserialize;

const SAMPLE: &str = r#"{
  "version": "1.0",
  "articles": [
    {
      "src": "a.xml",
      "base": "a",
      "stripbase": "a",
      "striplangbase": "a",
      "time": 1000,
      "title": {"text": "Hi", "xml": "<b>Hi</b>"},
      "aside": {"text": "", "xml": ""},
      "author": {"text": "J", "xml": "J"},
      "article": {"xml": "<p>Body</p>"},
      "keys": {"k": "v"},
      "tags": ["news"]
    }
  ]
}"#;

#[test]
fn test_decode_example_document() {
    let set: ArticleSet = parse(SAMPLE).unwrap();

    assert_eq!(set.version, "1.0");
    assert_eq!(set.len(), 1);

    let article = &set.articles[0];
    assert_eq!(article.src, "a.xml");
    assert_eq!(article.base, "a");
    assert_eq!(article.stripbase, "a");
    assert_eq!(article.striplangbase, "a");
    assert_eq!(article.time, 1000);
    assert_eq!(article.title.text, "Hi");
    assert_eq!(article.title.xml, "<b>Hi</b>");
    assert_eq!(article.aside.text, "");
    assert_eq!(article.aside.xml, "");
    assert_eq!(article.author.text, "J");
    assert_eq!(article.article.xml, "<p>Body</p>");
    assert_eq!(article.keys.get("k").map(String::as_str), Some("v"));
    assert_eq!(article.tags, vec!["news"]);
}

#[test]
fn test_decode_empty_articles() {
    let set: ArticleSet = parse(r#"{"version": "1.0", "articles": []}"#).unwrap();

    assert_eq!(set.version, "1.0");
    assert!(set.is_empty());
}

// Schema violations

#[test]
fn test_missing_version_fails() {
    let result: blogset::Result<ArticleSet> = parse(r#"{"articles": []}"#);

    assert!(matches!(result, Err(BlogsetError::SchemaViolation(_))));
    assert!(result.unwrap_err().to_string().contains("version"));
}

#[test]
fn test_missing_articles_fails() {
    let result: blogset::Result<ArticleSet> = parse(r#"{"version": "1.0"}"#);

    assert!(matches!(result, Err(BlogsetError::SchemaViolation(_))));
}

#[test]
fn test_missing_article_member_fails() {
    let doc = SAMPLE.replace(r#""src": "a.xml","#, "");
    let result: blogset::Result<ArticleSet> = parse(&doc);

    assert!(matches!(result, Err(BlogsetError::SchemaViolation(_))));
    assert!(result.unwrap_err().to_string().contains("src"));
}

#[test]
fn test_string_time_fails() {
    let doc = SAMPLE.replace(r#""time": 1000"#, r#""time": "1000""#);
    let result: blogset::Result<ArticleSet> = parse(&doc);

    assert!(matches!(result, Err(BlogsetError::SchemaViolation(_))));
}

#[test]
fn test_fractional_time_fails() {
    let doc = SAMPLE.replace(r#""time": 1000"#, r#""time": 1000.5"#);
    let result: blogset::Result<ArticleSet> = parse(&doc);

    assert!(matches!(result, Err(BlogsetError::SchemaViolation(_))));
}

#[test]
fn test_non_object_pair_fails() {
    let doc = SAMPLE.replace(r#"{"text": "Hi", "xml": "<b>Hi</b>"}"#, r#""Hi""#);
    let result: blogset::Result<ArticleSet> = parse(&doc);

    assert!(matches!(result, Err(BlogsetError::SchemaViolation(_))));
}

#[test]
fn test_non_array_articles_fails() {
    let result: blogset::Result<ArticleSet> = parse(r#"{"version": "1.0", "articles": {}}"#);

    assert!(matches!(result, Err(BlogsetError::SchemaViolation(_))));
}

#[test]
fn test_non_array_tags_fails() {
    let doc = SAMPLE.replace(r#"["news"]"#, r#""news""#);
    let result: blogset::Result<ArticleSet> = parse(&doc);

    assert!(matches!(result, Err(BlogsetError::SchemaViolation(_))));
}

#[test]
fn test_non_string_key_value_fails() {
    let doc = SAMPLE.replace(r#"{"k": "v"}"#, r#"{"k": 5}"#);
    let result: blogset::Result<ArticleSet> = parse(&doc);

    assert!(matches!(result, Err(BlogsetError::SchemaViolation(_))));
}

// Malformed input

#[test]
fn test_non_json_input_fails() {
    let result: blogset::Result<ArticleSet> = parse("not json at all");

    assert!(matches!(result, Err(BlogsetError::MalformedJson(_))));
}

#[test]
fn test_empty_input_fails() {
    let result: blogset::Result<ArticleSet> = parse("");

    assert!(matches!(result, Err(BlogsetError::MalformedJson(_))));
}

// Tolerated variations

#[test]
fn test_unknown_members_ignored() {
    let doc = SAMPLE
        .replace(r#""version": "1.0","#, r#""version": "1.0", "generator": "aggregator","#)
        .replace(r#""src": "a.xml","#, r#""src": "a.xml", "sort": "date","#);

    let set: ArticleSet = parse(&doc).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.articles[0].src, "a.xml");
}

#[test]
fn test_negative_time_decodes() {
    let doc = SAMPLE.replace(r#""time": 1000"#, r#""time": -86400"#);
    let set: ArticleSet = parse(&doc).unwrap();

    assert_eq!(set.articles[0].time, -86_400);
}

// Generic keys narrowing

#[derive(Debug, Deserialize)]
struct PostKeys {
    img: String,
}

#[test]
fn test_generic_keys_narrowing() {
    let doc = SAMPLE.replace(r#"{"k": "v"}"#, r#"{"img": "a.png"}"#);
    let set: ArticleSet<PostKeys> = parse(&doc).unwrap();

    assert_eq!(set.articles[0].keys.img, "a.png");
}

#[test]
fn test_generic_keys_mismatch_fails() {
    let result: blogset::Result<ArticleSet<PostKeys>> = parse(SAMPLE);

    assert!(matches!(result, Err(BlogsetError::SchemaViolation(_))));
}
