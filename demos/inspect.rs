//! Inspect an article-set document
//!
//! Run with: cargo run --example inspect -- path/to/blog.json
//!
//! Pass "-" (or no argument) to read the document from stdin.

use std::fs::File;
use std::io;

use blogset::{from_reader, ArticleSet};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "-".to_string());

    let set: ArticleSet = if path == "-" {
        from_reader(io::stdin().lock())?
    } else {
        from_reader(File::open(&path)?)?
    };

    // Decoding checks shape only; check content invariants as well
    set.validate()?;

    println!(
        "Document version {} with {} articles",
        set.version,
        set.len()
    );

    for article in &set.articles {
        let date = article
            .published()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| format!("epoch {}", article.time));

        println!("  {}: {} ({})", date, article.title.text, article.src);
        if !article.tags.is_empty() {
            println!("    tags: {}", article.tags.join(", "));
        }
    }

    let tags = set.tags();
    if !tags.is_empty() {
        println!("\n{} distinct tags: {}", tags.len(), tags.join(", "));
    }

    Ok(())
}
