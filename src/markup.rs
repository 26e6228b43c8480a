//! Markup tag stripping for paired text/xml fields
//!
//! Paired fields carry the same content twice: once with markup (`xml`) and
//! once with every tag removed (`text`). The producing tool derives the text
//! form with an XML parser's character-data callbacks, so the stripping
//! transform here follows the same rules: element tags vanish, character
//! data (entities resolved) and CDATA content survive, comments and
//! processing instructions are dropped, and whitespace is left untouched.

use crate::{BlogsetError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Strip all markup tags from an xml fragment, returning the character data
///
/// The fragment does not need a single root element; any well-formed
/// sequence of elements and text is accepted. Entity references are
/// resolved, so the result compares directly against a `text` field.
///
/// # Errors
///
/// Returns [`BlogsetError::MalformedMarkup`] when the fragment is not
/// well-formed (mismatched end tags, unterminated entity references).
///
/// # Examples
///
/// ```
/// use blogset::markup::strip_tags;
///
/// assert_eq!(strip_tags("<b>Hi</b>").unwrap(), "Hi");
/// assert_eq!(strip_tags("plain text").unwrap(), "plain text");
/// assert_eq!(strip_tags("A &amp; B").unwrap(), "A & B");
/// assert_eq!(strip_tags("<p>one</p> <p>two</p>").unwrap(), "one two");
/// ```
pub fn strip_tags(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);

    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(ref e)) => {
                let data = e.unescape().map_err(|e| {
                    BlogsetError::MalformedMarkup(format!("bad character data: {e}"))
                })?;
                text.push_str(&data);
            }
            Ok(Event::CData(ref e)) => {
                text.push_str(&String::from_utf8_lossy(e));
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(BlogsetError::MalformedMarkup(format!(
                    "markup parse error: {e}"
                )));
            }
            // Tags, comments, and processing instructions carry no text.
            _ => {}
        }

        buf.clear();
    }

    Ok(text)
}
