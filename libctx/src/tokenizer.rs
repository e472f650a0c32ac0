//! Quote-aware line tokenizer.
//!
//! A line's content (after indentation has been stripped) is split into an
//! ordered sequence of string tokens. Double quotes group: a quoted segment
//! is one verbatim token even if it contains spaces, while unquoted segments
//! split on runs of ASCII space. There is no escaping inside quotes.

use crate::error::{ParseError, Result};

/// Split one line of content into tokens.
///
/// Splitting the line on `"` yields segments that alternate
/// unquoted/quoted/unquoted, starting unquoted. An odd number of quote
/// characters means some quote was never closed.
///
/// # Example
///
/// ```
/// use libctx::tokenize;
///
/// let tokens = tokenize("name \"John Smith\" admin").unwrap();
/// assert_eq!(tokens, vec!["name", "John Smith", "admin"]);
/// ```
pub fn tokenize(content: &str) -> Result<Vec<String>> {
    if content.contains('\t') {
        return Err(ParseError::TabsNotAllowed(
            content.to_string(),
            String::new(),
        ));
    }

    let quotes = content.bytes().filter(|&b| b == b'"').count();
    if quotes % 2 != 0 {
        return Err(ParseError::UnterminatedQuote(
            content.to_string(),
            String::new(),
        ));
    }

    let mut tokens = Vec::new();
    for (i, segment) in content.split('"').enumerate() {
        if segment.is_empty() {
            continue;
        }
        if i % 2 == 1 {
            // Quoted segment: one verbatim token.
            tokens.push(segment.to_string());
        } else {
            tokens.extend(
                segment
                    .split(' ')
                    .filter(|t| !t.is_empty())
                    .map(String::from),
            );
        }
    }
    Ok(tokens)
}
