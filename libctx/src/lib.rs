//! CTX parser implementation.
//!
//! CTX is an indentation-sensitive configuration format. A document is a
//! tree of blocks: each non-comment line is a key followed by optional value
//! tokens, nesting is expressed with leading spaces, double quotes group a
//! value containing spaces into one token, and a key whose first value token
//! is `[` opens a list entry.
//!
//! # Parsing Pipeline
//!
//! 1. **Line Source**: Wraps the input stream; yields trimmed lines and
//!    supports pushing one line back so a nested parse can return an
//!    over-read line to its caller.
//!
//! 2. **Tokenizer**: Splits one line's content into tokens, honoring
//!    double-quote grouping and rejecting tabs and unbalanced quotes.
//!
//! 3. **Block Parser**: Recursively classifies each line by its key/value
//!    shape and assembles the node tree bottom-up.

mod encode;
mod error;
mod node;
mod parser;
mod source;
mod tokenizer;

pub use encode::encode;
pub use error::{ParseError, Result};
pub use node::{Block, Node};
pub use parser::MAX_DEPTH;
pub use source::LineSource;
pub use tokenizer::tokenize;

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// Parse a CTX document from a string.
///
/// # Example
///
/// ```
/// use libctx::parse;
///
/// let block = parse("host localhost\n").unwrap();
/// assert_eq!(block["host"].as_tokens().unwrap(), &["localhost"]);
/// ```
pub fn parse(input: &str) -> Result<Block> {
    parse_with_filename(input, None)
}

/// Parse a CTX document from a string with a filename for error messages.
pub fn parse_with_filename(input: &str, filename: Option<&str>) -> Result<Block> {
    let ctx = error::ParseContext::new(filename);
    let mut source = LineSource::new(Cursor::new(input));
    parser::parse_block(&mut source, 0, 0, &ctx)
}

/// Parse a CTX document from an open line-oriented stream.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Block> {
    let ctx = error::ParseContext::new(None);
    let mut source = LineSource::new(reader);
    parser::parse_block(&mut source, 0, 0, &ctx)
}

/// Open and parse a CTX file.
///
/// A file that cannot be opened or read reports
/// [`ParseError::StreamUnavailable`] rather than producing an empty tree.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Block> {
    let path = path.as_ref();
    let filename = path.file_name().map(|n| n.to_string_lossy().to_string());
    let ctx = error::ParseContext::new(filename.as_deref());
    let file = File::open(path)?;
    let mut source = LineSource::new(BufReader::new(file));
    parser::parse_block(&mut source, 0, 0, &ctx)
}

/// Invoke `callback` once per top-level `(key, Node)` pair of a block.
///
/// A negative return from the callback stops iteration and is returned to
/// the caller; zero or positive means continue. Returns 0 when every pair
/// has been visited.
pub fn each<F>(block: &Block, mut callback: F) -> i32
where
    F: FnMut(&str, &Node) -> i32,
{
    for (key, node) in block {
        let r = callback(key, node);
        if r < 0 {
            return r;
        }
    }
    0
}
