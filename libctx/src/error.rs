//! Error types for CTX parsing.

use thiserror::Error;

/// Result type for CTX parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse context carrying filename for error reporting.
#[derive(Clone, Debug)]
pub struct ParseContext {
    pub filename: Option<String>,
}

impl ParseContext {
    /// Create a new parse context.
    pub fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(String::from),
        }
    }

    /// Format a location suffix for error messages.
    pub fn loc_suffix(&self, line_num: usize) -> String {
        match &self.filename {
            Some(name) => format!(" at line {} of <{}>", line_num + 1, name),
            None => format!(" at line {}", line_num + 1),
        }
    }
}

/// Error type for CTX parsing.
///
/// Every variant is fatal to the whole parse: the parser is fail-fast and
/// never returns a partial tree. Variants that concern a specific line carry
/// that line's content (after indentation) plus a location suffix filled in
/// by [`ParseError::with_location`].
#[derive(Error, Debug)]
pub enum ParseError {
    /// Tab character found in a content line.
    #[error("Tabs not allowed{1}: {0:?}")]
    TabsNotAllowed(String, String),

    /// Odd number of double-quote characters on a line.
    #[error("Unterminated quote{1}: {0:?}")]
    UnterminatedQuote(String, String),

    /// Indentation nests deeper than the parser's safety bound.
    #[error("Nesting deeper than {0} levels{1}")]
    ExcessiveNestingDepth(usize, String),

    /// The underlying input stream could not be opened or read.
    #[error("Input unavailable: {0}")]
    StreamUnavailable(#[from] std::io::Error),
}

impl ParseError {
    /// Attach location information to an error.
    pub fn with_location(self, ctx: &ParseContext, line_num: usize) -> Self {
        let suffix = ctx.loc_suffix(line_num);
        match self {
            ParseError::TabsNotAllowed(line, _) => ParseError::TabsNotAllowed(line, suffix),
            ParseError::UnterminatedQuote(line, _) => ParseError::UnterminatedQuote(line, suffix),
            ParseError::ExcessiveNestingDepth(limit, _) => {
                ParseError::ExcessiveNestingDepth(limit, suffix)
            }
            ParseError::StreamUnavailable(e) => ParseError::StreamUnavailable(e),
        }
    }
}
