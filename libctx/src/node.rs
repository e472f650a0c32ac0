//! CTX node tree representation.
//!
//! A parsed document is a [`Block`] mapping keys to [`Node`]s. Ownership is
//! a strict tree: every node belongs to exactly one container, so teardown
//! is the enum's derived drop glue, depth-first with no hand-written
//! destructor. Recursion depth is bounded by the parser's nesting limit.

use std::collections::HashMap;

/// One block of a parsed document: a string-keyed map of nodes.
///
/// Keys are unique; re-inserting a key drops the prior value. Insertion
/// order is not semantically significant.
pub type Block = HashMap<String, Node>;

/// A CTX value.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Empty/absent value.
    Nil,
    /// String scalar, produced by [`Node::from_scalar`].
    Str(String),
    /// Integer scalar, produced by [`Node::from_scalar`].
    Int(i64),
    /// Float scalar, produced by [`Node::from_scalar`].
    Float(f64),
    /// The raw value tokens following a key on one line. Never empty when
    /// built by the parser: a key with no value tokens opens a nested block
    /// instead.
    Tokens(Vec<String>),
    /// A nested block.
    Map(Block),
    /// A list of blocks, one per bracketed sub-block.
    List(Vec<Node>),
}

impl Node {
    /// Returns `true` if this node is `Nil`.
    pub fn is_nil(&self) -> bool {
        matches!(self, Node::Nil)
    }

    /// Returns the string if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Node::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float value if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Node::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns a reference to the tokens if this is a `Tokens`.
    pub fn as_tokens(&self) -> Option<&Vec<String>> {
        match self {
            Node::Tokens(t) => Some(t),
            _ => None,
        }
    }

    /// Returns a reference to the block if this is a `Map`.
    pub fn as_map(&self) -> Option<&Block> {
        match self {
            Node::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns a reference to the elements if this is a `List`.
    pub fn as_list(&self) -> Option<&Vec<Node>> {
        match self {
            Node::List(l) => Some(l),
            _ => None,
        }
    }

    /// Classify a raw string as `Int`, `Float`, or `Str`.
    ///
    /// A string containing `.` is tried as a float; anything else is tried
    /// as a signed 64-bit integer with C numeric-literal prefixes (`0x` hex,
    /// leading `0` octal, otherwise decimal). A parse only succeeds if the
    /// whole input is consumed and non-empty, so `"3abc"` stays a string.
    ///
    /// The block parser never calls this: values stay as token lists unless
    /// the caller narrows them.
    pub fn from_scalar(raw: &str) -> Node {
        if raw.contains('.') {
            if !raw.is_empty() {
                if let Ok(f) = raw.parse::<f64>() {
                    return Node::Float(f);
                }
            }
        } else if let Some(n) = parse_int_literal(raw) {
            return Node::Int(n);
        }
        Node::Str(raw.to_string())
    }
}

/// Full-string integer parse with `strtol`-style base detection.
fn parse_int_literal(s: &str) -> Option<i64> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (radix, digits) = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        (16, hex)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (8, &rest[1..])
    } else {
        (10, rest)
    };
    if digits.is_empty() {
        return None;
    }
    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Str(s)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Str(s.to_string())
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Int(n)
    }
}

impl From<f64> for Node {
    fn from(f: f64) -> Self {
        Node::Float(f)
    }
}

impl From<Vec<String>> for Node {
    fn from(tokens: Vec<String>) -> Self {
        Node::Tokens(tokens)
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Node::Map(block)
    }
}

impl From<Vec<Node>> for Node {
    fn from(list: Vec<Node>) -> Self {
        Node::List(list)
    }
}
