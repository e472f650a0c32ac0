//! Render a parsed tree back to CTX text.
//!
//! The output is parseable: feeding it back through the parser yields a
//! structurally equal tree. Keys are emitted in sorted order because the
//! backing map does not preserve insertion order.

use crate::node::{Block, Node};

/// Encode a block as CTX text.
///
/// # Example
///
/// ```
/// use libctx::{encode, parse};
///
/// let block = parse("server\n  host localhost\n").unwrap();
/// let text = encode(&block);
/// assert_eq!(parse(&text).unwrap(), block);
/// ```
pub fn encode(block: &Block) -> String {
    let mut out = String::new();
    encode_block(block, 0, &mut out);
    out
}

fn encode_block(block: &Block, indent: usize, out: &mut String) {
    let mut keys: Vec<&String> = block.keys().collect();
    keys.sort();
    let pad = " ".repeat(indent);

    for key in keys {
        match &block[key] {
            Node::Nil => {
                out.push_str(&pad);
                out.push_str(&quote_token(key));
                out.push('\n');
            }
            Node::Str(s) => {
                push_entry(&pad, key, &quote_token(s), out);
            }
            Node::Int(n) => {
                push_entry(&pad, key, &n.to_string(), out);
            }
            Node::Float(f) => {
                push_entry(&pad, key, &f.to_string(), out);
            }
            Node::Tokens(tokens) => {
                out.push_str(&pad);
                out.push_str(&quote_token(key));
                for token in tokens {
                    out.push(' ');
                    out.push_str(&quote_token(token));
                }
                out.push('\n');
            }
            Node::Map(inner) => {
                out.push_str(&pad);
                out.push_str(&quote_token(key));
                out.push('\n');
                encode_block(inner, indent + 2, out);
            }
            Node::List(items) => {
                // Each element repeats the key with a `[` opener; the
                // matching `]` lines all come after the last element, one
                // per open bracket, which is how the list accumulator
                // re-reads its own output.
                for item in items {
                    out.push_str(&pad);
                    out.push_str(&quote_token(key));
                    out.push_str(" [\n");
                    if let Node::Map(inner) = item {
                        encode_block(inner, indent + 2, out);
                    }
                }
                for _ in items {
                    out.push_str(&pad);
                    out.push_str("]\n");
                }
            }
        }
    }
}

fn push_entry(pad: &str, key: &str, value: &str, out: &mut String) {
    out.push_str(pad);
    out.push_str(&quote_token(key));
    out.push(' ');
    out.push_str(value);
    out.push('\n');
}

/// Quote a token that would not survive re-parsing verbatim: empty tokens,
/// tokens with spaces, and tokens starting with `#` (a bare `#` at the start
/// of a line would read back as a comment).
fn quote_token(s: &str) -> String {
    if s.is_empty() || s.contains(' ') || s.starts_with('#') {
        format!("\"{}\"", s)
    } else {
        s.to_string()
    }
}
