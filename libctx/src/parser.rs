//! Recursive-descent block parser.
//!
//! A block is the set of lines at one indentation level belonging to one
//! parent key. Each invocation owns one [`Block`] and loops over lines:
//!
//! - a tab anywhere in a line is fatal, comment lines included;
//! - blank and `#` lines are skipped without affecting indentation tracking;
//! - a line indented less than `base_indent` belongs to an ancestor and is
//!   pushed back onto the line source before the invocation returns;
//! - a key with no value tokens opens a nested block (recursion with
//!   `base_indent = indent + 1`);
//! - a key whose first value token is `[` opens a list entry: the nested
//!   block becomes one element of a list accumulated across sibling lines;
//! - any other value tokens are stored verbatim under the key.
//!
//! The list accumulator is local to one invocation, not per key: a second
//! `key2 [` line at the same level while a list is still open appends to the
//! already-open list and `key2` itself is never recorded. A line consisting
//! solely of `]` closes the open list.

use crate::error::{ParseContext, ParseError, Result};
use crate::node::{Block, Node};
use crate::source::LineSource;
use crate::tokenizer::tokenize;
use std::io::BufRead;

/// Maximum nesting depth before the parser gives up.
///
/// Indentation drives recursion, so adversarial input with ever-deeper
/// indentation would otherwise grow the call stack without bound.
pub const MAX_DEPTH: usize = 64;

/// Parse one block at `base_indent`, consuming lines until end of stream or
/// a line that belongs to an ancestor level.
pub(crate) fn parse_block<R: BufRead>(
    source: &mut LineSource<R>,
    base_indent: usize,
    depth: usize,
    ctx: &ParseContext,
) -> Result<Block> {
    if depth >= MAX_DEPTH {
        return Err(ParseError::ExcessiveNestingDepth(MAX_DEPTH, String::new())
            .with_location(ctx, source.line_num()));
    }

    let mut block = Block::new();
    // Key under which this invocation's open list was inserted, if any.
    let mut open_key: Option<String> = None;

    while let Some(line) = source.next_line()? {
        let indent = line.bytes().take_while(|&b| b == b' ').count();
        let content = &line[indent..];

        // Tabs are fatal anywhere on a line, comment lines included, so the
        // check comes before the comment skip.
        if content.contains('\t') {
            return Err(
                ParseError::TabsNotAllowed(content.to_string(), String::new())
                    .with_location(ctx, source.line_num()),
            );
        }

        // Comment and blank lines are skipped before the indentation check,
        // so they never terminate a block.
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        if indent < base_indent {
            source.push_back(line);
            break;
        }

        let mut tokens =
            tokenize(content).map_err(|e| e.with_location(ctx, source.line_num()))?;
        if tokens.is_empty() {
            continue;
        }
        let key = tokens.remove(0);
        let rest = tokens;

        if rest.is_empty() {
            if key == "]" {
                open_key = None;
                continue;
            }
            // Bare key: the following more-indented lines form a nested
            // block. The recursive call pushes back the first line that is
            // not part of it.
            let nested = parse_block(source, indent + 1, depth + 1, ctx)?;
            block.insert(key, Node::Map(nested));
        } else if rest[0] == "[" {
            let nested = parse_block(source, indent + 1, depth + 1, ctx)?;
            match open_key.as_deref().and_then(|k| block.get_mut(k)) {
                Some(Node::List(items)) => {
                    // List already open at this level: append, ignoring this
                    // line's key.
                    items.push(Node::Map(nested));
                }
                _ => {
                    block.insert(key.clone(), Node::List(vec![Node::Map(nested)]));
                    open_key = Some(key);
                }
            }
        } else {
            block.insert(key, Node::Tokens(rest));
        }
    }

    Ok(block)
}
