/**
 * Tokenizer and parser for the regex subset used by ignore patterns.
 *
 * The parser is not a matcher, it only recovers the structure of a pattern
 * so that it can be inspected.
 */

extern crate thiserror;
extern crate tracing;

mod ast;
mod error;
mod lexer;
mod parser;
mod token;

pub use ast::{Node, NodeKind};
pub use error::{MalformedPatternError, MalformedReason};
pub use lexer::{tokenize, Lexer, MAX_REPEAT};
pub use parser::{parse, parse_tokens, MAX_NESTING};
pub use token::{
    AnchorKind, Bounds, CharClass, ClassItem, Escape, GroupKind, Greed, Quantifier, Token,
    TokenKind,
};
