/**
 * A recursive-descent parser to turn pattern tokens into a regex AST.
 */

use tracing::trace;
use crate::ast::{Node, NodeKind};
use crate::error::{MalformedPatternError, MalformedReason};
use crate::lexer::tokenize;
use crate::token::{GroupKind, Token, TokenKind};

/*
 * Reference grammar for the parser:
 *
 * alternation ::=
 *               | sequence ('|' sequence)*
 *               ;
 *
 * sequence    ::=
 *               | quantified*
 *               ;
 *
 * quantified  ::=
 *               | atom QUANTIFIER
 *               | atom
 *               ;
 *
 * atom        ::=
 *               | GROUP_OPEN alternation ')'
 *               | CLASS
 *               | CHAR
 *               | ESCAPE
 *               | '.'
 *               | ANCHOR
 *               | OPTIONS
 *               ;
 *
 * Alternation is collected into a single node per nesting level instead of
 * the right-nested pairs the grammar would suggest.
 */

/// How deep groups may nest before the pattern is rejected.
pub const MAX_NESTING: usize = 250;

/// A small helper to walk the token slice without mutating anything
#[derive(Clone, Copy)]
struct Tokens<'a> {
    tokens: &'a [Token],
    end: usize,
}

impl <'a> Tokens<'a> {
    fn next(&self) -> Option<(&'a Token, Tokens<'a>)> {
        let (first, rest) = self.tokens.split_first()?;
        Some((first, Tokens{ tokens: rest, end: self.end }))
    }

    fn peek(&self) -> Option<&'a TokenKind> {
        self.tokens.first().map(|t| &t.kind)
    }

    /// Where the next token starts, or the end of the pattern.
    fn offset(&self) -> usize {
        self.tokens.first().map_or(self.end, |t| t.range.start)
    }
}

/**
 * Actual parsing.
 */

pub fn parse(source: &str) -> Result<Node, MalformedPatternError> {
    let tokens = tokenize(source)?;
    parse_tokens(&tokens, source.len())
}

/// Parses an already tokenized pattern of `source_len` bytes.
pub fn parse_tokens(tokens: &[Token], source_len: usize) -> Result<Node, MalformedPatternError> {
    let (node, it) = parse_alternation(Tokens{ tokens, end: source_len }, 0)?;
    // The only thing that can stop the top level early is a stray ')'
    match it.next() {
        Some((token, _)) => Err(MalformedPatternError::new(token.range.start, MalformedReason::UnmatchedClose)),
        None => {
            trace!(root = ?node.kind, "parsed pattern");
            Ok(node)
        },
    }
}

type ParseResult<'a, T> = Result<(T, Tokens<'a>), MalformedPatternError>;

fn parse_alternation(it: Tokens<'_>, depth: usize) -> ParseResult<'_, Node> {
    let (first, mut it) = parse_sequence(it, depth)?;
    if it.peek() != Some(&TokenKind::Alternate) {
        return Ok((first, it));
    }

    let mut branches = vec![first];
    while let Some((Token{ kind: TokenKind::Alternate, .. }, rest)) = it.next() {
        let (branch, rest) = parse_sequence(rest, depth)?;
        branches.push(branch);
        it = rest;
    }
    let range = branches[0].range.start..branches[branches.len() - 1].range.end;
    Ok((Node::new(range, NodeKind::Alternation(branches)), it))
}

fn parse_sequence(it: Tokens<'_>, depth: usize) -> ParseResult<'_, Node> {
    let start = it.offset();
    let mut items = Vec::new();
    let mut it = it;
    while let Some((token, rest)) = it.next() {
        match token.kind {
            TokenKind::Alternate | TokenKind::GroupClose => break,
            _ => {
                let (item, rest) = parse_quantified(token, rest, depth)?;
                items.push(item);
                it = rest;
            },
        }
    }

    let node = match items.len() {
        0 => Node::empty_at(start),
        1 => items.remove(0),
        _ => {
            let range = items[0].range.start..items[items.len() - 1].range.end;
            Node::new(range, NodeKind::Sequence(items))
        },
    };
    Ok((node, it))
}

fn parse_quantified<'a>(token: &'a Token, it: Tokens<'a>, depth: usize) -> ParseResult<'a, Node> {
    let (subnode, it) = parse_atom(token, it, depth)?;
    match it.next() {
        Some((Token{ range, kind: TokenKind::Quantifier(quantifier) }, rest)) => {
            // A quantifier can't be quantified again
            if rest.peek().map_or(false, TokenKind::is_quantifier) {
                return Err(MalformedPatternError::new(rest.offset(), MalformedReason::NothingToRepeat));
            }
            let range = subnode.range.start..range.end;
            let kind = NodeKind::Quantified{ subnode: Box::new(subnode), quantifier: *quantifier };
            Ok((Node::new(range, kind), rest))
        },
        _ => Ok((subnode, it)),
    }
}

fn parse_atom<'a>(token: &'a Token, it: Tokens<'a>, depth: usize) -> ParseResult<'a, Node> {
    let kind = match &token.kind {
        TokenKind::GroupOpen(kind) => return parse_group(token, kind, it, depth),

        TokenKind::Char(c) => NodeKind::Literal(*c),
        TokenKind::Escape(e) => NodeKind::Escape(e.clone()),
        TokenKind::Any => NodeKind::Any,
        TokenKind::Class(class) => NodeKind::Class(class.clone()),
        TokenKind::Anchor(anchor) => NodeKind::Anchor(*anchor),
        TokenKind::Options(flags) => NodeKind::Options(flags.clone()),

        // '|' and ')' are stopped at by the sequence, so this is a quantifier
          TokenKind::Quantifier(_)
        | TokenKind::Alternate
        | TokenKind::GroupClose =>
            return Err(MalformedPatternError::new(token.range.start, MalformedReason::NothingToRepeat)),
    };
    Ok((Node::new(token.range.clone(), kind), it))
}

fn parse_group<'a>(open: &'a Token, kind: &GroupKind, it: Tokens<'a>, depth: usize) -> ParseResult<'a, Node> {
    if depth >= MAX_NESTING {
        return Err(MalformedPatternError::new(open.range.start, MalformedReason::NestingTooDeep(MAX_NESTING)));
    }

    let (subnode, it) = parse_alternation(it, depth + 1)?;
    match it.next() {
        Some((Token{ range: close, kind: TokenKind::GroupClose }, rest)) => {
            let range = open.range.start..close.end;
            let kind = NodeKind::Group{ kind: kind.clone(), subnode: Box::new(subnode) };
            Ok((Node::new(range, kind), rest))
        },
        _ => Err(MalformedPatternError::new(open.range.start, MalformedReason::UnterminatedGroup)),
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
