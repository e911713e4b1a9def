/**
 * Token definitions, the output of the lexer.
 */

use std::ops::Range;

/// A classified lexeme together with the bytes of the pattern it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub range: Range<usize>,
    pub kind: TokenKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A character that stands for itself.
    Char(char),
    Escape(Escape),
    /// The `.` metacharacter.
    Any,
    /// A whole bracketed class, `[...]`.
    Class(CharClass),
    GroupOpen(GroupKind),
    GroupClose,
    /// The `|` metacharacter.
    Alternate,
    Anchor(AnchorKind),
    Quantifier(Quantifier),
    /// A standalone option setting like `(?i)`.
    Options(String),
}

impl TokenKind {
    pub fn is_quantifier(&self) -> bool {
        match self {
            TokenKind::Quantifier(_) => true,
            _ => false,
        }
    }
}

/**
 * Escape sequences.
 */

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Escape {
    /// Denotes exactly one character: `\|`, `\$`, `\n`, `\x41`, ...
    Literal(char),
    /// Shorthand sets like `\d`, `\W` or `\R`.
    Shorthand(char),
    /// Zero-width assertions like `\b` or `\A`.
    Assertion(char),
    /// Unicode properties, `\p{L}` and `\PL`.
    Property{
        negated: bool,
        name: String,
    },
    /// `\1`, `\g{-1}`, `\k<name>` and friends.
    Backreference(String),
}

impl Escape {
    pub fn as_char(&self) -> Option<char> {
        match self {
            Escape::Literal(c) => Some(*c),
            _ => None,
        }
    }
}

/**
 * Character classes.
 */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    pub negated: bool,
    pub items: Vec<ClassItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassItem {
    Literal(char),
    Range(char, char),
    /// A shorthand or property escape inside the brackets.
    Set(Escape),
    /// `[:alpha:]` and `[:^alpha:]`.
    Posix{
        negated: bool,
        name: String,
    },
}

/**
 * Groups, anchors and quantifiers.
 */

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKind {
    Capturing,
    Named(String),
    NonCapturing,
    /// `(?i:...)`, a non-capturing group with scoped options.
    Options(String),
    Atomic,
    BranchReset,
    Lookahead{ negated: bool },
    Lookbehind{ negated: bool },
    /// Recursion, subroutine calls and verbs: `(?R)`, `(?1)`, `(*UTF8)`.
    Opaque,
}

impl GroupKind {
    /// True for groups that match exactly what their content matches.
    pub fn is_transparent(&self) -> bool {
        match self {
              GroupKind::Capturing
            | GroupKind::Named(_)
            | GroupKind::NonCapturing
            | GroupKind::Options(_)
            | GroupKind::Atomic => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    AtLeast(u32),
    Between(u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greed {
    Greedy,
    Lazy,
    Possessive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantifier {
    pub bounds: Bounds,
    pub greed: Greed,
}

impl Quantifier {
    pub fn greedy(bounds: Bounds) -> Self {
        Self{ bounds, greed: Greed::Greedy }
    }

    pub fn min(&self) -> u32 {
        match self.bounds {
            Bounds::AtLeast(n) | Bounds::Between(n, _) => n,
        }
    }

    pub fn max(&self) -> Option<u32> {
        match self.bounds {
            Bounds::AtLeast(_) => None,
            Bounds::Between(_, m) => Some(m),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.max().is_none()
    }
}
