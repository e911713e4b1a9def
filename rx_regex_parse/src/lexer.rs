/**
 * Tokenizer for the regex sub-grammar of ignore patterns.
 */

use tracing::trace;
use crate::error::{MalformedPatternError, MalformedReason};
use crate::token::{
    AnchorKind, Bounds, CharClass, ClassItem, Escape, GroupKind, Greed, Quantifier, Token,
    TokenKind,
};

/// The largest repetition count a `{m,n}` bound may name.
pub const MAX_REPEAT: u32 = 65535;

/// Tokenizes a whole pattern, stopping at the first malformed lexeme.
pub fn tokenize(source: &str) -> Result<Vec<Token>, MalformedPatternError> {
    let tokens = Lexer::new(source).collect::<Result<Vec<_>, _>>()?;
    trace!(pattern = source, count = tokens.len(), "tokenized pattern");
    Ok(tokens)
}

/**
 * The lexer is an iterator over tokens. After yielding an error it ends.
 */

pub struct Lexer<'a> {
    source: &'a str,
    index: usize,
    quoting: bool,
    failed: bool,
}

impl <'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self{ source, index: 0, quoting: false, failed: false }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.index..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.index += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.index += c.len_utf8();
            true
        }
        else {
            false
        }
    }

    /// Consumes everything up to and including `close`, returning what was
    /// in between. Leaves the lexer untouched if `close` never comes.
    fn take_until(&mut self, close: char) -> Option<&'a str> {
        let rest = self.rest();
        let end = rest.find(close)?;
        self.index += end + close.len_utf8();
        Some(&rest[..end])
    }

    fn error(&self, offset: usize, reason: MalformedReason) -> MalformedPatternError {
        MalformedPatternError::new(offset, reason)
    }

    /// Lexes one lexeme. `None` means the lexeme produces no token, like a
    /// comment or a `\Q` quote marker.
    fn lex_one(&mut self) -> Result<Option<TokenKind>, MalformedPatternError> {
        let start = self.index;
        let c = match self.bump() {
            Some(c) => c,
            None => return Ok(None),
        };

        if self.quoting {
            if c == '\\' && self.eat('E') {
                self.quoting = false;
                return Ok(None);
            }
            return Ok(Some(TokenKind::Escape(Escape::Literal(c))));
        }

        let kind = match c {
            '\\' => {
                if self.eat('Q') {
                    self.quoting = true;
                    return Ok(None);
                }
                if self.eat('E') {
                    return Ok(None);
                }
                TokenKind::Escape(self.lex_escape(start, false)?)
            },

            '[' => TokenKind::Class(self.lex_class(start)?),
            '(' => return self.lex_group_open(start),
            ')' => TokenKind::GroupClose,
            '|' => TokenKind::Alternate,
            '^' => TokenKind::Anchor(AnchorKind::Start),
            '$' => TokenKind::Anchor(AnchorKind::End),
            '.' => TokenKind::Any,

            '*' => self.quantifier(Bounds::AtLeast(0)),
            '+' => self.quantifier(Bounds::AtLeast(1)),
            '?' => self.quantifier(Bounds::Between(0, 1)),
            '{' => match self.lex_bounds(start)? {
                Some(bounds) => self.quantifier(bounds),
                None => TokenKind::Char('{'),
            },

            c => TokenKind::Char(c),
        };
        Ok(Some(kind))
    }

    fn quantifier(&mut self, bounds: Bounds) -> TokenKind {
        let greed = if self.eat('?') {
            Greed::Lazy
        }
        else if self.eat('+') {
            Greed::Possessive
        }
        else {
            Greed::Greedy
        };
        TokenKind::Quantifier(Quantifier{ bounds, greed })
    }

    /// Called right after a `{`. A brace that does not open a well-formed
    /// bound is a literal, so this returns `None` without consuming anything.
    /// Only the digits and commas after the brace are looked at.
    fn lex_bounds(&mut self, start: usize) -> Result<Option<Bounds>, MalformedPatternError> {
        let rest = self.rest();
        let close = rest.bytes().take_while(|b| b.is_ascii_digit() || *b == b',').count();
        if rest.as_bytes().get(close) != Some(&b'}') {
            return Ok(None);
        }
        let inner = &rest[..close];
        let (min, max) = match inner.find(',') {
            Some(comma) => (&inner[..comma], Some(&inner[comma + 1..])),
            None => (inner, None),
        };
        if !is_digits(min) || max.map_or(false, |m| !m.is_empty() && !is_digits(m)) {
            return Ok(None);
        }

        let too_large = || self.error(start, MalformedReason::QuantifierTooLarge);
        let min = parse_repeat(min).ok_or_else(too_large)?;
        let bounds = match max {
            None => Bounds::Between(min, min),
            Some("") => Bounds::AtLeast(min),
            Some(max) => {
                let max = parse_repeat(max).ok_or_else(too_large)?;
                if min > max {
                    return Err(self.error(start, MalformedReason::QuantifierOutOfOrder));
                }
                Bounds::Between(min, max)
            },
        };
        self.index += close + 1;
        Ok(Some(bounds))
    }

    /**
     * Escapes.
     */

    /// Called right after a backslash that started at `start`.
    fn lex_escape(&mut self, start: usize, in_class: bool) -> Result<Escape, MalformedPatternError> {
        let c = match self.bump() {
            Some(c) => c,
            None => return Err(self.error(start, MalformedReason::DanglingEscape)),
        };

        let escape = match c {
            'n' => Escape::Literal('\n'),
            't' => Escape::Literal('\t'),
            'r' => Escape::Literal('\r'),
            'f' => Escape::Literal('\u{0c}'),
            'e' => Escape::Literal('\u{1b}'),
            'a' => Escape::Literal('\u{07}'),
            'b' if in_class => Escape::Literal('\u{08}'),

            'd' | 'D' | 'w' | 'W' | 's' | 'S' | 'h' | 'H' | 'v' | 'V' => Escape::Shorthand(c),
            'R' | 'X' | 'N' | 'C' if !in_class => Escape::Shorthand(c),
            'b' | 'B' | 'A' | 'z' | 'Z' | 'G' | 'K' if !in_class => Escape::Assertion(c),

            'x' => Escape::Literal(self.lex_hex(start)?),
            'o' => Escape::Literal(self.lex_braced_code(start, 8)?),
            '0' => Escape::Literal(self.lex_octal()),
            'c' => Escape::Literal(self.lex_control(start)?),

            'p' | 'P' => {
                let (negated, name) = self.lex_property(start)?;
                Escape::Property{ negated: negated != (c == 'P'), name }
            },

            'g' | 'k' if !in_class => Escape::Backreference(self.lex_reference(start)?),
            '1'..='9' if !in_class => {
                let begin = self.index - 1;
                while self.peek().map_or(false, |c| c.is_ascii_digit()) {
                    self.bump();
                }
                Escape::Backreference(self.source[begin..self.index].into())
            },

            c => Escape::Literal(c),
        };
        Ok(escape)
    }

    fn lex_hex(&mut self, start: usize) -> Result<char, MalformedPatternError> {
        if self.peek() == Some('{') {
            return self.lex_braced_code(start, 16);
        }
        let begin = self.index;
        while self.index - begin < 2 && self.peek().map_or(false, |c| c.is_ascii_hexdigit()) {
            self.bump();
        }
        let digits = &self.source[begin..self.index];
        if digits.is_empty() {
            return Ok('\0');
        }
        u32::from_str_radix(digits, 16).ok()
            .and_then(std::char::from_u32)
            .ok_or_else(|| self.error(start, MalformedReason::InvalidEscape))
    }

    /// `{digits}` in the given radix, naming a code point.
    fn lex_braced_code(&mut self, start: usize, radix: u32) -> Result<char, MalformedPatternError> {
        let invalid = self.error(start, MalformedReason::InvalidEscape);
        if !self.eat('{') {
            return Err(invalid);
        }
        match self.take_until('}') {
            Some(digits) if !digits.is_empty() => u32::from_str_radix(digits, radix).ok()
                .and_then(std::char::from_u32)
                .ok_or(invalid),
            _ => Err(invalid),
        }
    }

    /// Up to two more octal digits after `\0`.
    fn lex_octal(&mut self) -> char {
        let mut value = 0u32;
        for _ in 0..2 {
            match self.peek().and_then(|c| c.to_digit(8)) {
                Some(d) => {
                    self.bump();
                    value = value * 8 + d;
                },
                None => break,
            }
        }
        std::char::from_u32(value).unwrap_or('\0')
    }

    fn lex_control(&mut self, start: usize) -> Result<char, MalformedPatternError> {
        match self.bump() {
            Some(c) if c.is_ascii() => Ok(((c.to_ascii_uppercase() as u8) ^ 0x40) as char),
            Some(_) => Err(self.error(start, MalformedReason::InvalidEscape)),
            None => Err(self.error(start, MalformedReason::DanglingEscape)),
        }
    }

    /// `\p{Name}`, `\p{^Name}` or the one letter form `\pL`.
    fn lex_property(&mut self, start: usize) -> Result<(bool, String), MalformedPatternError> {
        let invalid = self.error(start, MalformedReason::InvalidEscape);
        if self.eat('{') {
            let body = self.take_until('}').ok_or_else(|| invalid.clone())?;
            let (negated, name) = match body.strip_prefix('^') {
                Some(name) => (true, name),
                None => (false, body),
            };
            if name.is_empty() {
                return Err(invalid);
            }
            return Ok((negated, name.into()));
        }
        match self.bump() {
            Some(c) if c.is_ascii_alphabetic() => Ok((false, c.to_string())),
            _ => Err(invalid),
        }
    }

    /// The target of `\g` or `\k`: bracketed in one of `{}`, `<>`, `''`, or
    /// a possibly signed number.
    fn lex_reference(&mut self, start: usize) -> Result<String, MalformedPatternError> {
        let invalid = self.error(start, MalformedReason::InvalidEscape);
        let close = match self.peek() {
            Some('{') => Some('}'),
            Some('<') => Some('>'),
            Some('\'') => Some('\''),
            _ => None,
        };
        if let Some(close) = close {
            self.bump();
            return match self.take_until(close) {
                Some(name) if !name.is_empty() => Ok(name.into()),
                _ => Err(invalid),
            };
        }

        let begin = self.index;
        if let Some('-') | Some('+') = self.peek() {
            self.bump();
        }
        let digits = self.index;
        while self.peek().map_or(false, |c| c.is_ascii_digit()) {
            self.bump();
        }
        if self.index == digits {
            return Err(invalid);
        }
        Ok(self.source[begin..self.index].into())
    }

    /**
     * Character classes.
     */

    /// Called right after the `[` at `start`.
    fn lex_class(&mut self, start: usize) -> Result<CharClass, MalformedPatternError> {
        let negated = self.eat('^');
        let mut items = Vec::new();

        // A bracket right after the opening one is literal
        if self.eat(']') {
            items.push(ClassItem::Literal(']'));
        }

        loop {
            let item_start = self.index;
            let item = match self.bump() {
                None => return Err(self.error(start, MalformedReason::UnterminatedClass)),
                Some(']') => return Ok(CharClass{ negated, items }),
                Some('[') if self.peek() == Some(':') => match self.lex_posix() {
                    Some(item) => item,
                    None => ClassItem::Literal('['),
                },
                Some('\\') => match self.lex_escape(item_start, true)? {
                    Escape::Literal(c) => ClassItem::Literal(c),
                    other => ClassItem::Set(other),
                },
                Some(c) => ClassItem::Literal(c),
            };

            let item = match item {
                ClassItem::Literal(lo) if self.starts_range() => self.lex_range(item_start, lo)?,
                item => item,
            };
            items.push(item);
        }
    }

    /// A `-` that is followed by something other than the closing bracket.
    fn starts_range(&self) -> bool {
        self.peek() == Some('-') && self.peek_nth(1).map_or(false, |c| c != ']')
    }

    fn lex_range(&mut self, start: usize, lo: char) -> Result<ClassItem, MalformedPatternError> {
        let dash = self.index;
        self.bump();
        let hi_start = self.index;
        let hi = match self.bump() {
            Some('\\') => self.lex_escape(hi_start, true)?.as_char(),
            hi => hi,
        };
        match hi {
            Some(hi) if hi < lo => Err(self.error(start, MalformedReason::RangeOutOfOrder)),
            Some(hi) => Ok(ClassItem::Range(lo, hi)),
            None => {
                // Not a range after all, like [a-\d]; the dash is literal
                self.index = dash;
                Ok(ClassItem::Literal(lo))
            },
        }
    }

    /// Called on the `:` of a possible `[:name:]`.
    fn lex_posix(&mut self) -> Option<ClassItem> {
        let rest = &self.rest()[1..];
        let (negated, body) = match rest.strip_prefix('^') {
            Some(body) => (true, body),
            None => (false, rest),
        };
        let len = body.bytes().take_while(|b| b.is_ascii_alphabetic()).count();
        if len == 0 || !body[len..].starts_with(":]") {
            return None;
        }
        self.index += 1 + (negated as usize) + len + 2;
        Some(ClassItem::Posix{ negated, name: body[..len].into() })
    }

    /**
     * Group prefixes.
     */

    /// Called right after the `(` at `start`.
    fn lex_group_open(&mut self, start: usize) -> Result<Option<TokenKind>, MalformedPatternError> {
        if self.eat('*') {
            return Ok(Some(TokenKind::GroupOpen(GroupKind::Opaque)));
        }
        if !self.eat('?') {
            return Ok(Some(TokenKind::GroupOpen(GroupKind::Capturing)));
        }

        let kind = match self.peek() {
            None => return Err(self.error(start, MalformedReason::UnterminatedGroup)),

            Some('#') => {
                return match self.take_until(')') {
                    Some(_) => Ok(None),
                    None => Err(self.error(start, MalformedReason::UnterminatedGroup)),
                };
            },

            Some(':') => { self.bump(); GroupKind::NonCapturing },
            Some('|') => { self.bump(); GroupKind::BranchReset },
            Some('>') => { self.bump(); GroupKind::Atomic },
            Some('=') => { self.bump(); GroupKind::Lookahead{ negated: false } },
            Some('!') => { self.bump(); GroupKind::Lookahead{ negated: true } },

            Some('<') => match self.peek_nth(1) {
                Some('=') => { self.index += 2; GroupKind::Lookbehind{ negated: false } },
                Some('!') => { self.index += 2; GroupKind::Lookbehind{ negated: true } },
                _ => {
                    self.bump();
                    GroupKind::Named(self.lex_group_name(start, '>')?)
                },
            },
            Some('\'') => {
                self.bump();
                GroupKind::Named(self.lex_group_name(start, '\'')?)
            },
            Some('P') if self.peek_nth(1) == Some('<') => {
                self.index += 2;
                GroupKind::Named(self.lex_group_name(start, '>')?)
            },

            Some(c) if is_option_char(c) => return Ok(Some(self.lex_options())),
            Some(_) => GroupKind::Opaque,
        };
        Ok(Some(TokenKind::GroupOpen(kind)))
    }

    fn lex_group_name(&mut self, start: usize, close: char) -> Result<String, MalformedPatternError> {
        match self.take_until(close) {
            Some(name) if is_group_name(name) => Ok(name.into()),
            _ => Err(self.error(start, MalformedReason::InvalidGroupName)),
        }
    }

    /// `(?i)` sets options for the rest of the enclosing group, `(?i:...)`
    /// opens a group with them.
    fn lex_options(&mut self) -> TokenKind {
        let begin = self.index;
        while self.peek().map_or(false, is_option_char) {
            self.bump();
        }
        let flags = self.source[begin..self.index].to_string();
        if self.eat(')') {
            TokenKind::Options(flags)
        }
        else if self.eat(':') {
            TokenKind::GroupOpen(GroupKind::Options(flags))
        }
        else {
            self.index = begin;
            TokenKind::GroupOpen(GroupKind::Opaque)
        }
    }
}

impl <'a> Iterator for Lexer<'a> {
    type Item = Result<Token, MalformedPatternError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while self.index < self.source.len() {
            let start = self.index;
            match self.lex_one() {
                Ok(Some(kind)) => return Some(Ok(Token{ range: start..self.index, kind })),
                Ok(None) => {},
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                },
            }
        }
        None
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_repeat(s: &str) -> Option<u32> {
    s.parse::<u32>().ok().filter(|n| *n <= MAX_REPEAT)
}

fn is_option_char(c: char) -> bool {
    "imnsxJUX^-".contains(c)
}

fn is_group_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
