/**
 * The structured failure of tokenizing or parsing a pattern.
 */

/// Describes why a pattern does not parse, and where.
///
/// `offset` is a byte offset into the pattern and is never past its end.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason} at offset {offset}")]
pub struct MalformedPatternError {
    pub offset: usize,
    pub reason: MalformedReason,
}

impl MalformedPatternError {
    pub fn new(offset: usize, reason: MalformedReason) -> Self {
        Self{ offset, reason }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("unterminated character class")]
    UnterminatedClass,

    #[error("unterminated group")]
    UnterminatedGroup,

    #[error("unmatched closing parenthesis")]
    UnmatchedClose,

    #[error("dangling escape at end of pattern")]
    DanglingEscape,

    #[error("invalid escape sequence")]
    InvalidEscape,

    #[error("invalid group name")]
    InvalidGroupName,

    #[error("invalid quantifier bound: minimum exceeds maximum")]
    QuantifierOutOfOrder,

    #[error("invalid quantifier bound: larger than {max}", max = crate::lexer::MAX_REPEAT)]
    QuantifierTooLarge,

    #[error("quantifier does not follow a repeatable item")]
    NothingToRepeat,

    #[error("character class range is out of order")]
    RangeOutOfOrder,

    #[error("groups are nested deeper than {0} levels")]
    NestingTooDeep(usize),
}
