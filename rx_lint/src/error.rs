/**
 * Errors of validating a configured, delimited pattern.
 */

use rx_regex_parse::MalformedPatternError;
use crate::delimiter::DelimiterError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LintError {
    #[error(transparent)]
    Delimiter(#[from] DelimiterError),

    /// The body between the delimiters doesn't parse. The offset is relative
    /// to the body.
    #[error(transparent)]
    Malformed(#[from] MalformedPatternError),
}
