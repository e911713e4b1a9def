/**
 * The entry point: parse a pattern and run every check on it.
 */

use tracing::debug;
use rx_regex_parse::{parse, MalformedPatternError, Node};
use crate::anchor::find_anchor_in_middle;
use crate::delimiter::split_delimited;
use crate::error::LintError;
use crate::ignored_types::find_ignored_types;
use crate::resolver::{NullResolver, TypeResolver};
use crate::result::ValidationResult;
use crate::universal::find_universal_match;

/// Validates ignore patterns against a type universe. Holds no state besides
/// the resolver, so one validator can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Validator<R = NullResolver> {
    resolver: R,
}

impl Validator<NullResolver> {
    pub fn new() -> Self {
        Self{ resolver: NullResolver }
    }
}

impl <R> Validator<R> where R : TypeResolver {
    pub fn with_resolver(resolver: R) -> Self {
        Self{ resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Validates a bare pattern, without delimiters.
    pub fn validate(&self, pattern: &str) -> Result<ValidationResult, MalformedPatternError> {
        let root = parse(pattern)?;
        let result = analyze(&root, pattern, &self.resolver);
        debug!(pattern = %pattern, findings = result.findings().len(), "validated pattern");
        Ok(result)
    }

    /// Validates a delimited pattern like `#^Foo$#i`.
    pub fn validate_delimited(&self, raw: &str) -> Result<ValidationResult, LintError> {
        let delimited = split_delimited(raw)?;
        debug!(delimiter = %delimited.delimiter, flags = delimited.flags, "stripped delimiters");
        Ok(self.validate(delimited.body)?)
    }
}

/// Runs the checks on an already parsed pattern.
pub fn analyze<R>(root: &Node, source: &str, resolver: &R) -> ValidationResult where R : TypeResolver + ?Sized {
    ValidationResult::new(
        find_ignored_types(root, resolver),
        find_anchor_in_middle(root),
        find_universal_match(root, source))
}
