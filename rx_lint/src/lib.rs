/**
 * Lints the regex patterns used to suppress errors of a static analyzer.
 *
 * Three mistakes are looked for: a top-level `|` that turns a union type into
 * an alternation of type names, a `$` in the middle of the pattern, and
 * patterns that match every message.
 */

extern crate rx_regex_parse;
extern crate thiserror;
extern crate tracing;

mod anchor;
mod branch;
mod delimiter;
mod error;
mod escape;
mod ignored_types;
mod resolver;
mod result;
mod universal;
mod validator;

pub use anchor::find_anchor_in_middle;
pub use branch::{literal_text, top_level_branches, AlternationBranch};
pub use delimiter::{split_delimited, Delimited, DelimiterError};
pub use error::LintError;
pub use escape::{escape_metacharacters, is_regex_significant};
pub use ignored_types::{find_ignored_types, IgnoredType};
pub use resolver::{
    BuiltinTypes, ChainResolver, KnownTypes, NullResolver, TypeDescription, TypeKind,
    TypeResolver,
};
pub use result::{Finding, ValidationResult};
pub use universal::{find_universal_match, UniversalMatch};
pub use validator::{analyze, Validator};

pub use rx_regex_parse::{MalformedPatternError, MalformedReason};
