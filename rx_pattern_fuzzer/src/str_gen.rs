/**
 * Strategies for the text that edits put into a pattern.
 */

use std::ops::Range;
use crate::rnd::*;

pub trait StringGenStrategy {
    fn generate(&self) -> String;
}

/// Random characters from a charset.
pub struct RandomStringGenerator {
    len: Range<usize>,
    charset: Vec<char>,
}

impl RandomStringGenerator {
    pub fn with_len_and_charset(len: Range<usize>, charset: &str) -> Self {
        Self{ len, charset: charset.chars().collect() }
    }
}

impl StringGenStrategy for RandomStringGenerator {
    fn generate(&self) -> String {
        rand_string(&self.len, &self.charset)
    }
}

/// Whole syntax fragments, so that edits open groups, start escapes and
/// write quantifiers more often than single characters would.
pub struct FragmentGenerator {
    fragments: Vec<&'static str>,
}

impl FragmentGenerator {
    pub fn regex_syntax() -> Self {
        Self{ fragments: vec![
            "|", "\\|", "$", "\\$", "^", ".", ".*", ".+?", "*", "+", "?", "{2,3}", "{,4}", "{99999}",
            "(", ")", "(?:", "(?i)", "(?i:", "(?<name>", "(?P<n>", "(?=", "(?<!", "(?>", "(?|",
            "(?#note)", "(*UTF8)", "(?R)", "[", "]", "[^a-z]", "[[:alpha:]]", "[\\d-z]", "\\",
            "\\Q", "\\E", "\\x{41}", "\\x{zz}", "\\p{L}", "\\PL", "\\k<name>", "\\g{-1}", "\\1",
            "\\cA", "\\o{17}", "\\0", "int", "Foo", "é", "::",
        ] }
    }
}

impl StringGenStrategy for FragmentGenerator {
    fn generate(&self) -> String {
        sample(&self.fragments).to_string()
    }
}
