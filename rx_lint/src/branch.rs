/**
 * Views over the branches of the top-level alternation.
 */

use rx_regex_parse::Node;
use crate::escape::is_regex_significant;

/// One alternative of the top-level alternation, with its text when the
/// alternative is a plain literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternationBranch<'a> {
    pub node: &'a Node,
    pub literal: Option<String>,
}

/// The branches of the root alternation. Alternations inside groups are
/// deliberate and never show up here.
pub fn top_level_branches(root: &Node) -> Vec<AlternationBranch<'_>> {
    match root.branches() {
        Some(branches) if branches.len() > 1 => branches.iter()
            .map(|node| AlternationBranch{ node, literal: literal_text(node) })
            .collect(),
        _ => Vec::new(),
    }
}

/// The un-escaped text of a node that matches exactly one string.
///
/// A node qualifies when it is made only of characters and escapes that
/// stand for a single character, and the un-escaped text contains no
/// character a regex would treat specially. `Foo` qualifies, `Foo\.Bar`
/// and `Fo+` do not.
pub fn literal_text(node: &Node) -> Option<String> {
    let items = node.items();
    if items.is_empty() {
        return None;
    }
    let text = items.iter().map(Node::as_char).collect::<Option<String>>()?;
    if text.chars().any(is_regex_significant) {
        None
    }
    else {
        Some(text)
    }
}
