/**
 * Detects patterns that match every message.
 */

use tracing::debug;
use rx_regex_parse::{AnchorKind, Node, NodeKind};
use crate::escape::escape_metacharacters;

/// The part of a pattern that makes it match anything, and the same text
/// escaped so that it would match literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversalMatch {
    pub sequence: String,
    pub escaped: String,
}

impl UniversalMatch {
    pub fn new<S>(sequence: S) -> Self where S : Into<String> {
        let sequence = sequence.into();
        let escaped = escape_metacharacters(&sequence);
        Self{ sequence, escaped }
    }
}

/// Checks whether `root`, parsed from `source`, matches any message.
///
/// That is the case when, after dropping one leading `^`, one trailing `$`,
/// option settings and transparent groups, what remains is empty, a `.`
/// repeated without upper bound (at least zero or one times), or an
/// alternation with such a branch. A bare `^$` only matches the empty
/// message and is left alone.
pub fn find_universal_match(root: &Node, source: &str) -> Option<UniversalMatch> {
    let culprit = universal_part(root)?;
    let found = UniversalMatch::new(culprit.text(source));
    debug!(sequence = %found.sequence, "pattern matches every message");
    Some(found)
}

fn universal_part(node: &Node) -> Option<&Node> {
    let items: Vec<&Node> = node.items().iter()
        .filter(|n| match n.kind { NodeKind::Options(_) => false, _ => true })
        .collect();

    let mut core = items.as_slice();
    let anchored_start = core.first().map_or(false, |n| n.is_anchor(AnchorKind::Start));
    if anchored_start {
        core = &core[1..];
    }
    let anchored_end = core.last().map_or(false, |n| n.is_anchor(AnchorKind::End));
    if anchored_end {
        core = &core[..core.len() - 1];
    }

    match core {
        [] if anchored_start && anchored_end => None,
        [] => Some(node),
        [single] => universal_node(*single),
        _ => None,
    }
}

fn universal_node(node: &Node) -> Option<&Node> {
    // An empty culprit has no text to show; the enclosing node is shown instead
    let is_empty = |inner: &Node| inner.range.start == inner.range.end;

    match &node.kind {
        NodeKind::Quantified{ subnode, quantifier } => {
            if subnode.kind == NodeKind::Any && quantifier.min() <= 1 && quantifier.is_unbounded() {
                Some(node)
            }
            else {
                None
            }
        },

        NodeKind::Group{ kind, subnode } if kind.is_transparent() => {
            universal_part(subnode).map(|inner| if is_empty(inner) { node } else { inner })
        },

        NodeKind::Alternation(branches) => {
            branches.iter()
                .find_map(universal_part)
                .map(|inner| if is_empty(inner) { node } else { inner })
        },

        _ => None,
    }
}
