/**
 * Finds `$` anchors that are not at the end of the pattern.
 *
 * Ignore patterns match single-line messages, so an end anchor anywhere but
 * the very end is almost always a dollar sign that should have been escaped.
 */

use rx_regex_parse::{AnchorKind, Node, NodeKind};

/// The offset of the first misplaced `$`, if any.
pub fn find_anchor_in_middle(root: &Node) -> Option<usize> {
    find_in(root, true)
}

/// `terminal` tells whether nothing but closing parentheses, quantifiers and
/// option settings can follow `node` in the pattern.
fn find_in(node: &Node, terminal: bool) -> Option<usize> {
    match &node.kind {
        NodeKind::Anchor(AnchorKind::End) if !terminal => Some(node.range.start),

        NodeKind::Sequence(nodes) => {
            // Option settings match nothing, so the items before them may end the pattern
            let last = nodes.iter().rposition(|n| !is_option_setting(n)).unwrap_or(0);
            nodes.iter().enumerate().find_map(|(i, n)| find_in(n, terminal && i >= last))
        },

        NodeKind::Alternation(branches) => {
            let last = branches.len().saturating_sub(1);
            branches.iter().enumerate().find_map(|(i, n)| find_in(n, terminal && i == last))
        },

          NodeKind::Group{ subnode, .. }
        | NodeKind::Quantified{ subnode, .. } => find_in(subnode, terminal),

        _ => None,
    }
}

fn is_option_setting(node: &Node) -> bool {
    match node.kind {
        NodeKind::Options(_) => true,
        _ => false,
    }
}

#[cfg(test)]
mod anchor_tests {
    use super::*;
    use rx_regex_parse::parse;

    fn find(source: &str) -> Option<usize> {
        find_anchor_in_middle(&parse(source).unwrap())
    }

    #[test]
    fn anchor_at_the_end() {
        assert_eq!(find(r"foo$"), None);
        assert_eq!(find(r"^foo$"), None);
    }

    #[test]
    fn anchor_in_the_middle() {
        assert_eq!(find(r"foo$bar"), Some(3));
    }

    #[test]
    fn escaped_dollar() {
        assert_eq!(find(r"\$foo \$bar"), None);
        assert_eq!(find(r"[$]foo"), None);
    }

    #[test]
    fn closing_groups_may_follow() {
        assert_eq!(find(r"(foo(bar$))"), None);
        assert_eq!(find(r"(foo$)bar"), Some(4));
    }

    #[test]
    fn quantified_anchor_keeps_its_position() {
        assert_eq!(find(r"foo$?"), None);
        assert_eq!(find(r"a$*b"), Some(1));
    }

    #[test]
    fn end_of_an_earlier_branch() {
        assert_eq!(find(r"foo$|bar"), Some(3));
        assert_eq!(find(r"foo|bar$"), None);
    }

    #[test]
    fn option_settings_may_follow() {
        assert_eq!(find(r"foo$(?i)"), None);
        assert_eq!(find(r"(foo$(?i)(?-m))"), None);
        assert_eq!(find(r"foo$(?i)bar"), Some(3));
    }

    #[test]
    fn start_anchors_are_not_checked() {
        assert_eq!(find(r"foo^bar"), None);
    }
}
