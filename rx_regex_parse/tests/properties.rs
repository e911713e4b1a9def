//! Property tests: the parser is total and deterministic.

use proptest::prelude::*;

use rx_regex_parse::{parse, Node};

fn covered_by_children(node: &Node) -> bool {
    node.children().iter().all(|c| {
        node.range.start <= c.range.start && c.range.end <= node.range.end && covered_by_children(c)
    })
}

proptest! {
    /// Any string either parses or fails with an offset inside it.
    #[test]
    fn parse_is_total(source in "\\PC{0,64}") {
        match parse(&source) {
            Ok(root) => prop_assert!(root.range.end <= source.len()),
            Err(err) => prop_assert!(err.offset <= source.len(), "offset {} past {}", err.offset, source.len()),
        }
    }

    /// Strings built mostly from metacharacters hit the interesting paths.
    #[test]
    fn parse_is_total_on_metacharacters(source in "[ab|$^.*+?(){}\\[\\]\\\\:<>=!#,0-9-]{0,40}") {
        if let Err(err) = parse(&source) {
            prop_assert!(err.offset <= source.len());
            prop_assert!(source.is_char_boundary(err.offset));
        }
    }

    #[test]
    fn parse_is_deterministic(source in "[a-c|$^.*()\\\\]{0,24}") {
        prop_assert_eq!(parse(&source), parse(&source));
    }

    #[test]
    fn children_stay_inside_parents(source in "[a-c|$.*+()\\[\\]]{0,24}") {
        if let Ok(root) = parse(&source) {
            prop_assert!(covered_by_children(&root));
        }
    }
}
