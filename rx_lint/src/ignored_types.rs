/**
 * Finds top-level alternation branches that name types.
 *
 * An unescaped `|` in an ignore pattern is usually meant to be a literal bar,
 * like in the union `int|string`. As an alternation it instead ignores every
 * message mentioning `int` and every message mentioning `string`.
 */

use tracing::debug;
use rx_regex_parse::Node;
use crate::branch::top_level_branches;
use crate::resolver::{TypeDescription, TypeResolver};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredType {
    /// The branch text, with escapes undone.
    pub literal: String,
    pub description: TypeDescription,
}

/// Resolved branches in pattern order, each literal at most once.
pub fn find_ignored_types<R>(root: &Node, resolver: &R) -> Vec<IgnoredType> where R : TypeResolver + ?Sized {
    let mut found: Vec<IgnoredType> = Vec::new();
    for branch in top_level_branches(root) {
        let literal = match branch.literal {
            Some(literal) => literal,
            None => continue,
        };
        if found.iter().any(|t| t.literal == literal) {
            continue;
        }
        if let Some(description) = resolver.resolve(&literal) {
            debug!(literal = %literal, description = %description, "alternation branch names a type");
            found.push(IgnoredType{ literal, description });
        }
    }
    found
}

#[cfg(test)]
mod ignored_types_tests {
    use super::*;
    use rx_regex_parse::parse;
    use crate::resolver::{BuiltinTypes, KnownTypes, TypeKind};

    fn names<R>(source: &str, resolver: &R) -> Vec<String> where R : TypeResolver {
        let root = parse(source).unwrap();
        find_ignored_types(&root, resolver).into_iter().map(|t| t.literal).collect()
    }

    #[test]
    fn union_of_builtins() {
        assert_eq!(names("int|string", &BuiltinTypes), vec!["int", "string"]);
    }

    #[test]
    fn only_resolved_branches() {
        let types = KnownTypes::new().with("Foo", TypeKind::Class);
        assert_eq!(names("Foo|qux", &types), vec!["Foo"]);
    }

    #[test]
    fn duplicates_are_reported_once() {
        assert_eq!(names("int|int|null", &BuiltinTypes), vec!["int", "null"]);
    }

    #[test]
    fn escaped_bar_is_not_an_alternation() {
        assert!(names(r"int\|string", &BuiltinTypes).is_empty());
    }

    #[test]
    fn grouped_alternation_is_intentional() {
        assert!(names(r"(int|string) given", &BuiltinTypes).is_empty());
    }
}
