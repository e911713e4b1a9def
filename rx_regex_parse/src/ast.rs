/**
 * All of the regex syntax-tree (AST) data-structures.
 */

use std::ops::Range;
use crate::token::{AnchorKind, CharClass, Escape, GroupKind, Quantifier};

/// A node of the syntax tree, covering `range` bytes of the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub range: Range<usize>,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Matches the empty string, like an empty alternation branch.
    Empty,

    Literal(char),

    Escape(Escape),

    /// The `.` metacharacter.
    Any,

    Class(CharClass),

    Group{
        kind: GroupKind,
        subnode: Box<Node>,
    },

    /// Two or more nodes, one after the other.
    Sequence(Vec<Node>),

    /// Two or more branches, in the order they appear in the pattern.
    Alternation(Vec<Node>),

    Anchor(AnchorKind),

    /// `(?i)` and the like; zero-width.
    Options(String),

    Quantified{
        subnode: Box<Node>,
        quantifier: Quantifier,
    },
}

impl Node {
    pub fn new(range: Range<usize>, kind: NodeKind) -> Self {
        Self{ range, kind }
    }

    pub fn empty_at(offset: usize) -> Self {
        Self::new(offset..offset, NodeKind::Empty)
    }

    /// The part of `source` this node was parsed from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range.clone()]
    }

    /// The single character this node stands for, if it stands for one.
    pub fn as_char(&self) -> Option<char> {
        match &self.kind {
            NodeKind::Literal(c) => Some(*c),
            NodeKind::Escape(e) => e.as_char(),
            _ => None,
        }
    }

    pub fn is_anchor(&self, kind: AnchorKind) -> bool {
        self.kind == NodeKind::Anchor(kind)
    }

    /// The alternation branches, when this node is an alternation.
    pub fn branches(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Alternation(branches) => Some(branches),
            _ => None,
        }
    }

    /// The nodes this one is a concatenation of. A non-sequence node is a
    /// sequence of itself, an empty node is a sequence of nothing.
    pub fn items(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Sequence(items) => items,
            NodeKind::Empty => &[],
            _ => std::slice::from_ref(self),
        }
    }

    /// The direct children of this node, left to right.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Sequence(nodes) | NodeKind::Alternation(nodes) => nodes,
              NodeKind::Group{ subnode, .. }
            | NodeKind::Quantified{ subnode, .. } => std::slice::from_ref(subnode.as_ref()),
            _ => &[],
        }
    }
}
