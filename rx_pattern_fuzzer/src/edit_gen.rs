/**
 * Edit strategies that mutate a pattern.
 */

use std::ops::Range;
use crate::rnd::*;
use crate::str_gen::*;

/// Replace the bytes in `range` with `text`. Both ends of `range` are char
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range<usize>,
    pub text: String,
}

impl Edit {
    pub fn apply(&self, src: &str) -> String {
        let mut result = String::with_capacity(src.len() + self.text.len());
        result.push_str(&src[..self.range.start]);
        result.push_str(&self.text);
        result.push_str(&src[self.range.end..]);
        result
    }
}

pub trait EditStrategy {
    fn make_edit(&self, src: &str) -> Edit;
}

/// Appends generated text.
pub struct AppendEdit {
    gen: Box<dyn StringGenStrategy>,
}

impl AppendEdit {
    pub fn with_gen<G>(g: G) -> Self where G : StringGenStrategy + 'static {
        Self{ gen: Box::new(g) }
    }
}

impl EditStrategy for AppendEdit {
    fn make_edit(&self, src: &str) -> Edit {
        Edit{ range: src.len()..src.len(), text: self.gen.generate() }
    }
}

/// Inserts generated text at a random position.
pub struct InsertEdit {
    gen: Box<dyn StringGenStrategy>,
}

impl InsertEdit {
    pub fn with_gen<G>(g: G) -> Self where G : StringGenStrategy + 'static {
        Self{ gen: Box::new(g) }
    }
}

impl EditStrategy for InsertEdit {
    fn make_edit(&self, src: &str) -> Edit {
        let offset = rand_boundary(src, 0..src.len());
        Edit{ range: offset..offset, text: self.gen.generate() }
    }
}

/// Erases a random range.
pub struct EraseEdit;

impl EditStrategy for EraseEdit {
    fn make_edit(&self, src: &str) -> Edit {
        let min = rand_boundary(src, 0..src.len());
        let max = rand_boundary(src, min..src.len());
        Edit{ range: min..max, text: String::new() }
    }
}

/// Replaces a random range with generated text.
pub struct SpliceEdit {
    gen: Box<dyn StringGenStrategy>,
}

impl SpliceEdit {
    pub fn with_gen<G>(g: G) -> Self where G : StringGenStrategy + 'static {
        Self{ gen: Box::new(g) }
    }
}

impl EditStrategy for SpliceEdit {
    fn make_edit(&self, src: &str) -> Edit {
        let min = rand_boundary(src, 0..src.len());
        let max = rand_boundary(src, min..src.len());
        Edit{ range: min..max, text: self.gen.generate() }
    }
}

/// Picks one of its strategies for every edit.
pub struct RandomEdit {
    strats: Vec<Box<dyn EditStrategy>>,
}

impl RandomEdit {
    pub fn new() -> Self {
        Self{ strats: Vec::new() }
    }

    pub fn add<G>(&mut self, g: G) where G : EditStrategy + 'static {
        self.strats.push(Box::new(g));
    }
}

impl EditStrategy for RandomEdit {
    fn make_edit(&self, src: &str) -> Edit {
        sample(&self.strats).make_edit(src)
    }
}
