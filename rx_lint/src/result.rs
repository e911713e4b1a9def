/**
 * The findings for one pattern.
 */

use crate::ignored_types::IgnoredType;
use crate::resolver::TypeDescription;
use crate::universal::UniversalMatch;

/// One authoring mistake found in a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Top-level alternation branches that name types.
    IgnoredTypesFound(Vec<IgnoredType>),
    /// A `$` that isn't at the end, at `offset`.
    AnchorInMiddle{ offset: usize },
    UniversalMatch(UniversalMatch),
}

/// Everything found in one pattern. Findings always come in the order
/// ignored types, anchor in the middle, universal match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    findings: Vec<Finding>,
}

impl ValidationResult {
    pub fn new(
        ignored_types: Vec<IgnoredType>,
        anchor_in_middle: Option<usize>,
        universal_match: Option<UniversalMatch>) -> Self {

        let mut findings = Vec::new();
        if !ignored_types.is_empty() {
            findings.push(Finding::IgnoredTypesFound(ignored_types));
        }
        if let Some(offset) = anchor_in_middle {
            findings.push(Finding::AnchorInMiddle{ offset });
        }
        if let Some(universal_match) = universal_match {
            findings.push(Finding::UniversalMatch(universal_match));
        }
        Self{ findings }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn has_ignored_types(&self) -> bool {
        !self.ignored_types().is_empty()
    }

    pub fn ignored_types(&self) -> &[IgnoredType] {
        self.findings.iter().find_map(|f| match f {
            Finding::IgnoredTypesFound(types) => Some(types.as_slice()),
            _ => None,
        }).unwrap_or(&[])
    }

    /// The type a branch with the literal text `literal` resolved to.
    pub fn ignored_type(&self, literal: &str) -> Option<&TypeDescription> {
        self.ignored_types().iter()
            .find(|t| t.literal == literal)
            .map(|t| &t.description)
    }

    pub fn has_anchor_in_middle(&self) -> bool {
        self.anchor_in_middle().is_some()
    }

    pub fn anchor_in_middle(&self) -> Option<usize> {
        self.findings.iter().find_map(|f| match f {
            Finding::AnchorInMiddle{ offset } => Some(*offset),
            _ => None,
        })
    }

    pub fn is_universal_match(&self) -> bool {
        self.universal_match().is_some()
    }

    pub fn universal_match(&self) -> Option<&UniversalMatch> {
        self.findings.iter().find_map(|f| match f {
            Finding::UniversalMatch(m) => Some(m),
            _ => None,
        })
    }

    /// The sequence that makes the pattern match everything.
    pub fn wrong_sequence(&self) -> Option<&str> {
        self.universal_match().map(|m| m.sequence.as_str())
    }

    pub fn escaped_wrong_sequence(&self) -> Option<&str> {
        self.universal_match().map(|m| m.escaped.as_str())
    }
}

#[cfg(test)]
mod result_tests {
    use super::*;

    fn int() -> IgnoredType {
        IgnoredType{ literal: "int".into(), description: TypeDescription::builtin("int") }
    }

    #[test]
    fn clean_result() {
        let result = ValidationResult::new(Vec::new(), None, None);
        assert!(result.is_clean());
        assert!(!result.has_ignored_types());
        assert!(!result.has_anchor_in_middle());
        assert!(!result.is_universal_match());
        assert_eq!(result.wrong_sequence(), None);
    }

    #[test]
    fn findings_are_ordered() {
        let result = ValidationResult::new(vec![int()], Some(3), Some(UniversalMatch::new(".*")));
        assert_eq!(result.findings(), &[
            Finding::IgnoredTypesFound(vec![int()]),
            Finding::AnchorInMiddle{ offset: 3 },
            Finding::UniversalMatch(UniversalMatch::new(".*")),
        ]);
    }

    #[test]
    fn accessors() {
        let result = ValidationResult::new(vec![int()], None, Some(UniversalMatch::new(".+")));
        assert_eq!(result.ignored_type("int"), Some(&TypeDescription::builtin("int")));
        assert_eq!(result.ignored_type("string"), None);
        assert_eq!(result.wrong_sequence(), Some(".+"));
        assert_eq!(result.escaped_wrong_sequence(), Some(r"\.\+"));
        assert_eq!(result.anchor_in_middle(), None);
    }
}
