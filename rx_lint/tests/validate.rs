
mod common;

use std::sync::Arc;
use std::thread;

use rx_lint::{
    BuiltinTypes, ChainResolver, Finding, KnownTypes, MalformedPatternError, MalformedReason,
    TypeDescription, TypeKind, UniversalMatch, Validator,
};
use rx_regex_parse::parse;
use common::{foo_bar_validator, literals};

#[test]
fn validation_is_idempotent() {
    let validator = foo_bar_validator();
    for pattern in &["Foo|Bar", "foo$bar", ".*", "^Call to method Foo::bar\\(\\)\\.$"] {
        assert_eq!(validator.validate(pattern), validator.validate(pattern));
    }
}

#[test]
fn alternation_is_flattened() {
    let root = parse("a|b|c").unwrap();
    assert_eq!(root.branches().map(|b| b.len()), Some(3));
}

#[test]
fn grouped_alternation_is_not_inspected() {
    let validator = foo_bar_validator();
    assert!(validator.validate("(Foo|Bar)x").unwrap().is_clean());
    assert!(!validator.validate("Foo|Bar").unwrap().is_clean());
}

#[test]
fn anchor_in_middle() {
    let validator = Validator::new();
    assert_eq!(validator.validate("foo$bar").unwrap().anchor_in_middle(), Some(3));
    assert!(!validator.validate("foo$").unwrap().has_anchor_in_middle());
    assert!(!validator.validate(r"foo\$bar").unwrap().has_anchor_in_middle());
}

#[test]
fn ignored_types() {
    let validator = foo_bar_validator();

    let result = validator.validate("Foo|Bar").unwrap();
    assert_eq!(literals(result.ignored_types()), vec!["Foo", "Bar"]);
    assert_eq!(result.ignored_type("Bar"), Some(&TypeDescription::new("Bar", TypeKind::Class)));

    let result = validator.validate("Foo|qux").unwrap();
    assert_eq!(literals(result.ignored_types()), vec!["Foo"]);
}

#[test]
fn escaped_bar_is_not_an_alternation() {
    let validator = foo_bar_validator();
    assert!(validator.validate(r"Foo\|Bar").unwrap().is_clean());
}

#[test]
fn universal_match() {
    let result = Validator::new().validate(".*").unwrap();
    assert_eq!(result.wrong_sequence(), Some(".*"));
    assert_eq!(result.escaped_wrong_sequence(), Some(r"\.\*"));
    assert!(!Validator::new().validate("foo.*bar").unwrap().is_universal_match());
}

#[test]
fn findings_come_in_order() {
    let validator = Validator::with_resolver(BuiltinTypes);
    let result = validator.validate("int|foo$bar|.*").unwrap();
    assert_eq!(result.findings(), &[
        Finding::IgnoredTypesFound(vec![rx_lint::IgnoredType{
            literal: "int".into(),
            description: TypeDescription::builtin("int"),
        }]),
        Finding::AnchorInMiddle{ offset: 7 },
        Finding::UniversalMatch(UniversalMatch::new(".*")),
    ]);
}

#[test]
fn realistic_patterns_are_clean() {
    let validator = Validator::with_resolver(ChainResolver::new()
        .with(KnownTypes::new().with("Foo", TypeKind::Class))
        .with(BuiltinTypes));
    for pattern in &[
        r"^Call to an undefined method Foo::bar\(\)\.$",
        r"^Parameter \#1 \$x of function foo expects int\|string, float given\.$",
        r"^Access to an undefined property [a-zA-Z0-9\\_]+::\$foo\.$",
        r"^Method Foo::(get|set)Bar\(\) has no return type specified\.$",
    ] {
        let result = validator.validate(pattern).unwrap();
        assert!(result.is_clean(), "{} gave {:?}", pattern, result.findings());
    }
}

#[test]
fn malformed_patterns() {
    let validator = Validator::new();
    assert_eq!(
        validator.validate("(abc"),
        Err(MalformedPatternError::new(0, MalformedReason::UnterminatedGroup)));
    assert_eq!(
        validator.validate("abc)"),
        Err(MalformedPatternError::new(3, MalformedReason::UnmatchedClose)));
}

#[test]
fn validator_is_shared_between_threads() {
    let validator = Arc::new(foo_bar_validator());
    let handles: Vec<_> = ["Foo|Bar", "foo$bar", ".*", "Foo\\|Bar"].iter()
        .map(|pattern| {
            let validator = Arc::clone(&validator);
            let pattern = pattern.to_string();
            thread::spawn(move || validator.validate(&pattern).unwrap())
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(results[0].has_ignored_types());
    assert!(results[1].has_anchor_in_middle());
    assert!(results[2].is_universal_match());
    assert!(results[3].is_clean());
}
