//! Property tests for the checks.

use proptest::prelude::*;

use rx_lint::{escape_metacharacters, BuiltinTypes, Validator};

proptest! {
    #[test]
    fn validation_is_idempotent(pattern in "[a-z|$^.*+?()\\\\]{0,32}") {
        let validator = Validator::with_resolver(BuiltinTypes);
        prop_assert_eq!(validator.validate(&pattern), validator.validate(&pattern));
    }

    /// Escaped text is a literal: it parses, and neither its bars nor its
    /// dollars are reported.
    #[test]
    fn escaped_text_is_never_reported(text in "[a-z0-9 $|.()*+?^\\[\\]{}\\\\-]{1,32}") {
        let pattern = escape_metacharacters(&text);
        let result = Validator::with_resolver(BuiltinTypes).validate(&pattern);
        prop_assert!(result.is_ok(), "{} failed: {:?}", pattern, result);
        if let Ok(result) = result {
            prop_assert!(!result.has_ignored_types());
            prop_assert!(!result.has_anchor_in_middle());
            prop_assert!(!result.is_universal_match());
        }
    }

    #[test]
    fn union_of_builtins_is_reported(
        types in proptest::collection::vec(
            prop_oneof![Just("int"), Just("string"), Just("float"), Just("bool")], 2..5)) {

        let pattern = types.join("|");
        let result = Validator::with_resolver(BuiltinTypes).validate(&pattern).unwrap();
        prop_assert!(result.has_ignored_types());
        prop_assert!(!result.is_universal_match());
    }
}
