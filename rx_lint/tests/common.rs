
use rx_lint::{KnownTypes, TypeKind, Validator};

/// A validator that knows the classes `Foo` and `Bar`.
pub fn foo_bar_validator() -> Validator<KnownTypes> {
    Validator::with_resolver(KnownTypes::new()
        .with("Foo", TypeKind::Class)
        .with("Bar", TypeKind::Class))
}

pub fn literals(types: &[rx_lint::IgnoredType]) -> Vec<&str> {
    types.iter().map(|t| t.literal.as_str()).collect()
}
