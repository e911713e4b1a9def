/**
 * Type resolution: deciding whether a piece of literal text names a type
 * known to the host tool.
 */

use std::collections::HashMap;
use std::fmt;
use std::iter::FromIterator;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Keyword types like `int` or `mixed`.
    Builtin,
    Class,
    Interface,
    Enum,
    Trait,
    Alias,
}

/// What a resolver knows about a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescription {
    pub name: String,
    pub kind: TypeKind,
}

impl TypeDescription {
    pub fn new<S>(name: S, kind: TypeKind) -> Self where S : Into<String> {
        Self{ name: name.into(), kind }
    }

    pub fn builtin<S>(name: S) -> Self where S : Into<String> {
        Self::new(name, TypeKind::Builtin)
    }
}

impl fmt::Display for TypeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TypeKind::Builtin => write!(f, "{}", self.name),
            TypeKind::Class => write!(f, "class {}", self.name),
            TypeKind::Interface => write!(f, "interface {}", self.name),
            TypeKind::Enum => write!(f, "enum {}", self.name),
            TypeKind::Trait => write!(f, "trait {}", self.name),
            TypeKind::Alias => write!(f, "type alias {}", self.name),
        }
    }
}

/**
 * The resolver interface.
 */

/// Looks names up in some type universe.
///
/// Implementations must be side-effect free and must answer `None` for
/// anything they can't vouch for, including strings that aren't valid
/// identifiers at all. They may be called from several threads at once.
pub trait TypeResolver : Send + Sync {
    fn resolve(&self, name: &str) -> Option<TypeDescription>;
}

impl <'a, R> TypeResolver for &'a R where R : TypeResolver + ?Sized {
    fn resolve(&self, name: &str) -> Option<TypeDescription> {
        (**self).resolve(name)
    }
}

impl <R> TypeResolver for Box<R> where R : TypeResolver + ?Sized {
    fn resolve(&self, name: &str) -> Option<TypeDescription> {
        (**self).resolve(name)
    }
}

impl <R> TypeResolver for Arc<R> where R : TypeResolver + ?Sized {
    fn resolve(&self, name: &str) -> Option<TypeDescription> {
        (**self).resolve(name)
    }
}

/// Knows no types at all. Useful where no type universe is available yet;
/// the alternation check then never reports anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullResolver;

impl TypeResolver for NullResolver {
    fn resolve(&self, _name: &str) -> Option<TypeDescription> {
        None
    }
}

/**
 * A fixed table of names.
 */

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownTypes {
    types: HashMap<String, TypeDescription>,
}

impl KnownTypes {
    pub fn new() -> Self {
        Self{ types: HashMap::new() }
    }

    pub fn insert(&mut self, description: TypeDescription) {
        self.types.insert(description.name.clone(), description);
    }

    pub fn with<S>(mut self, name: S, kind: TypeKind) -> Self where S : Into<String> {
        self.insert(TypeDescription::new(name, kind));
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<TypeDescription> for KnownTypes {
    fn from_iter<I>(iter: I) -> Self where I : IntoIterator<Item = TypeDescription> {
        let mut result = Self::new();
        for description in iter {
            result.insert(description);
        }
        result
    }
}

impl TypeResolver for KnownTypes {
    fn resolve(&self, name: &str) -> Option<TypeDescription> {
        self.types.get(name).cloned()
    }
}

/**
 * The keyword types of the host tool's type language.
 */

const BUILTIN_TYPES: &[&str] = &[
    "array", "array-key", "bool", "boolean", "callable", "callable-string", "class-string",
    "double", "false", "float", "int", "integer", "iterable", "list", "mixed", "negative-int",
    "never", "non-empty-array", "non-empty-list", "non-empty-string", "null", "numeric",
    "numeric-string", "object", "positive-int", "resource", "scalar", "self", "static",
    "string", "true", "void",
];

/// Resolves the builtin keyword types. Matching is exact, so `Int` is not a
/// type while `int` is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinTypes;

impl TypeResolver for BuiltinTypes {
    fn resolve(&self, name: &str) -> Option<TypeDescription> {
        if BUILTIN_TYPES.contains(&name) {
            Some(TypeDescription::builtin(name))
        }
        else {
            None
        }
    }
}

/**
 * Asking several resolvers in turn.
 */

/// The first resolver that knows a name wins.
#[derive(Default)]
pub struct ChainResolver {
    resolvers: Vec<Box<dyn TypeResolver>>,
}

impl ChainResolver {
    pub fn new() -> Self {
        Self{ resolvers: Vec::new() }
    }

    pub fn push<R>(&mut self, resolver: R) where R : TypeResolver + 'static {
        self.resolvers.push(Box::new(resolver));
    }

    pub fn with<R>(mut self, resolver: R) -> Self where R : TypeResolver + 'static {
        self.push(resolver);
        self
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl TypeResolver for ChainResolver {
    fn resolve(&self, name: &str) -> Option<TypeDescription> {
        self.resolvers.iter().find_map(|r| r.resolve(name))
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod resolver_tests {
    use super::*;

    #[test]
    fn null_resolver_knows_nothing() {
        assert_eq!(NullResolver.resolve("int"), None);
    }

    #[test]
    fn builtin_types_are_exact() {
        assert_eq!(BuiltinTypes.resolve("int"), Some(TypeDescription::builtin("int")));
        assert_eq!(BuiltinTypes.resolve("Int"), None);
        assert_eq!(BuiltinTypes.resolve("int "), None);
    }

    #[test]
    fn known_types_survive_garbage() {
        let types = KnownTypes::new().with("Foo", TypeKind::Class);
        assert_eq!(types.resolve("Foo"), Some(TypeDescription::new("Foo", TypeKind::Class)));
        assert_eq!(types.resolve(""), None);
        assert_eq!(types.resolve("\u{0}::<>"), None);
    }

    #[test]
    fn chain_prefers_earlier_resolvers() {
        let chain = ChainResolver::new()
            .with(KnownTypes::new().with("string", TypeKind::Class))
            .with(BuiltinTypes);
        assert_eq!(chain.resolve("string").map(|t| t.kind), Some(TypeKind::Class));
        assert_eq!(chain.resolve("int").map(|t| t.kind), Some(TypeKind::Builtin));
        assert_eq!(chain.resolve("qux"), None);
    }

    #[test]
    fn display() {
        assert_eq!(TypeDescription::builtin("int").to_string(), "int");
        assert_eq!(TypeDescription::new("Foo", TypeKind::Interface).to_string(), "interface Foo");
    }
}
