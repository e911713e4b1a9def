/**
 * Validating every configured ignore pattern at once.
 */

use tracing::{debug, info};
use rx_lint::{
    BuiltinTypes, ChainResolver, KnownTypes, TypeDescription, TypeKind, TypeResolver, Validator,
};
use crate::config::{Config, ValidationConfig};
use crate::report::{error_message, findings_messages};

/// Every problem found in the configured patterns, one message each.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} problem(s) found in ignored error patterns", errors.len())]
pub struct InvalidIgnoredPatterns {
    pub errors: Vec<String>,
}

/// The resolver described by the configuration, with `extra_types` added as
/// classes.
pub fn build_resolver(config: &ValidationConfig, extra_types: &[String]) -> ChainResolver {
    let known: KnownTypes = config.known_types.iter()
        .chain(extra_types)
        .map(|name| TypeDescription::new(name.as_str(), TypeKind::Class))
        .collect();

    let mut resolver = ChainResolver::new();
    if !known.is_empty() {
        resolver.push(known);
    }
    if config.builtin_types {
        resolver.push(BuiltinTypes);
    }
    resolver
}

/// The patterns to validate, in configuration order. Baseline entries are
/// left out.
pub fn collect_patterns(config: &Config) -> Vec<&str> {
    if !config.validation.enabled {
        return Vec::new();
    }
    config.ignore_errors.iter()
        .filter(|entry| !entry.is_baseline())
        .map(|entry| entry.message())
        .collect()
}

pub fn check_pattern<R>(validator: &Validator<R>, pattern: &str) -> Vec<String> where R : TypeResolver {
    match validator.validate_delimited(pattern) {
        Ok(result) => findings_messages(pattern, &result),
        Err(error) => {
            debug!(pattern = %pattern, error = %error, "pattern not validated");
            vec![error_message(pattern, &error)]
        },
    }
}

pub fn check_all<R>(validator: &Validator<R>, patterns: &[&str]) -> Result<(), InvalidIgnoredPatterns> where R : TypeResolver {
    let errors: Vec<String> = patterns.iter()
        .flat_map(|pattern| check_pattern(validator, pattern))
        .collect();
    info!(patterns = patterns.len(), problems = errors.len(), "checked ignored error patterns");

    if errors.is_empty() {
        Ok(())
    }
    else {
        Err(InvalidIgnoredPatterns{ errors })
    }
}

#[cfg(test)]
mod check_tests {
    use super::*;

    fn config(content: &str) -> Config {
        Config::from_toml(content).unwrap()
    }

    #[test]
    fn collect_skips_baseline() {
        let config = config(r##"
            ignore_errors = [
                "#a#",
                { message = "#b#", path = "x.php" },
                { message = "#c#", count = 2 },
            ]
        "##);
        assert_eq!(collect_patterns(&config), vec!["#a#", "#b#"]);
    }

    #[test]
    fn collect_nothing_when_disabled() {
        let config = config(r##"
            ignore_errors = ["#a|b#"]
            [validation]
            enabled = false
        "##);
        assert!(collect_patterns(&config).is_empty());
    }

    #[test]
    fn resolver_from_config() {
        let resolver = build_resolver(&ValidationConfig{
            enabled: true,
            builtin_types: false,
            known_types: vec!["Foo".into()],
        }, &["Bar".to_string()]);
        assert_eq!(resolver.len(), 1);
        assert!(resolver.resolve("Foo").is_some());
        assert!(resolver.resolve("Bar").is_some());
        assert!(resolver.resolve("int").is_none());

        let resolver = build_resolver(&ValidationConfig::default(), &[]);
        assert!(resolver.resolve("int").is_some());
    }

    #[test]
    fn check_all_aggregates() {
        let validator = Validator::with_resolver(build_resolver(&ValidationConfig::default(), &[]));
        assert_eq!(check_all(&validator, &["#^Foo\\(\\)$#", "#a\\|b#"]), Ok(()));

        let errors = check_all(&validator, &["#int|string#", "#x$y#", "#(#", "abc"]).unwrap_err().errors;
        assert_eq!(errors.len(), 4);
        assert!(errors[0].contains("unescaped '|'"));
        assert!(errors[1].contains("anchor '$'"));
        assert!(errors[2].contains("not a valid regular expression"));
        assert!(errors[3].contains("not a valid delimited regular expression"));
    }
}
