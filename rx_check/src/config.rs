/**
 * The TOML configuration listing the ignore patterns.
 */

use std::path::Path;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("config parse error in {path}: {message}")]
    Parse {
        path: String,
        message: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ignore_errors: Vec<IgnoreEntry>,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// When false no pattern is validated.
    pub enabled: bool,
    /// Whether the builtin keyword types count as types.
    pub builtin_types: bool,
    /// Further names that count as types.
    pub known_types: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self{
            enabled: true,
            builtin_types: true,
            known_types: Vec::new(),
        }
    }
}

/// One element of `ignore_errors`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IgnoreEntry {
    Pattern(String),
    Detailed(DetailedEntry),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetailedEntry {
    pub message: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub paths: Vec<String>,
    /// Only baseline entries carry a count.
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default, rename = "reportUnmatched")]
    pub report_unmatched: Option<bool>,
}

impl IgnoreEntry {
    pub fn message(&self) -> &str {
        match self {
            IgnoreEntry::Pattern(message) => message,
            IgnoreEntry::Detailed(entry) => &entry.message,
        }
    }

    pub fn is_baseline(&self) -> bool {
        match self {
            IgnoreEntry::Pattern(_) => false,
            IgnoreEntry::Detailed(entry) => entry.count.is_some(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read{
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|e| ConfigError::Parse{
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::from_toml("").unwrap();
        assert!(config.ignore_errors.is_empty());
        assert_eq!(config.validation, ValidationConfig::default());
        assert!(config.validation.enabled);
    }

    #[test]
    fn entries() {
        let config = Config::from_toml(r##"
            ignore_errors = [
                "#^Call to an undefined method Foo::bar\\(\\)\\.$#",
                { message = "#int|string#", path = "src/Foo.php", reportUnmatched = false },
                { message = "#^Baseline entry$#", count = 3, path = "src/Bar.php" },
            ]

            [validation]
            builtin_types = false
            known_types = ["Foo"]
        "##).unwrap();

        assert_eq!(config.ignore_errors.len(), 3);
        assert_eq!(config.ignore_errors[0].message(), r"#^Call to an undefined method Foo::bar\(\)\.$#");
        assert!(!config.ignore_errors[0].is_baseline());
        match &config.ignore_errors[1] {
            IgnoreEntry::Detailed(entry) => {
                assert_eq!(entry.path.as_deref(), Some("src/Foo.php"));
                assert_eq!(entry.report_unmatched, Some(false));
            },
            other => panic!("unexpected entry {:?}", other),
        }
        assert!(config.ignore_errors[2].is_baseline());
        assert!(config.validation.enabled);
        assert!(!config.validation.builtin_types);
        assert_eq!(config.validation.known_types, vec!["Foo".to_string()]);
    }

    #[test]
    fn entry_without_message_is_rejected() {
        assert!(Config::from_toml(r#"ignore_errors = [{ path = "a.php" }]"#).is_err());
    }

    #[test]
    fn missing_file() {
        match Config::load(Path::new("/nonexistent/rx_check.toml")) {
            Err(ConfigError::Read{ path, .. }) => assert_eq!(path, "/nonexistent/rx_check.toml"),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
