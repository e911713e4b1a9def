/**
 * Checks the ignore patterns of a configuration file.
 */

extern crate rx_lint;
extern crate serde;
extern crate thiserror;
extern crate toml;
extern crate tracing;
extern crate tracing_subscriber;

pub mod check;
pub mod config;
pub mod logging;
pub mod report;

pub use check::{build_resolver, check_all, check_pattern, collect_patterns, InvalidIgnoredPatterns};
pub use config::{Config, ConfigError, DetailedEntry, IgnoreEntry, ValidationConfig};
pub use logging::init_tracing;
