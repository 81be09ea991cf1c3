//! Server configuration.
//!
//! Loaded via the `config` crate from `PRIVACYMAIL__*` environment
//! variables. Site address and site root come from Leptos' own
//! configuration (`LEPTOS_*` / `Cargo.toml` metadata), not from here.

use serde::Deserialize;

/// Prefix for environment variables read by [`ServerConfig::from_env`].
pub const ENV_PREFIX: &str = "PRIVACYMAIL";

/// Host configuration for the web shell server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Directory holding the compiled WASM/JS bundle served under `/pkg`.
    #[serde(default = "default_pkg_dir")]
    pub pkg_dir: String,
}

fn default_log_filter() -> String {
    "info,tower_http=debug".to_string()
}

fn default_pkg_dir() -> String {
    "target/site/pkg".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            pkg_dir: default_pkg_dir(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
    }

    fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .source(Some(source))
    }

    #[test]
    fn server_config_has_correct_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.log_filter, "info,tower_http=debug");
        assert_eq!(config.pkg_dir, "target/site/pkg");
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = ServerConfig::from_source(env(&[])).expect("should load");
        assert_eq!(config.log_filter, "info,tower_http=debug");
        assert_eq!(config.pkg_dir, "target/site/pkg");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = ServerConfig::from_source(env(&[
            ("PRIVACYMAIL__LOG_FILTER", "debug"),
            ("PRIVACYMAIL__PKG_DIR", "/srv/privacymail/pkg"),
        ]))
        .expect("should load");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.pkg_dir, "/srv/privacymail/pkg");
    }
}
