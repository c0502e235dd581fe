//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/intentscape/config.toml` (XDG) or platform config dir
//! 2. Project config: `.intentscape.toml`
//! 3. Environment variables: `INTENTSCAPE_*`
//!
//! Every field has a default, so the explorer runs with no config at all.
//!
//! # Intended Usage
//!
//! **Global config** (`~/.config/intentscape/config.toml`):
//! ```toml
//! [backend]
//! url = "http://localhost:8000"
//! timeout = 10
//! ```
//!
//! **Project config** (`.intentscape.toml` in working directory):
//! ```toml
//! [graph]
//! id = "university"
//! ```
//!
//! Environment variables use single-word key segments, e.g.
//! `INTENTSCAPE_BACKEND_URL` or `INTENTSCAPE_GRAPH_ID`.

use std::ops::Deref;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub graph: GraphConfig,
}

/// Remote decision backend configuration.
///
/// Only consulted when a command runs with `--remote`; the built-in demo
/// resolver needs no configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the decision service.
    #[serde(default = "default_backend_url")]
    pub url: String,
    /// Request timeout in seconds. A dead backend must not wedge the UI.
    #[serde(default = "default_backend_timeout")]
    pub timeout: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            timeout: default_backend_timeout(),
        }
    }
}

impl BackendConfig {
    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Graph selection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    /// Identifier of the intent graph to load.
    #[serde(default = "default_graph_id")]
    pub id: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            id: default_graph_id(),
        }
    }
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_backend_timeout() -> u64 {
    10
}

fn default_graph_id() -> String {
    "university".to_string()
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        let user_config = Self::user_config_path();

        Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(".intentscape.toml"))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed("INTENTSCAPE_").split("_"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// User config path: ~/.config/intentscape/config.toml (XDG) or platform config dir.
    fn user_config_path() -> std::path::PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("intentscape").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("intentscape").join("config.toml"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_without_any_source() {
        let config: Config = Figment::new().extract().unwrap();

        assert_eq!(config.backend.url, "http://localhost:8000");
        assert_eq!(config.backend.timeout, 10);
        assert_eq!(config.graph.id, "university");
    }

    #[test]
    #[serial]
    fn test_env_overrides_defaults() {
        std::env::set_var("INTENTSCAPE_BACKEND_URL", "http://10.0.0.5:9000");
        std::env::set_var("INTENTSCAPE_GRAPH_ID", "museum");

        let config: Config = Figment::new()
            .merge(Env::prefixed("INTENTSCAPE_").split("_"))
            .extract()
            .unwrap();

        std::env::remove_var("INTENTSCAPE_BACKEND_URL");
        std::env::remove_var("INTENTSCAPE_GRAPH_ID");

        assert_eq!(config.backend.url, "http://10.0.0.5:9000");
        assert_eq!(config.graph.id, "museum");
        assert_eq!(config.backend.timeout, 10);
    }

    #[test]
    fn test_toml_layer_merges_with_defaults() {
        let config: Config = Figment::new()
            .merge(Toml::string("[backend]\ntimeout = 3"))
            .extract()
            .unwrap();

        assert_eq!(config.backend.timeout, 3);
        assert_eq!(config.backend.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.backend.url, "http://localhost:8000");
    }
}
