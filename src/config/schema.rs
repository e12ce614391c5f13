//! Configuration schema definitions for testomat-export.
//!
//! This module defines the configuration types that can be deserialized from
//! TOML configuration files. Every table and field is optional.
//!
//! # Schema Overview
//!
//! ```text
//! Config (root)
//! ├── ExportConfig       - Server URL and API key
//! └── DiscoveryConfig    - Where to look for test sources
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "TESTOMATIO";

/// Environment variable holding the server URL.
pub const SERVER_URL_ENV: &str = "TESTOMATIO_URL";

/// Root configuration structure for testomat-export.
///
/// # TOML Structure
///
/// ```toml
/// [export]
/// api_key = "tstmt_..."
/// server_url = "https://app.testomat.io"
///
/// [discovery]
/// paths = ["src/test/java"]
/// extensions = ["java"]
/// exclude_dirs = ["target", "build", ".git"]
/// ```
///
/// # Example
///
/// ```
/// use testomat_export::config::Config;
///
/// let config: Config = toml::from_str(r#"
///     [export]
///     server_url = "https://app.testomat.io"
/// "#).unwrap();
///
/// assert_eq!(config.discovery.extensions, vec!["java"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Export destination settings.
    #[serde(default)]
    pub export: ExportConfig,

    /// Test source discovery settings.
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

impl Config {
    /// Overlays the process environment onto this configuration.
    ///
    /// See [`apply_env_with`](Self::apply_env_with).
    pub fn apply_env(self) -> Self {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Overlays environment values, read through `lookup`, onto this
    /// configuration.
    ///
    /// `TESTOMATIO` replaces `export.api_key` and `TESTOMATIO_URL` replaces
    /// `export.server_url`. Unset variables leave the file values untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use testomat_export::config::Config;
    ///
    /// let config = Config::default().apply_env_with(|key| match key {
    ///     "TESTOMATIO_URL" => Some("https://app.testomat.io".to_string()),
    ///     _ => None,
    /// });
    ///
    /// assert_eq!(config.export.server_url.as_deref(), Some("https://app.testomat.io"));
    /// assert_eq!(config.export.api_key, None);
    /// ```
    pub fn apply_env_with<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV) {
            self.export.api_key = Some(key);
        }
        if let Some(url) = lookup(SERVER_URL_ENV) {
            self.export.server_url = Some(url);
        }
        self
    }
}

/// Where test cases are exported to.
///
/// Both fields may also come from the environment or the command line; the
/// command line wins.
///
/// # Example
///
/// ```toml
/// [export]
/// api_key = "tstmt_abc123"
/// server_url = "https://app.testomat.io"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Project API key, sent as the `api_key` query parameter.
    pub api_key: Option<String>,

    /// Base URL of the server. Required for a real export, ignored by dry
    /// runs.
    pub server_url: Option<String>,
}

impl ExportConfig {
    /// Returns the API key, or an empty string if none is configured.
    pub fn api_key_or_empty(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }
}

/// Which files are scanned for test cases.
///
/// # Defaults
///
/// | Field | Default |
/// |-------|---------|
/// | `paths` | `["src/test/java"]` |
/// | `extensions` | `["java"]` |
/// | `exclude_dirs` | `["target", "build", ".git"]` |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    /// Root directories or files to scan.
    #[serde(default = "default_paths")]
    pub paths: Vec<PathBuf>,

    /// File extensions, without the dot, that hold test sources.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names that are never descended into.
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            paths: default_paths(),
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

fn default_paths() -> Vec<PathBuf> {
    vec![PathBuf::from("src/test/java")]
}

fn default_extensions() -> Vec<String> {
    vec!["java".to_string()]
}

fn default_exclude_dirs() -> Vec<String> {
    ["target", "build", ".git"]
        .into_iter()
        .map(String::from)
        .collect()
}
