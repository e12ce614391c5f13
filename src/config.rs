//! Configuration loading and schema definitions for testomat-export.
//!
//! Configuration comes from three layers, later ones winning:
//!
//! 1. the TOML file (`testomat.toml` by default, optional)
//! 2. the environment (`TESTOMATIO`, `TESTOMATIO_URL`)
//! 3. command-line flags

pub mod schema;

pub use schema::*;

use std::path::Path;

use anyhow::{Context, Result};

/// Loads configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read (e.g., doesn't exist or permission denied)
/// - The file contains invalid TOML syntax
/// - The configuration doesn't match the expected schema
///
/// # Example
///
/// ```no_run
/// use testomat_export::config::load_config;
/// use std::path::Path;
///
/// let config = load_config(Path::new("testomat.toml"))?;
/// println!("Scanning: {:?}", config.discovery.paths);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

/// Loads configuration from a TOML string.
///
/// # Example
///
/// ```
/// use testomat_export::config::load_config_str;
///
/// let config = load_config_str(r#"
///     [discovery]
///     paths = ["tests"]
/// "#)?;
///
/// assert_eq!(config.discovery.paths, vec![std::path::PathBuf::from("tests")]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn load_config_str(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).context("Failed to parse config")?;

    Ok(config)
}

/// Loads `path` if it exists, otherwise returns the defaults.
///
/// A file that exists but fails to parse is still an error.
pub fn load_config_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::default())
    }
}
