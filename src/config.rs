//! Checkpoint configuration
//!
//! Reference-data locations can be pinned in a `borderpost.toml` next to
//! where the tool runs, so shifts do not have to repeat `--watchlist` and
//! `--countries` on every invocation. Command-line flags still win.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Name of the per-directory configuration file
pub const CONFIG_FILE: &str = "borderpost.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Reference-data file locations
    #[serde(default)]
    pub sources: SourcesConfig,
}

/// Where the reference-data files live
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourcesConfig {
    /// Path to the watchlist file
    #[serde(default = "default_watchlist")]
    pub watchlist: PathBuf,
    /// Path to the country-policy file
    #[serde(default = "default_countries")]
    pub countries: PathBuf,
}

fn default_watchlist() -> PathBuf {
    PathBuf::from("watchlist.json")
}

fn default_countries() -> PathBuf {
    PathBuf::from("countries.json")
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            watchlist: default_watchlist(),
            countries: default_countries(),
        }
    }
}

impl Config {
    /// Load `borderpost.toml` from the working directory, or defaults if
    /// the file is absent or unparseable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from a specific path, falling back to defaults
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            fs::read_to_string(path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }
}
