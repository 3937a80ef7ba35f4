//! Site configuration management for `site.json`.
//!
//! # Resolution order
//!
//! 1. explicit `--config <path>` CLI argument
//! 2. `SITE_JSON` environment variable (if set and non-blank)
//! 3. `site.json` at the project root
//!
//! # Fields
//!
//! | Field        | Purpose                                             |
//! |--------------|-----------------------------------------------------|
//! | `domain`     | Absolute site origin, required (trailing `/` stripped) |
//! | `site_name`  | Title for the RSS alternate link (default empty)    |
//! | `rss_title`  | Reserved, accepted but unused                       |
//! | `og_default` | Reserved, accepted but unused                       |

mod error;

pub use error::ConfigError;

use crate::{cli::Cli, debug};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing site.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Absolute site origin, e.g. `https://example.com`.
    pub domain: String,

    /// Human-readable site name, injected into the RSS alternate-link title.
    pub site_name: String,

    /// Feed channel title (reserved field, currently unused).
    pub rss_title: Option<String>,

    /// Default Open Graph image path (reserved field, currently unused).
    pub og_default: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            domain: String::new(),
            site_name: String::new(),
            rss_title: None,
            og_default: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// The project root comes from `--root` (default: current directory);
    /// the config path is resolved per the module-level order. The domain
    /// is checked before any file is touched: a missing or empty value is
    /// a fatal `ConfigError::MissingDomain`.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.clone();
        let config_path = Self::resolve_config_path(cli, &root);

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.root = root;
        config.finalize()?;

        Ok(config)
    }

    /// Resolve config file path: `--config` > `SITE_JSON` env > root default.
    fn resolve_config_path(cli: &Cli, root: &Path) -> PathBuf {
        if let Some(path) = &cli.config {
            return path.clone();
        }
        if let Ok(env) = std::env::var("SITE_JSON")
            && !env.trim().is_empty()
        {
            return PathBuf::from(env);
        }
        root.join("site.json")
    }

    /// Parse configuration from a JSON string.
    pub fn from_str(content: &str) -> Result<Self, serde_json::Error> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        for field in &ignored {
            debug!("config"; "ignoring unknown field: {}", field);
        }
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let config = Self::from_str(&content)
            .map_err(|err| ConfigError::Json(path.to_path_buf(), err))?;

        Ok(config)
    }

    /// Parse JSON content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), serde_json::Error> {
        let mut ignored = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let config = serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        deserializer.end()?;
        Ok((config, ignored))
    }

    /// Strip the trailing slash and reject an absent or empty domain.
    fn finalize(&mut self) -> Result<(), ConfigError> {
        self.domain = self.domain.trim_end_matches('/').to_string();
        if self.domain.is_empty() {
            return Err(ConfigError::MissingDomain);
        }
        Ok(())
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse and finalize a config from a JSON literal.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(json: &str) -> Result<SiteConfig> {
    let (mut parsed, ignored) = SiteConfig::parse_with_ignored(json).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed.finalize()?;
    Ok(parsed)
}

// ============================================================================
// tests
// ============================================================================
