//! Configuration file parser for ~/.config/rss_reader/config.toml.
//!
//! The default config file is optional — a missing file yields `Config::default()`.
//! A file named explicitly with `--config` must exist.
//! Unknown keys are ignored (`deny_unknown_fields` is off) and each one is
//! logged as a warning.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::feed::DEFAULT_MAX_FEED_SIZE;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Persistent defaults for the command line.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// Command-line flags override whatever is set here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Print JSON instead of text when `--json` is not given.
    pub json: bool,

    /// Item limit used when `--limit` is not given. 0 = all items.
    pub limit: Option<usize>,

    /// `User-Agent` header sent with feed requests.
    pub user_agent: String,

    /// Maximum accepted size of a feed document in bytes.
    pub max_feed_size_bytes: usize,

    /// Whether feeds on localhost or private networks may be fetched.
    pub allow_private_hosts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json: false,
            limit: None,
            user_agent: concat!("rss_reader/", env!("CARGO_PKG_VERSION")).to_string(),
            max_feed_size_bytes: DEFAULT_MAX_FEED_SIZE,
            allow_private_hosts: true,
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 5] = [
        "json",
        "limit",
        "user_agent",
        "max_feed_size_bytes",
        "allow_private_hosts",
    ];

    /// Default location: `$HOME/.config/rss_reader/config.toml`.
    ///
    /// Returns `None` when `HOME` is not set.
    pub fn default_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME")?;
        Some(
            PathBuf::from(home)
                .join(".config")
                .join("rss_reader")
                .join("config.toml"),
        )
    }

    /// Loads the configuration for a run.
    ///
    /// An `explicit` path must exist; a missing file is an
    /// [`ConfigError::Io`] error. Without one, the file at
    /// [`Config::default_path`] is used if present.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                std::fs::metadata(path)?;
                Self::load(path)
            }
            None => match Self::default_path() {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → ignored, each logged as a warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        // Check file size before reading
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // File deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        // Parse as a raw table first to detect unknown keys
        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================
