//! Configuration file parser for ~/.config/newsdesk/config.toml.
//!
//! The config file is optional — a missing file yields `Config::default()`.
//! Unknown keys are accepted but logged, so a typo doesn't silently revert
//! a setting to its default without a trace.
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),
}

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be
/// specified; missing keys fall back to the defaults below.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search phrase sent to the news feed.
    pub query: String,

    /// Feed search endpoint. Overridable mostly for testing against a
    /// local server.
    pub endpoint: String,

    /// Hard timeout for a single fetch, in seconds.
    pub request_timeout_secs: u64,

    /// Entries revealed initially and added per "load more" press.
    pub page_size: usize,

    /// When true (the default), every interaction re-fetches the feed and
    /// the list is always fresh. When false, "load more" reuses the
    /// entries already fetched this session; only an explicit refresh hits
    /// the network.
    pub always_fresh: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query: "Software Testing AI News".to_string(),
            endpoint: crate::feed::DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: 10,
            page_size: 20,
            always_fresh: true,
        }
    }
}

impl Config {
    /// Config files have no business being this big.
    const MAX_FILE_SIZE: u64 = 65_536;

    const KNOWN_KEYS: [&'static str; 5] = [
        "query",
        "endpoint",
        "request_timeout_secs",
        "page_size",
        "always_fresh",
    ];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as a warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
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

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), query = %config.query, "Loaded configuration");
        Ok(config)
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}
