//! Pipeline configuration.
//!
//! The page widget this replaces hard-coded its feed URL, relay prefix, and
//! display limit as globals; here they live in an explicit [`Config`] value
//! handed to the pipeline, so tests can point it at alternate endpoints.
//!
//! The config file is optional — a missing file yields `Config::default()`.
//! Unknown keys are silently ignored by serde (with `deny_unknown_fields`
//! off), though we log a warning when the file contains potential typos.
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level pipeline configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// RSS feed to fetch.
    pub feed_url: String,

    /// CORS relay prefix the percent-encoded feed URL is appended to.
    pub relay_prefix: String,

    /// Maximum number of article cards to render.
    pub display_limit: usize,

    /// Identifier of the display surface the cards are written into.
    pub surface_id: String,

    /// Profile link offered in the fallback card when the fetch fails.
    pub profile_url: String,

    /// Upper bound on the feed fetch, in seconds.
    pub fetch_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: "https://medium.com/feed/@chemicalstan15".to_string(),
            relay_prefix: "https://api.allorigins.win/raw?url=".to_string(),
            display_limit: 6,
            surface_id: "blog-posts".to_string(),
            profile_url: "https://medium.com/@chemicalstan15".to_string(),
            fetch_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → silently accepted (serde default behavior), logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        // Parse the TOML content first as a raw table to detect unknown keys
        if let Ok(raw) = content.parse::<toml::Table>() {
            let known_keys = [
                "feed_url",
                "relay_prefix",
                "display_limit",
                "surface_id",
                "profile_url",
                "fetch_timeout_secs",
            ];
            for key in raw.keys() {
                if !known_keys.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), feed = %config.feed_url, "Loaded configuration");
        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================
