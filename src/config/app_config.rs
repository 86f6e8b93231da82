//! Application configuration module for sitesearch
//!
//! Provides TOML-based configuration with environment variable override support.
//! Priority: CLI args > Environment variables > Config file > Defaults

use super::{RetryPolicy, SearchConfig, SessionConfig};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Corpus file or directory (default: built-in site corpus)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    corpus_path: Option<String>,

    /// Debounce delay in milliseconds
    #[serde(default = "default_debounce_ms")]
    debounce_ms: u64,

    /// Chars kept on each side of the first hit in excerpts
    #[serde(default = "default_excerpt_margin")]
    excerpt_margin: usize,

    /// Chars kept from the body head when the body has no hit
    #[serde(default = "default_fallback_excerpt_chars")]
    fallback_excerpt_chars: usize,

    /// Maximum rows rendered per panel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_results: Option<usize>,

    /// Mount point lookups before giving up
    #[serde(default = "default_mount_retry_attempts")]
    mount_retry_attempts: u32,

    /// Delay between mount point lookups in milliseconds
    #[serde(default = "default_mount_retry_interval_ms")]
    mount_retry_interval_ms: u64,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_excerpt_margin() -> usize {
    40
}

fn default_fallback_excerpt_chars() -> usize {
    100
}

fn default_mount_retry_attempts() -> u32 {
    10
}

fn default_mount_retry_interval_ms() -> u64 {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            corpus_path: None,
            debounce_ms: default_debounce_ms(),
            excerpt_margin: default_excerpt_margin(),
            fallback_excerpt_chars: default_fallback_excerpt_chars(),
            max_results: None,
            mount_retry_attempts: default_mount_retry_attempts(),
            mount_retry_interval_ms: default_mount_retry_interval_ms(),
        }
    }
}

impl AppConfig {
    /// Create config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file: {}", e))?;
        Ok(config)
    }

    /// Create config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("SITESEARCH_CORPUS") {
            config.corpus_path = Some(path);
        }

        if let Some(ms) = env_number("SITESEARCH_DEBOUNCE_MS") {
            config.debounce_ms = ms;
        }

        if let Some(margin) = env_number("SITESEARCH_EXCERPT_MARGIN") {
            config.excerpt_margin = margin;
        }

        if let Some(chars) = env_number("SITESEARCH_FALLBACK_EXCERPT_CHARS") {
            config.fallback_excerpt_chars = chars;
        }

        if let Some(n) = env_number("SITESEARCH_MAX_RESULTS") {
            config.max_results = Some(n);
        }

        if let Some(attempts) = env_number("SITESEARCH_MOUNT_RETRY_ATTEMPTS") {
            config.mount_retry_attempts = attempts;
        }

        if let Some(ms) = env_number("SITESEARCH_MOUNT_RETRY_INTERVAL_MS") {
            config.mount_retry_interval_ms = ms;
        }

        config
    }

    /// Merge with another config (other takes priority for non-default values)
    pub fn merge_with(&self, other: &Self) -> Self {
        fn pick<T: PartialEq + Clone>(mine: &T, theirs: &T, default: T) -> T {
            if *theirs != default {
                theirs.clone()
            } else {
                mine.clone()
            }
        }

        Self {
            corpus_path: other.corpus_path.clone().or_else(|| self.corpus_path.clone()),
            debounce_ms: pick(&self.debounce_ms, &other.debounce_ms, default_debounce_ms()),
            excerpt_margin: pick(
                &self.excerpt_margin,
                &other.excerpt_margin,
                default_excerpt_margin(),
            ),
            fallback_excerpt_chars: pick(
                &self.fallback_excerpt_chars,
                &other.fallback_excerpt_chars,
                default_fallback_excerpt_chars(),
            ),
            max_results: other.max_results.or(self.max_results),
            mount_retry_attempts: pick(
                &self.mount_retry_attempts,
                &other.mount_retry_attempts,
                default_mount_retry_attempts(),
            ),
            mount_retry_interval_ms: pick(
                &self.mount_retry_interval_ms,
                &other.mount_retry_interval_ms,
                default_mount_retry_interval_ms(),
            ),
        }
    }

    /// Override corpus_path
    pub fn with_corpus_path(mut self, path: &str) -> Self {
        self.corpus_path = Some(path.to_string());
        self
    }

    /// Override debounce_ms
    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Override max_results
    pub fn with_max_results(mut self, n: Option<usize>) -> Self {
        self.max_results = n;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms == 0 {
            return Err(anyhow!("debounce_ms must be greater than 0"));
        }

        if self.excerpt_margin == 0 {
            return Err(anyhow!("excerpt_margin must be greater than 0"));
        }

        if self.fallback_excerpt_chars == 0 {
            return Err(anyhow!("fallback_excerpt_chars must be greater than 0"));
        }

        if self.mount_retry_attempts == 0 {
            return Err(anyhow!("mount_retry_attempts must be greater than 0"));
        }

        if self.max_results == Some(0) {
            return Err(anyhow!("max_results must be greater than 0 when set"));
        }

        Ok(())
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| anyhow!("Failed to serialize config: {}", e))
    }

    /// Pipeline settings derived from this config
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new()
            .with_excerpt_margin(self.excerpt_margin)
            .with_fallback_chars(self.fallback_excerpt_chars)
            .with_max_results(self.max_results)
    }

    /// Session settings derived from this config
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new()
            .with_debounce(Duration::from_millis(self.debounce_ms))
            .with_mount_retry(RetryPolicy {
                attempts: self.mount_retry_attempts,
                interval: Duration::from_millis(self.mount_retry_interval_ms),
            })
    }

    // Getters
    pub fn corpus_path(&self) -> Option<&str> {
        self.corpus_path.as_deref()
    }

    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    pub fn excerpt_margin(&self) -> usize {
        self.excerpt_margin
    }

    pub fn fallback_excerpt_chars(&self) -> usize {
        self.fallback_excerpt_chars
    }

    pub fn max_results(&self) -> Option<usize> {
        self.max_results
    }

    pub fn mount_retry_attempts(&self) -> u32 {
        self.mount_retry_attempts
    }

    pub fn mount_retry_interval_ms(&self) -> u64 {
        self.mount_retry_interval_ms
    }
}

fn env_number<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
