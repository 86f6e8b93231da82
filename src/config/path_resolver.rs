//! Path resolution module for sitesearch
//!
//! Provides utilities for resolving file paths with support for:
//! - Absolute paths (returned as-is)
//! - Tilde (~) expansion to home directory
//! - Relative paths (resolved from current directory)
//! - XDG Base Directory specification compliance

use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Expand tilde (~) in path to home directory
pub fn expand_home(path: &str) -> Result<PathBuf> {
    if path.starts_with('~') && std::env::var_os("HOME").is_none() {
        return Err(anyhow!("HOME environment variable not set"));
    }
    Ok(PathBuf::from(shellexpand::tilde(path).into_owned()))
}

/// Resolve a path to an absolute path
///
/// Resolution order:
/// 1. Expand ~ to home directory
/// 2. If absolute, return as-is
/// 3. If relative, resolve from current directory
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded = expand_home(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        let current_dir = std::env::current_dir()
            .map_err(|e| anyhow!("Failed to get current directory: {}", e))?;
        Ok(current_dir.join(expanded))
    }
}

/// Get the XDG config directory for sitesearch
///
/// Returns: $XDG_CONFIG_HOME/sitesearch or ~/.config/sitesearch
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("sitesearch")
    } else if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config").join("sitesearch")
    } else {
        PathBuf::from(".config").join("sitesearch")
    }
}

/// Get the default config file path
pub fn get_default_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home_with_tilde() {
        let result = expand_home("~").unwrap();
        assert!(!result.to_str().unwrap().contains('~'));
    }

    #[test]
    fn test_expand_home_with_subdir() {
        let result = expand_home("~/test").unwrap();
        assert!(result.to_str().unwrap().ends_with("/test"));
    }

    #[test]
    fn test_expand_home_absolute() {
        let result = expand_home("/absolute/path").unwrap();
        assert_eq!(result.to_str().unwrap(), "/absolute/path");
    }

    #[test]
    fn test_default_config_path() {
        let path = get_default_config_path();
        assert!(path.ends_with("sitesearch/config.toml"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let result = resolve_path("/tmp").unwrap();
        assert_eq!(result.to_str().unwrap(), "/tmp");
    }
}
