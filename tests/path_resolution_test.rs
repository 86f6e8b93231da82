//! Path resolution module tests
//!
//! Test cases for the path resolution functionality:
//! 1. Absolute paths should be returned as-is
//! 2. Tilde (~) should expand to home directory
//! 3. Relative paths should resolve from current directory

use sitesearch::config::path_resolver::{expand_home, get_config_dir, resolve_path};
use tempfile::TempDir;

#[test]
fn test_absolute_path_unchanged() {
    let path = "/tmp/pages.json";
    let resolved = resolve_path(path).unwrap();
    assert_eq!(resolved.to_str().unwrap(), path);
}

#[test]
fn test_tilde_expansion() {
    let resolved = expand_home("~/pages").unwrap();
    let home = std::env::var("HOME").unwrap();
    assert_eq!(resolved.to_str().unwrap(), format!("{}/pages", home));
}

#[test]
fn test_tilde_only() {
    let resolved = expand_home("~").unwrap();
    let home = std::env::var("HOME").unwrap();
    assert_eq!(resolved.to_str().unwrap(), home);
}

#[test]
fn test_relative_path_is_absolute_after_resolution() {
    let resolved = resolve_path("pages.json").unwrap();
    assert!(resolved.is_absolute());
    assert!(resolved.ends_with("pages.json"));
}

#[test]
fn test_config_dir_xdg() {
    let config_dir = get_config_dir();
    assert!(config_dir.ends_with("sitesearch"));
}

#[test]
fn test_resolve_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("existing.json");
    std::fs::write(&file_path, "[]").unwrap();

    let resolved = resolve_path(file_path.to_str().unwrap()).unwrap();
    assert!(resolved.exists());
}
