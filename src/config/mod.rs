//! Configuration module for sitesearch
//!
//! This module defines configuration structures for the search pipeline and sessions.

pub mod app_config;
pub mod path_resolver;
mod search_config;
mod session_config;

pub use search_config::SearchConfig;
pub use session_config::{RetryPolicy, SessionConfig, DEFAULT_DEBOUNCE};
