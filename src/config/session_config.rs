//! Session configuration structures
//!
//! Debounce timing and deferred-mount retry policy for interactive sessions.

use std::time::Duration;

/// Default debounce delay
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Bounded retry for locating a mount point that is not there yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total lookups, including the first
    pub attempts: u32,
    /// Delay between lookups
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 10,
            interval: Duration::from_millis(100),
        }
    }
}

/// Interactive session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Quiet period after the last keystroke before searching
    pub debounce: Duration,
    /// Mount lookup retry policy
    pub mount_retry: RetryPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            mount_retry: RetryPolicy::default(),
        }
    }
}

impl SessionConfig {
    /// Create a new session configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the debounce delay
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Set the mount retry policy
    pub fn with_mount_retry(mut self, mount_retry: RetryPolicy) -> Self {
        self.mount_retry = mount_retry;
        self
    }
}
