//! Host page adapters
//!
//! A session renders into a `ResultsSurface` the host page owns. Hosts may
//! wire up their search inputs after the session is created, so mounting
//! retries a bounded number of times instead of failing.

use super::RenderedPanel;
use crate::config::RetryPolicy;

/// Sink for rendered results, owned by the host page
pub trait ResultsSurface {
    /// Replace the panel contents and make it visible
    fn show(&mut self, panel: &RenderedPanel);
    /// Hide the panel
    fn hide(&mut self);
    /// Empty the query input field
    fn clear_input(&mut self);
}

/// Host page that provides input surfaces once its markup exists
pub trait HostPage {
    type Surface: ResultsSurface;

    /// Surface for the input `input_id`, `None` while it is not present
    fn locate(&mut self, input_id: &str) -> Option<Self::Surface>;
}

/// Locate `input_id` on `host`, retrying per `policy`
///
/// Never errors: when the input never appears the session is simply not
/// mounted.
pub async fn mount_with_retry<H: HostPage>(
    host: &mut H,
    input_id: &str,
    policy: RetryPolicy,
) -> Option<H::Surface> {
    for attempt in 1..=policy.attempts {
        if let Some(surface) = host.locate(input_id) {
            tracing::debug!("Mounted search input '{}' on attempt {}", input_id, attempt);
            return Some(surface);
        }
        if attempt < policy.attempts {
            tokio::time::sleep(policy.interval).await;
        }
    }

    tracing::warn!(
        "Search input '{}' not found after {} attempts; search disabled",
        input_id,
        policy.attempts
    );
    None
}

/// In-memory surface recording everything rendered into it
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    visible: bool,
    panel: Option<RenderedPanel>,
    shows: usize,
    input_clears: usize,
}

impl MemorySurface {
    /// Create a hidden, empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel is visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last panel shown, kept after hiding
    pub fn panel(&self) -> Option<&RenderedPanel> {
        self.panel.as_ref()
    }

    /// Number of times a panel was shown
    pub fn show_count(&self) -> usize {
        self.shows
    }

    /// Number of times the input was cleared
    pub fn input_clears(&self) -> usize {
        self.input_clears
    }
}

impl ResultsSurface for MemorySurface {
    fn show(&mut self, panel: &RenderedPanel) {
        self.visible = true;
        self.panel = Some(panel.clone());
        self.shows += 1;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn clear_input(&mut self) {
        self.input_clears += 1;
    }
}
