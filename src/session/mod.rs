//! Interactive search sessions
//!
//! This module provides the debounced session state machine, its async
//! driver, and the adapter layer between ranked results and host surfaces.
//! Each input surface (desktop box, mobile box) gets its own session; all
//! sessions share one corpus.

mod controller;
mod driver;
mod render;
mod surface;

pub use controller::{ClickTarget, Navigation, SearchSession, SessionState, UiEvent};
pub use driver::SessionDriver;
pub use render::{render_panel, RenderedPanel, RenderedRow};
pub use surface::{mount_with_retry, HostPage, MemorySurface, ResultsSurface};

use crate::config::SessionConfig;
use crate::search::Searcher;

impl<S: ResultsSurface> SearchSession<S> {
    /// Mount a session on `host`, deferring until `input_id` exists
    ///
    /// Returns `None` when the input never appears within the retry policy.
    pub async fn mount<H>(
        host: &mut H,
        input_id: &str,
        searcher: Searcher,
        config: SessionConfig,
    ) -> Option<Self>
    where
        H: HostPage<Surface = S>,
    {
        let surface = mount_with_retry(host, input_id, config.mount_retry).await?;
        Some(Self::new(input_id, searcher, config, surface))
    }
}
