//! Session event loop
//!
//! Feeds UI events into a session and fires its debounce deadline. One
//! driver owns one session; searching runs synchronously inside the loop,
//! so a cycle always completes before the next event is read.

use super::{Navigation, ResultsSurface, SearchSession, UiEvent};
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Runs a session against a stream of UI events
pub struct SessionDriver<S> {
    session: SearchSession<S>,
    navigation: Option<mpsc::UnboundedSender<Navigation>>,
}

impl<S: ResultsSurface> SessionDriver<S> {
    /// Create a driver for `session`
    pub fn new(session: SearchSession<S>) -> Self {
        Self {
            session,
            navigation: None,
        }
    }

    /// Forward result navigations to `tx`
    pub fn with_navigation(mut self, tx: mpsc::UnboundedSender<Navigation>) -> Self {
        self.navigation = Some(tx);
        self
    }

    /// Process events until the sender side closes, then return the session
    ///
    /// A deadline still pending at close is dropped.
    pub async fn run(mut self, mut events: mpsc::Receiver<UiEvent>) -> SearchSession<S> {
        loop {
            let deadline = self.session.deadline();

            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => {
                        if let Some(nav) = self.session.handle(event, Instant::now()) {
                            self.navigate(nav);
                        }
                    }
                    None => break,
                },
                _ = sleep_until(deadline) => {
                    self.session.fire_if_due(Instant::now());
                }
            }
        }

        tracing::debug!("[{}] Session closed", self.session.name());
        self.session
    }

    fn navigate(&self, nav: Navigation) {
        if let Some(tx) = &self.navigation {
            if tx.send(nav).is_err() {
                tracing::debug!("[{}] Navigation receiver dropped", self.session.name());
            }
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
