//! Search session controller
//!
//! State machine for one search input:
//!
//! ```text
//! Idle --keystroke--> Pending --deadline/submit--> Showing
//!  ^                     |                            |
//!  +---- empty query ----+---- dismiss / outside / select ----+
//! ```
//!
//! At most one debounce deadline is outstanding; every keystroke replaces
//! it, so only the latest input is ever searched.
//!
//! Panel visibility is tracked apart from the state: typing after a render
//! moves to `Pending` while the previous panel stays on screen, and that
//! panel still answers outside clicks and result selection.

use super::{render_panel, RenderedPanel, ResultsSurface};
use crate::config::SessionConfig;
use crate::search::{Query, Searcher};
use serde::Serialize;
use tokio::time::Instant;

/// Visible state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// No results shown
    Idle,
    /// Debounce deadline running
    Pending,
    /// Results of the latest input on screen
    Showing,
}

/// Where a click landed relative to the search region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The query input
    Input,
    /// The results panel
    Panel,
    /// Anywhere else on the page
    Outside,
}

/// Link navigation the host should carry out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub url: String,
}

/// UI events delivered to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Input field value after a keystroke
    Input(String),
    /// Enter key or search button
    Submit,
    /// Click somewhere on the page
    Click(ClickTarget),
    /// Click on the rendered result for a URL
    Select(String),
    /// Explicit close (Escape key)
    Dismiss,
}

/// One search input and the results panel it drives
pub struct SearchSession<S> {
    /// Name used in logs ("desktop", "mobile")
    name: String,
    /// Pipeline over the shared corpus
    searcher: Searcher,
    /// Debounce settings
    config: SessionConfig,
    /// Host-owned results surface
    surface: S,
    state: SessionState,
    /// Current input field value
    input: String,
    /// Single outstanding debounce deadline
    deadline: Option<Instant>,
    /// Query of the last executed cycle
    last_query: Option<Query>,
    /// Panel currently on screen
    panel: Option<RenderedPanel>,
    /// Number of match/render cycles run
    render_cycles: u64,
}

impl<S: ResultsSurface> SearchSession<S> {
    /// Create an idle session
    pub fn new(
        name: impl Into<String>,
        searcher: Searcher,
        config: SessionConfig,
        surface: S,
    ) -> Self {
        Self {
            name: name.into(),
            searcher,
            config,
            surface,
            state: SessionState::Idle,
            input: String::new(),
            deadline: None,
            last_query: None,
            panel: None,
            render_cycles: 0,
        }
    }

    /// Apply a UI event, returning a navigation for result selection
    pub fn handle(&mut self, event: UiEvent, now: Instant) -> Option<Navigation> {
        match event {
            UiEvent::Input(value) => self.input(value, now),
            UiEvent::Submit => self.submit(),
            UiEvent::Click(target) => self.click(target),
            UiEvent::Select(url) => return self.select_result(&url),
            UiEvent::Dismiss => self.dismiss(),
        }
        None
    }

    /// Record a keystroke and restart the debounce
    pub fn input(&mut self, value: impl Into<String>, now: Instant) {
        self.input = value.into();
        self.deadline = Some(now + self.config.debounce);
        self.state = SessionState::Pending;
    }

    /// Search immediately, cancelling any pending debounce
    pub fn submit(&mut self) {
        self.deadline = None;
        self.run();
    }

    /// Run the debounced search if its deadline has passed
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                self.run();
                true
            }
            _ => false,
        }
    }

    /// Handle a click; clicks outside the search region hide the panel
    ///
    /// The input and any pending debounce are kept.
    pub fn click(&mut self, target: ClickTarget) {
        if target != ClickTarget::Outside || self.panel.take().is_none() {
            return;
        }

        self.surface.hide();
        if self.state == SessionState::Showing {
            self.state = SessionState::Idle;
        }
    }

    /// Close the panel and drop any pending search, keeping the input
    pub fn dismiss(&mut self) {
        self.deadline = None;
        self.panel = None;
        self.surface.hide();
        self.state = SessionState::Idle;
    }

    /// Follow a rendered result: clear the input and hide the panel first
    ///
    /// Accepted while a panel is on screen, including one left over from an
    /// earlier cycle, and only for a URL it rendered as a row. A pending
    /// debounce is cancelled.
    pub fn select_result(&mut self, url: &str) -> Option<Navigation> {
        let panel = self.panel.as_ref()?;
        if panel.row(url).is_none() {
            tracing::debug!("[{}] Ignoring selection of unrendered {}", self.name, url);
            return None;
        }

        self.input.clear();
        self.surface.clear_input();
        self.dismiss();
        tracing::debug!("[{}] Navigating to {}", self.name, url);
        Some(Navigation {
            url: url.to_string(),
        })
    }

    fn run(&mut self) {
        let query = Query::new(self.input.as_str());
        if query.is_empty() {
            self.surface.hide();
            self.panel = None;
            self.state = SessionState::Idle;
            self.last_query = None;
            return;
        }

        let results = self.searcher.search(&query);
        let panel = render_panel(&results, &query, self.searcher.config().max_results);
        tracing::debug!(
            "[{}] Rendering {} results for '{}'",
            self.name,
            panel.total,
            query.normalized()
        );

        self.surface.show(&panel);
        self.panel = Some(panel);
        self.state = SessionState::Showing;
        self.last_query = Some(query);
        self.render_cycles += 1;
    }

    /// Session name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current input field value
    pub fn input_value(&self) -> &str {
        &self.input
    }

    /// Pending debounce deadline
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Query of the last executed cycle
    pub fn last_query(&self) -> Option<&Query> {
        self.last_query.as_ref()
    }

    /// Panel currently on screen
    pub fn panel(&self) -> Option<&RenderedPanel> {
        self.panel.as_ref()
    }

    /// Whether a panel is on screen
    pub fn is_panel_visible(&self) -> bool {
        self.panel.is_some()
    }

    /// Number of match/render cycles run
    pub fn render_cycles(&self) -> u64 {
        self.render_cycles
    }

    /// Get the results surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the session, returning its surface
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Corpus;
    use crate::loader::Document;
    use crate::session::MemorySurface;
    use std::time::Duration;

    fn session() -> SearchSession<MemorySurface> {
        let corpus = Corpus::shared(vec![Document::new(
            "Privacy Policy",
            "/privacy",
            "How we protect your privacy and handle your data.",
            ["privacy", "GDPR"],
        )])
        .unwrap();
        SearchSession::new(
            "desktop",
            Searcher::new(corpus),
            SessionConfig::default(),
            MemorySurface::new(),
        )
    }

    #[test]
    fn test_keystroke_schedules_deadline() {
        let mut session = session();
        let now = Instant::now();

        session.input("pri", now);

        assert_eq!(session.state(), SessionState::Pending);
        assert_eq!(session.deadline(), Some(now + Duration::from_millis(300)));
        assert!(!session.fire_if_due(now + Duration::from_millis(299)));
        assert!(session.fire_if_due(now + Duration::from_millis(300)));
        assert_eq!(session.state(), SessionState::Showing);
        assert!(session.deadline().is_none());
    }

    #[test]
    fn test_keystroke_replaces_deadline() {
        let mut session = session();
        let start = Instant::now();

        session.input("p", start);
        session.input("pr", start + Duration::from_millis(100));

        assert_eq!(
            session.deadline(),
            Some(start + Duration::from_millis(400))
        );
        assert!(!session.fire_if_due(start + Duration::from_millis(300)));
    }

    #[test]
    fn test_submit_bypasses_debounce() {
        let mut session = session();
        session.input("privacy", Instant::now());

        session.submit();

        assert_eq!(session.state(), SessionState::Showing);
        assert!(session.deadline().is_none());
        assert_eq!(session.render_cycles(), 1);
        assert_eq!(session.surface().panel().unwrap().total, 1);
    }

    #[test]
    fn test_empty_query_goes_idle_without_message() {
        let mut session = session();
        session.input("privacy", Instant::now());
        session.submit();

        session.input("   ", Instant::now());
        session.submit();

        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.surface().is_visible());
        assert_eq!(session.surface().show_count(), 1);
        assert!(session.last_query().is_none());
    }

    #[test]
    fn test_outside_click_hides_but_keeps_input() {
        let mut session = session();
        session.input("privacy", Instant::now());
        session.submit();

        session.click(ClickTarget::Panel);
        assert!(session.surface().is_visible());

        session.click(ClickTarget::Outside);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.surface().is_visible());
        assert_eq!(session.input_value(), "privacy");
    }

    #[test]
    fn test_select_result_clears_and_hides() {
        let mut session = session();
        session.input("privacy", Instant::now());
        session.submit();

        let nav = session.handle(UiEvent::Select("/privacy".to_string()), Instant::now());

        assert_eq!(
            nav,
            Some(Navigation {
                url: "/privacy".to_string()
            })
        );
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.input_value(), "");
        assert!(!session.surface().is_visible());
        assert_eq!(session.surface().input_clears(), 1);
    }

    #[test]
    fn test_select_without_panel_is_ignored() {
        let mut session = session();
        assert!(session.select_result("/privacy").is_none());
    }

    #[test]
    fn test_select_from_previous_panel_while_typing() {
        let mut session = session();
        let now = Instant::now();
        session.input("priv", now);
        session.submit();
        session.input("priva", now);
        assert_eq!(session.state(), SessionState::Pending);
        assert!(session.is_panel_visible());

        let nav = session.handle(UiEvent::Select("/privacy".to_string()), now);

        assert_eq!(nav.map(|n| n.url), Some("/privacy".to_string()));
        assert_eq!(session.input_value(), "");
        assert_eq!(session.surface().input_clears(), 1);
        assert!(!session.surface().is_visible());
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.fire_if_due(now + Duration::from_secs(1)));
    }

    #[test]
    fn test_select_unrendered_url_is_ignored() {
        let mut session = session();
        session.input("privacy", Instant::now());
        session.submit();

        assert!(session.select_result("/elsewhere").is_none());
        assert_eq!(session.input_value(), "privacy");
        assert!(session.surface().is_visible());
        assert_eq!(session.state(), SessionState::Showing);
    }

    #[test]
    fn test_outside_click_hides_previous_panel_while_typing() {
        let mut session = session();
        let now = Instant::now();
        session.input("priv", now);
        session.submit();
        session.input("priva", now);

        session.click(ClickTarget::Outside);

        assert!(!session.surface().is_visible());
        assert!(!session.is_panel_visible());
        assert_eq!(session.input_value(), "priva");
        assert_eq!(session.state(), SessionState::Pending);
        assert!(session.fire_if_due(now + Duration::from_millis(300)));
        assert!(session.surface().is_visible());
    }

    #[test]
    fn test_dismiss_cancels_pending() {
        let mut session = session();
        let now = Instant::now();
        session.input("privacy", now);

        session.dismiss();

        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.fire_if_due(now + Duration::from_secs(1)));
        assert_eq!(session.input_value(), "privacy");
    }
}
