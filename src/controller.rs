//! Search controller
//!
//! Owns the `SearchState` for one page and drives the search lifecycle:
//! `begin` marks the state loading, then exactly one of `resolve` / `fail`
//! settles it. Every `begin` bumps a generation counter; a completion
//! carrying an older ticket is discarded, so a slow earlier search can never
//! overwrite a newer one.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;

use crate::plant::PlantRecord;
use crate::presenter::{select_view, ResultsView, SearchState};
use crate::search_gateway::PlantSearchGateway;

// ============================================================================
// Query
// ============================================================================

/// A trimmed, non-empty search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// Toast shown above the results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn no_results(query: &SearchQuery) -> Self {
        Self {
            title: "No plants found".to_string(),
            description: format!(
                "No results found for \"{}\". Try a different search term.",
                query
            ),
            variant: NotificationVariant::Default,
        }
    }

    pub fn search_failed() -> Self {
        Self {
            title: "Search failed".to_string(),
            description: "There was an error searching for plants. Please try again.".to_string(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Handle for one in-flight search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: SearchQuery,
}

impl SearchTicket {
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

pub struct SearchController {
    gateway: Arc<PlantSearchGateway>,
    state: SearchState,
    generation: u64,
}

impl SearchController {
    pub fn new(gateway: Arc<PlantSearchGateway>) -> Self {
        Self {
            gateway,
            state: SearchState::default(),
            generation: 0,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn view(&self) -> ResultsView {
        select_view(&self.state)
    }

    /// Mark a new search as in flight and invalidate any earlier ticket.
    pub fn begin(&mut self, query: SearchQuery) -> SearchTicket {
        self.generation += 1;
        self.state.is_loading = true;
        self.state.has_searched = true;
        SearchTicket {
            generation: self.generation,
            query,
        }
    }

    fn is_current(&self, ticket: &SearchTicket) -> bool {
        if ticket.generation == self.generation {
            return true;
        }
        tracing::debug!(
            "Discarding stale search '{}' (generation {}, current {})",
            ticket.query,
            ticket.generation,
            self.generation
        );
        false
    }

    /// Store the records of a finished search.
    ///
    /// Returns the "no plants found" notification for an empty result, and
    /// nothing at all for a stale ticket.
    pub fn resolve(&mut self, ticket: SearchTicket, records: Vec<PlantRecord>) -> Option<Notification> {
        if !self.is_current(&ticket) {
            return None;
        }
        self.state.is_loading = false;
        self.state.results = records;

        if self.state.results.is_empty() {
            Some(Notification::no_results(&ticket.query))
        } else {
            None
        }
    }

    /// Settle a search that died before producing records. Previous results stay.
    pub fn fail(&mut self, ticket: SearchTicket, error: impl std::fmt::Display) -> Option<Notification> {
        if !self.is_current(&ticket) {
            return None;
        }
        tracing::error!("Search '{}' failed: {}", ticket.query, error);
        self.state.is_loading = false;
        Some(Notification::search_failed())
    }

    /// Run a full search: begin, query the gateway on its own task, settle.
    ///
    /// The gateway absorbs remote failures itself; only a panicked or
    /// cancelled task reaches `fail`.
    pub async fn submit(&mut self, query: SearchQuery) -> Option<Notification> {
        let ticket = self.begin(query);

        let gateway = Arc::clone(&self.gateway);
        let q = ticket.query().as_str().to_string();
        let handle = tokio::spawn(async move { gateway.search(&q).await });

        self.settle(ticket, handle).await
    }

    /// Wait for a spawned search and resolve or fail `ticket` with its outcome.
    pub async fn settle(
        &mut self,
        ticket: SearchTicket,
        handle: JoinHandle<Vec<PlantRecord>>,
    ) -> Option<Notification> {
        match handle.await {
            Ok(records) => self.resolve(ticket, records),
            Err(e) => self.fail(ticket, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayConfig;
    use crate::fallback::filter_reference_plants;

    fn controller() -> SearchController {
        // An unparseable base URL sends every search straight to the fallback set
        let gateway = PlantSearchGateway::new(GatewayConfig {
            base_url: "not a url".to_string(),
            api_key: String::new(),
        })
        .unwrap();
        SearchController::new(Arc::new(gateway))
    }

    fn query(s: &str) -> SearchQuery {
        SearchQuery::parse(s).unwrap()
    }

    #[test]
    fn test_query_parse_trims_and_rejects_blank() {
        assert_eq!(SearchQuery::parse("  rose ").unwrap().as_str(), "rose");
        assert_eq!(SearchQuery::parse(""), None);
        assert_eq!(SearchQuery::parse(" \t\n"), None);
    }

    #[test]
    fn test_begin_sets_loading_and_searched() {
        let mut c = controller();
        assert_eq!(c.view(), ResultsView::Unsearched);

        let _ticket = c.begin(query("rose"));
        assert!(c.state().is_loading);
        assert!(c.state().has_searched);
        assert_eq!(c.view(), ResultsView::Loading);
    }

    #[test]
    fn test_resolve_stores_results() {
        let mut c = controller();
        let ticket = c.begin(query("rose"));
        let note = c.resolve(ticket, filter_reference_plants("rose"));

        assert_eq!(note, None);
        assert!(!c.state().is_loading);
        assert_eq!(c.state().results.len(), 1);
        assert!(matches!(c.view(), ResultsView::Grid(_)));
    }

    #[test]
    fn test_empty_resolve_notifies() {
        let mut c = controller();
        let ticket = c.begin(query("cactus"));
        let note = c.resolve(ticket, Vec::new()).unwrap();

        assert_eq!(note.title, "No plants found");
        assert_eq!(
            note.description,
            "No results found for \"cactus\". Try a different search term."
        );
        assert!(!note.is_destructive());
        assert_eq!(c.view(), ResultsView::NoMatch);
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut c = controller();
        let first = c.begin(query("rose"));
        let second = c.begin(query("lavender"));

        // The newer search lands first, then the older one straggles in
        assert_eq!(c.resolve(second, filter_reference_plants("lavender")), None);
        assert_eq!(c.resolve(first, Vec::new()), None);

        assert_eq!(c.state().results.len(), 1);
        assert_eq!(c.state().results[0].common_name, "Lavender");
    }

    #[test]
    fn test_stale_ticket_does_not_clear_loading() {
        let mut c = controller();
        let first = c.begin(query("rose"));
        let _second = c.begin(query("lavender"));

        c.resolve(first, filter_reference_plants("rose"));
        assert!(c.state().is_loading);
        assert!(c.state().results.is_empty());
    }

    #[test]
    fn test_fail_keeps_previous_results() {
        let mut c = controller();
        let ticket = c.begin(query("rose"));
        c.resolve(ticket, filter_reference_plants("rose"));

        let ticket = c.begin(query("monstera"));
        let note = c.fail(ticket, "task panicked").unwrap();

        assert!(note.is_destructive());
        assert_eq!(note.title, "Search failed");
        assert!(!c.state().is_loading);
        assert_eq!(c.state().results[0].common_name, "Rose");
    }

    #[tokio::test]
    async fn test_submit_resolves_through_gateway() {
        let mut c = controller();
        let note = c.submit(query("Lavandula")).await;

        assert_eq!(note, None);
        assert!(!c.state().is_loading);
        assert_eq!(c.state().results[0].common_name, "Lavender");
    }

    #[tokio::test]
    async fn test_submit_without_match_notifies() {
        let mut c = controller();
        let note = c.submit(query("cactus")).await.unwrap();
        assert_eq!(note.variant, NotificationVariant::Default);
        assert_eq!(c.view(), ResultsView::NoMatch);
    }

    #[tokio::test]
    async fn test_panicked_search_task_fails_with_destructive_notice() {
        let mut c = controller();
        c.submit(query("rose")).await;

        let ticket = c.begin(query("monstera"));
        let handle: JoinHandle<Vec<PlantRecord>> =
            tokio::spawn(async { panic!("gateway task blew up") });
        let note = c.settle(ticket, handle).await.unwrap();

        assert!(note.is_destructive());
        assert_eq!(note.title, "Search failed");
        assert!(!c.state().is_loading);
        assert_eq!(c.state().results[0].common_name, "Rose");
    }

    #[tokio::test]
    async fn test_cancelled_search_task_fails() {
        let mut c = controller();
        let ticket = c.begin(query("rose"));
        let handle: JoinHandle<Vec<PlantRecord>> =
            tokio::spawn(async { std::future::pending().await });
        handle.abort();

        let note = c.settle(ticket, handle).await.unwrap();
        assert!(note.is_destructive());
        assert_eq!(c.view(), ResultsView::NoMatch);
    }

    #[tokio::test]
    async fn test_stale_failed_task_is_ignored() {
        let mut c = controller();
        let first = c.begin(query("rose"));
        let _second = c.begin(query("lavender"));

        let handle: JoinHandle<Vec<PlantRecord>> = tokio::spawn(async { panic!("late failure") });
        assert_eq!(c.settle(first, handle).await, None);
        assert!(c.state().is_loading);
    }
}
