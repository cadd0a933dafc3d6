use std::sync::Arc;

use log::{debug, error};
use rand::rngs::StdRng;
use tokio::task::{JoinError, JoinSet};

use crate::builder::SearchViewBuilder;
use crate::error::SearchError;
use crate::gateway::FetchGateway;
use crate::keywords::effective_query;
use crate::model::Recipe;
use crate::scroll::{ScrollFeed, ScrollMetrics, ScrollSentinel};
use crate::state::{Completion, FetchTicket, SearchState};

/// Result of a spawned fetch, carried back to the view
#[derive(Debug)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    /// Term actually sent to the API
    pub effective_query: String,
    pub result: Result<Vec<Recipe>, SearchError>,
}

/// Something [`SearchView::pump`] handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// A scroll event arrived; `advanced` is true when it requested a new page
    Scrolled { advanced: bool },
    /// An in-flight fetch finished
    Fetched(Completion),
}

/// Headless search page.
///
/// Owns the search state and every in-flight fetch. Fetches run as tokio tasks
/// and are applied in completion order when the view is pumped. Nothing is
/// cancelled: a fetch issued before a new submit still lands, appending its
/// results unless stale-result fencing is enabled. Dropping the view releases
/// the scroll subscription and abandons unfinished fetches.
pub struct SearchView<G: FetchGateway + 'static> {
    state: SearchState,
    gateway: Arc<G>,
    rng: StdRng,
    sentinel: ScrollSentinel,
    pending: JoinSet<FetchOutcome>,
    scroll_threshold: f64,
    fence_stale_results: bool,
}

impl<G: FetchGateway + 'static> SearchView<G> {
    pub fn builder() -> SearchViewBuilder<G> {
        SearchViewBuilder::default()
    }

    pub(crate) fn from_parts(
        state: SearchState,
        gateway: Arc<G>,
        rng: StdRng,
        scroll_threshold: f64,
        fence_stale_results: bool,
    ) -> Self {
        Self {
            state,
            gateway,
            rng,
            sentinel: ScrollSentinel::new(),
            pending: JoinSet::new(),
            scroll_threshold,
            fence_stale_results,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Number of fetches issued but not yet applied
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Subscribe to scroll events
    pub fn start(&mut self, feed: &ScrollFeed) {
        self.sentinel.start(feed);
    }

    /// Release the scroll subscription
    pub fn stop(&mut self) {
        self.sentinel.stop();
    }

    pub fn is_observing_scroll(&self) -> bool {
        self.sentinel.is_active()
    }

    /// Issue the initial fetch for the current query
    pub fn mount(&mut self) {
        let ticket = self.state.mount();
        self.dispatch(ticket);
    }

    /// Update the input text; a changed query fetches the current page
    pub fn input(&mut self, text: impl Into<String>) -> bool {
        match self.state.edit_query(text) {
            Some(ticket) => {
                self.dispatch(ticket);
                true
            }
            None => false,
        }
    }

    /// Start a fresh search with the current query
    pub fn submit(&mut self) {
        let ticket = self.state.submit();
        self.dispatch(ticket);
    }

    /// Handle one scroll event. Returns true when it requested a new page.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        match self.state.scroll(&metrics, self.scroll_threshold) {
            Some(ticket) => {
                self.dispatch(ticket);
                true
            }
            None => false,
        }
    }

    /// Wait for the next scroll event or fetch completion and apply it.
    ///
    /// Returns `None` when there is nothing left to wait for: no fetch in
    /// flight and no live scroll subscription.
    pub async fn pump(&mut self) -> Option<ViewEvent> {
        loop {
            let has_pending = !self.pending.is_empty();
            let observing = self.sentinel.is_active();
            if !has_pending && !observing {
                return None;
            }

            tokio::select! {
                Some(joined) = self.pending.join_next(), if has_pending => {
                    return Some(ViewEvent::Fetched(self.apply(joined)));
                }
                metrics = self.sentinel.next_metrics(), if observing => {
                    if let Some(metrics) = metrics {
                        let advanced = self.on_scroll(metrics);
                        return Some(ViewEvent::Scrolled { advanced });
                    }
                }
            }
        }
    }

    /// Apply every in-flight fetch, including any issued while settling.
    /// Scroll events are not consumed.
    pub async fn settle(&mut self) -> Vec<Completion> {
        let mut completions = Vec::new();
        while let Some(joined) = self.pending.join_next().await {
            completions.push(self.apply(joined));
        }
        completions
    }

    fn dispatch(&mut self, ticket: FetchTicket) {
        let effective = effective_query(&ticket.query, &mut self.rng);
        if ticket.query.is_empty() {
            debug!("Empty query, searching for {:?}", effective);
        }

        let gateway = Arc::clone(&self.gateway);
        self.pending.spawn(async move {
            let result = gateway.search(&effective, ticket.page).await;
            FetchOutcome {
                ticket,
                effective_query: effective,
                result,
            }
        });
    }

    fn apply(&mut self, joined: Result<FetchOutcome, JoinError>) -> Completion {
        match joined {
            Ok(outcome) => {
                debug!(
                    "Fetch for {:?} page {} finished",
                    outcome.effective_query, outcome.ticket.page
                );
                self.state
                    .complete(&outcome.ticket, outcome.result, self.fence_stale_results)
            }
            Err(e) => {
                error!("Fetch task failed: {}", e);
                // the ticket went down with the task; the current one stands in
                let ticket = FetchTicket {
                    query: self.state.query().to_string(),
                    page: self.state.page(),
                    generation: self.state.generation(),
                };
                self.state.abort(&ticket, e.to_string())
            }
        }
    }
}
