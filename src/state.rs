use log::{debug, error};

use crate::accumulator::ResultAccumulator;
use crate::error::SearchError;
use crate::model::Recipe;
use crate::pagination::PageCursor;
use crate::scroll::ScrollMetrics;

/// Fetch lifecycle as seen by the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Loading,
    /// Idle, with the message from the last failed fetch
    Errored(String),
}

/// A fetch the view must issue: the raw query (fallback not yet applied) and the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub query: String,
    pub page: PageCursor,
    /// Search generation the fetch was issued under; bumped on every submit
    pub generation: u64,
}

/// What applying a finished fetch did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Recipes were appended to the results
    Appended(usize),
    /// The fetch failed; results untouched, error message set
    Failed,
    /// Results belonged to an older search and were dropped (fencing only)
    Discarded,
}

/// All state owned by one search view.
///
/// Every method that returns a [`FetchTicket`] marks the state as loading and
/// clears the previous error. The loading flag guards scroll paging only; it
/// does not stop `edit_query` or `submit` from starting another fetch while
/// one is in flight.
#[derive(Debug, Clone)]
pub struct SearchState {
    query: String,
    cursor: PageCursor,
    results: ResultAccumulator,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl SearchState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            cursor: PageCursor::first(),
            results: ResultAccumulator::new(),
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> PageCursor {
        self.cursor
    }

    pub fn results(&self) -> &ResultAccumulator {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn fetch_state(&self) -> FetchState {
        if self.loading {
            FetchState::Loading
        } else if let Some(message) = &self.error {
            FetchState::Errored(message.clone())
        } else {
            FetchState::Idle
        }
    }

    /// Initial fetch for the current query and page
    pub fn mount(&mut self) -> FetchTicket {
        self.begin_fetch()
    }

    /// Stores new input text. A changed query re-fetches the current page and
    /// appends to the existing results.
    pub fn edit_query(&mut self, text: impl Into<String>) -> Option<FetchTicket> {
        let text = text.into();
        if text == self.query {
            return None;
        }
        self.query = text;
        Some(self.begin_fetch())
    }

    /// Starts a fresh search: results and cursor go back to (empty, 1)
    pub fn submit(&mut self) -> FetchTicket {
        self.results.reset();
        self.cursor = PageCursor::first();
        self.generation += 1;
        debug!(
            "New search for {:?} (generation {})",
            self.query, self.generation
        );
        self.begin_fetch()
    }

    /// Advances to the next page when the viewport is near the bottom and no
    /// fetch is loading. Otherwise the event is ignored, not deferred.
    pub fn scroll(&mut self, metrics: &ScrollMetrics, threshold: f64) -> Option<FetchTicket> {
        if self.loading || !metrics.near_bottom(threshold) {
            return None;
        }
        self.cursor = self.cursor.next();
        debug!("Scrolled near bottom, advancing to page {}", self.cursor);
        Some(self.begin_fetch())
    }

    /// Applies the outcome of a fetch. With `fence` set, successful results
    /// from an older search generation are dropped instead of appended.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<Recipe>, SearchError>,
        fence: bool,
    ) -> Completion {
        self.loading = false;
        match result {
            Ok(recipes) => {
                if fence && ticket.generation != self.generation {
                    debug!(
                        "Discarding {} recipes from stale search generation {}",
                        recipes.len(),
                        ticket.generation
                    );
                    return Completion::Discarded;
                }
                let count = recipes.len();
                self.results.append(recipes);
                Completion::Appended(count)
            }
            Err(e) => {
                error!("Error fetching recipes: {}", e);
                self.error = Some(e.user_message().to_string());
                Completion::Failed
            }
        }
    }

    /// Records a fetch that never produced a result
    pub fn abort(&mut self, ticket: &FetchTicket, reason: impl Into<String>) -> Completion {
        let reason = reason.into();
        debug!("Fetch for page {} aborted: {}", ticket.page, reason);
        self.complete(ticket, Err(SearchError::Aborted(reason)), false)
    }

    fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.error = None;
        FetchTicket {
            query: self.query.clone(),
            page: self.cursor,
            generation: self.generation,
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new("")
    }
}
