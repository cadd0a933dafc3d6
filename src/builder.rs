use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SearchConfig;
use crate::gateway::FetchGateway;
use crate::scroll::DEFAULT_SCROLL_THRESHOLD;
use crate::state::SearchState;
use crate::view::SearchView;
use crate::SearchError;

/// Builder for configuring a [`SearchView`]
pub struct SearchViewBuilder<G: FetchGateway + 'static> {
    gateway: Option<Arc<G>>,
    query: String,
    rng: Option<StdRng>,
    scroll_threshold: f64,
    fence_stale_results: bool,
}

impl<G: FetchGateway + 'static> Default for SearchViewBuilder<G> {
    fn default() -> Self {
        Self {
            gateway: None,
            query: String::new(),
            rng: None,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            fence_stale_results: false,
        }
    }
}

impl<G: FetchGateway + 'static> SearchViewBuilder<G> {
    /// Set the gateway used to fetch pages
    ///
    /// # Example
    /// ```
    /// use recipe_search::{EdamamGateway, SearchView};
    ///
    /// let gateway = EdamamGateway::with_base_url(
    ///     "https://api.edamam.com".to_string(),
    ///     "app-id".to_string(),
    ///     "app-key".to_string(),
    /// );
    /// let builder = SearchView::builder().gateway(gateway);
    /// ```
    pub fn gateway(mut self, gateway: G) -> Self {
        self.gateway = Some(Arc::new(gateway));
        self
    }

    /// Share a gateway that is also used elsewhere
    pub fn shared_gateway(mut self, gateway: Arc<G>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Initial search text. Empty searches use a fallback keyword.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Random source for fallback keywords; seeded from the OS when unset
    pub fn rng(mut self, rng: StdRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Distance from the bottom of the document that requests the next page
    pub fn scroll_threshold(mut self, threshold: f64) -> Self {
        self.scroll_threshold = threshold;
        self
    }

    /// Drop results of fetches issued before the latest submit
    pub fn fence_stale_results(mut self, fence: bool) -> Self {
        self.fence_stale_results = fence;
        self
    }

    /// Take scroll threshold and fencing from configuration
    pub fn config(self, config: &SearchConfig) -> Self {
        self.scroll_threshold(config.scroll_threshold)
            .fence_stale_results(config.fence_stale_results)
    }

    /// Build the view. Nothing is fetched until it is mounted.
    ///
    /// # Errors
    /// Returns `SearchError::Builder` if no gateway was specified.
    pub fn build(self) -> Result<SearchView<G>, SearchError> {
        let gateway = self.gateway.ok_or_else(|| {
            SearchError::Builder("No gateway specified. Use .gateway()".to_string())
        })?;

        Ok(SearchView::from_parts(
            SearchState::new(self.query),
            gateway,
            self.rng.unwrap_or_else(StdRng::from_entropy),
            self.scroll_threshold,
            self.fence_stale_results,
        ))
    }
}
