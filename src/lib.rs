//! Paginated recipe search against the Edamam recipe API.
//!
//! A [`SearchView`] plays the part of a search page: it holds the query,
//! the current page and the accumulated results, fetches the next page when
//! scrolled near the bottom, and starts over on submit.

pub mod accumulator;
pub mod builder;
pub mod config;
pub mod error;
pub mod gateway;
pub mod images;
pub mod keywords;
pub mod model;
pub mod pagination;
pub mod render;
pub mod scroll;
pub mod state;
pub mod view;

pub use accumulator::ResultAccumulator;
pub use builder::SearchViewBuilder;
pub use config::SearchConfig;
pub use error::{SearchError, FETCH_FAILURE_MESSAGE};
pub use gateway::{EdamamGateway, FetchGateway};
pub use images::ImageAllowList;
pub use keywords::{effective_query, FALLBACK_KEYWORDS};
pub use model::{Ingredient, Recipe};
pub use pagination::{PageCursor, PAGE_SIZE};
pub use scroll::{ScrollFeed, ScrollMetrics, ScrollSentinel};
pub use state::{Completion, FetchState, FetchTicket, SearchState};
pub use view::{SearchView, ViewEvent};

/// Fetch a single page of recipes using configuration from the environment.
///
/// An empty query is replaced by a random fallback keyword.
pub async fn search_recipes(query: &str, page: PageCursor) -> Result<Vec<Recipe>, SearchError> {
    let config = SearchConfig::load()?;
    let gateway = EdamamGateway::new(&config)?;
    let term = effective_query(query, &mut rand::thread_rng());
    gateway.search(&term, page).await
}
