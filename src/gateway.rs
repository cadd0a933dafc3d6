use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Request};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::model::{Recipe, SearchResponse};
use crate::pagination::PageCursor;

const USER_AGENT: &str = concat!("recipe-search/", env!("CARGO_PKG_VERSION"));

/// Seam between the view and the recipe API
#[async_trait]
pub trait FetchGateway: Send + Sync {
    /// Fetch one page of recipes for an already-resolved search term
    async fn search(&self, query: &str, page: PageCursor) -> Result<Vec<Recipe>, SearchError>;
}

/// Edamam recipe search over HTTP
pub struct EdamamGateway {
    client: Client,
    base_url: String,
    app_id: Option<String>,
    app_key: Option<String>,
}

impl EdamamGateway {
    /// Create a gateway from configuration
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(EdamamGateway {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String, app_id: String, app_key: String) -> Self {
        EdamamGateway {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id: Some(app_id),
            app_key: Some(app_key),
        }
    }

    /// Build the GET request for one page.
    ///
    /// Missing credentials are sent as empty parameters; the API rejects the
    /// request rather than this client refusing to start.
    pub fn build_request(&self, query: &str, page: PageCursor) -> Result<Request, SearchError> {
        if self.app_id.is_none() || self.app_key.is_none() {
            warn!("Edamam credentials are not configured; the request will be rejected");
        }
        let window = page.offset_window();
        let from = window.start.to_string();
        let to = window.end.to_string();

        let request = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("q", query),
                ("app_id", self.app_id.as_deref().unwrap_or_default()),
                ("app_key", self.app_key.as_deref().unwrap_or_default()),
                ("from", from.as_str()),
                ("to", to.as_str()),
            ])
            .build()?;

        Ok(request)
    }
}

#[async_trait]
impl FetchGateway for EdamamGateway {
    async fn search(&self, query: &str, page: PageCursor) -> Result<Vec<Recipe>, SearchError> {
        let request = self.build_request(query, page)?;
        debug!("Searching {:?} page {}", query, page);

        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let body = response.text().await?;
        let payload: SearchResponse = serde_json::from_str(&body)?;
        let recipes = payload.into_recipes();
        debug!("Received {} recipes for page {}", recipes.len(), page);
        Ok(recipes)
    }
}
