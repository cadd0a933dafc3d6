use thiserror::Error;

/// Message shown inline whenever a fetch fails, whatever the cause
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch recipes. Please try again.";

/// Errors that can occur while searching for recipes
#[derive(Error, Debug)]
pub enum SearchError {
    /// Network or client-level failure talking to the recipe API
    #[error("Failed to reach recipe API: {0}")]
    Transport(#[from] reqwest::Error),

    /// Recipe API answered with a non-success status
    #[error("Recipe API returned status {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not the expected `{ hits: [{ recipe }] }` payload
    #[error("Malformed recipe payload: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The fetch task ended without producing a result
    #[error("Fetch task did not complete: {0}")]
    Aborted(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl SearchError {
    /// The single user-facing message for every fetch failure
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILURE_MESSAGE
    }
}
