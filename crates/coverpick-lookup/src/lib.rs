use std::time::Duration;

use serde::Serialize;

mod client;
mod query;
mod response;

#[cfg(test)]
mod tests;

pub use client::HttpLookupClient;
pub use query::{SearchQuery, ValidationError};

/// Title shown for candidates the service returned without one
pub const UNKNOWN_TITLE: &str = "Unknown title";

/// Thumbnail lookup provider interface
#[async_trait::async_trait]
pub trait ThumbnailLookup: Send + Sync {
    /// Look up cover thumbnails, in the order the service ranked them
    async fn lookup(&self, query: &SearchQuery) -> Result<Vec<Candidate>, LookupError>;

    /// Endpoint this provider talks to, for logging
    fn endpoint(&self) -> &str;
}

/// One normalized thumbnail result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub thumbnail_url: String,
    pub title: String,
    /// Product page the thumbnail was found on
    pub source_url: Option<String>,
    /// Service-side identifier (ASIN)
    pub id: Option<String>,
}

/// Body posted to the lookup service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupRequest {
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub max_results: u32,
}

impl LookupRequest {
    pub fn new(query: &SearchQuery, max_results: u32) -> Self {
        match query {
            SearchQuery::Title(title) => Self {
                title: Some(title.clone()),
                isbn: None,
                max_results,
            },
            SearchQuery::Isbn(isbn) => Self {
                title: None,
                isbn: Some(isbn.clone()),
                max_results,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("the request timed out after {after:?}; the service may be taking too long")]
    Timeout { after: Duration },

    #[error("{0}")]
    Service(String),

    #[error(
        "cannot connect to the lookup service ({0}); check that the backend service is running and reachable"
    )]
    Connectivity(String),

    #[error("unexpected response format from the lookup service")]
    UnexpectedResponseShape,
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Connectivity(err.to_string())
    }
}
