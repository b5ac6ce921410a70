use std::time::Duration;

use async_trait::async_trait;
use coverpick_config::lookup::LookupConfig;
use reqwest::Url;

use crate::response::{normalize, service_error_message};
use crate::{Candidate, LookupError, LookupRequest, SearchQuery, ThumbnailLookup};

/// Talks to the thumbnail lookup service over HTTP
#[derive(Clone)]
pub struct HttpLookupClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
    max_results: u32,
}

impl HttpLookupClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration, max_results: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            timeout,
            max_results,
        }
    }

    pub fn from_config(config: &LookupConfig) -> Self {
        Self::new(config.endpoint_url(), config.timeout(), config.max_results)
    }

    /// Check that the service answers on its `/health` route
    pub async fn health(&self) -> Result<(), LookupError> {
        let url = Url::parse(&self.endpoint)
            .and_then(|u| u.join("/health"))
            .map_err(|e| LookupError::Connectivity(format!("invalid endpoint: {e}")))?;

        let request = self.client.get(url).send();
        let response = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| LookupError::Timeout {
                after: self.timeout,
            })??;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Service(service_error_message(
                status.as_u16(),
                &body,
            )));
        }

        Ok(())
    }

    /// One request/response exchange, without the timeout
    async fn exchange(&self, request: &LookupRequest) -> Result<Vec<Candidate>, LookupError> {
        tracing::debug!("POST {} {:?}", self.endpoint, request);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Lookup response status: {}", status);

        let body = response.text().await?;

        if !status.is_success() {
            return Err(LookupError::Service(service_error_message(
                status.as_u16(),
                &body,
            )));
        }

        normalize(&body)
    }
}

#[async_trait]
impl ThumbnailLookup for HttpLookupClient {
    async fn lookup(&self, query: &SearchQuery) -> Result<Vec<Candidate>, LookupError> {
        let request = LookupRequest::new(query, self.max_results);

        // Dropping the exchange future on timeout aborts the request
        match tokio::time::timeout(self.timeout, self.exchange(&request)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!("Lookup timed out after {:?}", self.timeout);
                Err(LookupError::Timeout {
                    after: self.timeout,
                })
            }
        }
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
