use std::future::Future;

use anyhow::Result;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::constants::GEO_JSON;
use crate::error::UpstreamError;

/// A single best-effort GET against the weather API.
///
/// Handlers depend on this trait rather than on `reqwest` directly so they can
/// be exercised against canned responses.
pub trait Fetch: Send + Sync + 'static {
    fn fetch_json<T: DeserializeOwned + Send>(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<T, UpstreamError>> + Send;
}

/// Fetches `url`, logging any failure and reporting it as `None`
pub async fn fetch<F: Fetch, T: DeserializeOwned + Send>(client: &F, url: &str) -> Option<T> {
    match client.fetch_json::<T>(url).await {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::error!(url, error = %e, "Upstream request failed");
            None
        }
    }
}

/// `reqwest`-backed client sending the NWS identification headers
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static(GEO_JSON));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

impl Fetch for HttpClient {
    async fn fetch_json<T: DeserializeOwned + Send>(&self, url: &str) -> Result<T, UpstreamError> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
