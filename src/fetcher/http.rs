//! reqwest-backed index fetcher

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::FETCH_TIMEOUT_MS;
use crate::fetcher::IndexFetcher;
use crate::fetcher::error::FetchError;

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent("go-version-vars")
            .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl IndexFetcher for HttpFetcher {
    async fn fetch_index(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Index returned status {}: {}", status, url);
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
