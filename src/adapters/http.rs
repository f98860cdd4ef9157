use std::time::Duration;

use reqwest::Client;

use crate::core::PageFetcher;
use crate::utils::error::{CheckError, Result};

pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) \
                              AppleWebKit/537.36 (KHTML, like Gecko) \
                              Chrome/123.0.0.0 Safari/537.36";

/// Single-shot GET with a browser User-Agent. No retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| CheckError::FetchError {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("Making request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(CheckError::HttpStatusError {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        // Declared charset wins; undecodable bytes become U+FFFD.
        let body = response.text_with_charset("utf-8").await?;
        Ok(body)
    }
}
