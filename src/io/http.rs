use crate::io::{ContentFetcher, FetchError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub struct HttpContentFetcher {
    pub client: Client,
    pub base_url: String,
}

impl HttpContentFetcher {
    pub fn new(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    // route paths are either document relative ("home.md") or rooted ("/content/x.md"),
    // both resolve against the configured base
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl ContentFetcher for HttpContentFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url_for(path);
        tracing::debug!("HttpContentFetcher: GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}
