use reqwest::Client;

use crate::api::{api_hero, api_hero_redacted};
use crate::config::Config;
use crate::error::{FetchError, FetchResult};
use crate::types::HeroRecord;

/// Anything that can look a hero up by identifier.
pub trait HeroSource {
    async fn fetch_hero(&self, id: u32) -> FetchResult<HeroRecord>;
}

/// Talks to the live catalog over HTTP. No caching: every call is one request.
#[derive(Debug, Clone)]
pub struct HeroClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HeroClient {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, config))
    }

    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

impl HeroSource for HeroClient {
    async fn fetch_hero(&self, id: u32) -> FetchResult<HeroRecord> {
        let transport = move |source: reqwest::Error| FetchError::Transport { id, source };

        log::debug!("GET {}", api_hero_redacted(&self.base_url, id));
        let url = api_hero(&self.base_url, &self.api_key, id);
        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        log::debug!("hero {id}: HTTP {status}");
        if !status.is_success() {
            return Err(FetchError::Status { id, status });
        }

        let body = response.text().await.map_err(transport)?;
        HeroRecord::from_body(id, &body)
    }
}
