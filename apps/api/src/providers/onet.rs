use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde_json::Value;
use tracing::debug;

use super::{build_http_client, endpoint, read_json, ProviderError, SkillsProvider};

const PROVIDER: &str = "O*NET";

/// O*NET Web Services client, authenticated with HTTP basic auth.
pub struct OnetClient {
    client: Client,
    base_uri: String,
    username: String,
    password: String,
}

impl OnetClient {
    pub fn new(
        base_uri: String,
        username: String,
        password: String,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_uri,
            username,
            password,
        })
    }

    /// Fetches one summary section of an occupation report.
    async fn summary(&self, code: &str, section: &str) -> Result<Value, ProviderError> {
        let url = endpoint(
            &self.base_uri,
            &["online", "occupations", code, "summary", section],
        )?;
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        read_json(PROVIDER, response).await
    }
}

#[async_trait]
impl SkillsProvider for OnetClient {
    async fn technology_skills(&self, code: &str) -> Result<Value, ProviderError> {
        self.summary(code, "technology_skills").await
    }

    async fn interests(&self, code: &str) -> Result<Value, ProviderError> {
        self.summary(code, "interests").await
    }
}
