use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{build_http_client, endpoint, read_json, ProviderError, TimeSeriesProvider};

const PROVIDER: &str = "BLS";
const STATUS_SUCCEEDED: &str = "REQUEST_SUCCEEDED";

#[derive(Debug, Serialize)]
struct TimeSeriesRequest<'a> {
    seriesid: [&'a str; 1],
    startyear: String,
    endyear: String,
    catalog: bool,
    calculations: bool,
    annualaverage: bool,
    aspects: bool,
    registrationkey: &'a str,
}

/// BLS Public Data API v2 client.
pub struct BlsClient {
    client: Client,
    base_uri: String,
    api_key: String,
}

impl BlsClient {
    pub fn new(base_uri: String, api_key: String, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_uri,
            api_key,
        })
    }
}

#[async_trait]
impl TimeSeriesProvider for BlsClient {
    async fn timeseries(
        &self,
        series_id: &str,
        start_year: u16,
        end_year: u16,
    ) -> Result<Value, ProviderError> {
        let url = endpoint(&self.base_uri, &["timeseries", "data", ""])?;
        debug!("POST {url} series={series_id}");

        let payload = TimeSeriesRequest {
            seriesid: [series_id],
            startyear: start_year.to_string(),
            endyear: end_year.to_string(),
            catalog: true,
            calculations: true,
            annualaverage: true,
            aspects: true,
            registrationkey: &self.api_key,
        };

        let response = self.client.post(url).json(&payload).send().await?;
        let body = read_json(PROVIDER, response).await?;

        // BLS reports request-level failures inside a 200 body.
        if let Some(status) = request_status(&body) {
            if status != STATUS_SUCCEEDED {
                warn!("BLS series {series_id} answered with status {status}");
            }
        }

        Ok(body)
    }
}

fn request_status(body: &Value) -> Option<&str> {
    body.get("status").and_then(Value::as_str)
}
