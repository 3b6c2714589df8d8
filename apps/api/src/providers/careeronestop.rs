use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::{build_http_client, endpoint, read_json, OccupationProvider, ProviderError};

const PROVIDER: &str = "CareerOneStop";

/// Sections the occupation detail is expected to carry. Their absence is logged, not fatal.
const EXPECTED_DETAIL_KEYS: &[&str] = &[
    "Tasks",
    "Wages",
    "OnetTitle",
    "OnetDescription",
    "EducationTraining",
    "COSVideoURL",
];

/// Flags requesting every optional section of the occupation detail.
const DETAIL_FLAGS: &[&str] = &[
    "training",
    "videos",
    "tasks",
    "wages",
    "interest",
    "dwas",
    "stateLMILinks",
    "skills",
    "ability",
    "knowledge",
    "relatedOnetTitles",
    "ooh",
    "alternateOnetTitles",
    "projectedEmployment",
];

/// CareerOneStop REST client, authenticated with a bearer token.
pub struct CareerOneStopClient {
    client: Client,
    base_uri: String,
    user_id: String,
    token: String,
}

impl CareerOneStopClient {
    pub fn new(
        base_uri: String,
        user_id: String,
        token: String,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_uri,
            user_id,
            token,
        })
    }

    /// Issues `GET /v1/{resource}/{userId}/{segments...}`.
    async fn get(
        &self,
        resource: &str,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Value, ProviderError> {
        let mut full: Vec<&str> = vec!["v1", resource, self.user_id.as_str()];
        full.extend_from_slice(segments);

        let url = endpoint(&self.base_uri, &full)?;
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?;

        read_json(PROVIDER, response).await
    }
}

#[async_trait]
impl OccupationProvider for CareerOneStopClient {
    async fn occupation_detail(&self, code: &str, location: &str) -> Result<Value, ProviderError> {
        let query: Vec<(&str, &str)> = DETAIL_FLAGS.iter().map(|flag| (*flag, "true")).collect();
        let body = self.get("occupation", &[code, location], &query).await?;

        let detail = first_occupation_detail(body).ok_or(ProviderError::MissingData(PROVIDER))?;

        let missing = missing_detail_keys(&detail);
        if !missing.is_empty() {
            warn!(
                "Incomplete occupation detail for {code}: missing {}",
                missing.join(", ")
            );
        }

        Ok(detail)
    }

    async fn job_search(
        &self,
        code: &str,
        location: &str,
        radius: u32,
        days: u32,
    ) -> Result<Value, ProviderError> {
        let radius = radius.to_string();
        let days = days.to_string();
        self.get("jobsearch", &[code, location, radius.as_str(), days.as_str()], &[])
            .await
    }

    async fn licenses(&self, code: &str, state: &str) -> Result<Value, ProviderError> {
        self.get("license", &[code, state, "0", "0", "0", "10"], &[])
            .await
    }

    async fn certifications(&self, code: &str) -> Result<Value, ProviderError> {
        self.get(
            "certificationfinder",
            &[
                code,
                "0",
                "0",
                "0",
                "0",
                "0",
                "0",
                "0",
                "0",
                "0",
                "0",
            ],
            &[],
        )
        .await
    }
}

/// Extracts `OccupationDetail[0]` from a detail response body.
fn first_occupation_detail(mut body: Value) -> Option<Value> {
    match body.get_mut("OccupationDetail")? {
        Value::Array(details) if !details.is_empty() => Some(details.swap_remove(0)),
        _ => None,
    }
}

fn missing_detail_keys(detail: &Value) -> Vec<&'static str> {
    EXPECTED_DETAIL_KEYS
        .iter()
        .copied()
        .filter(|key| detail.get(key).map_or(true, Value::is_null))
        .collect()
}

/// Derives the state used for license lookups from a free-form location.
///
/// `"San Diego, CA"` becomes `"CA"`; a location without a comma is used as-is.
pub fn license_state(location: &str) -> &str {
    match location.rsplit_once(',') {
        Some((_, state)) if !state.trim().is_empty() => state.trim(),
        _ => location.trim(),
    }
}
