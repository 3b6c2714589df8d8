//! Provider clients: the only modules that talk to the external labor-market APIs.
//!
//! Each provider sits behind a trait so aggregation can run against any backend.
//! Clients return the provider's raw JSON; reshaping happens in `career::normalize`.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde_json::Value;
use thiserror::Error;

pub mod bls;
pub mod careeronestop;
pub mod onet;

pub use bls::BlsClient;
pub use careeronestop::CareerOneStopClient;
pub use onet::OnetClient;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} returned status {status}: {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("{0} response did not contain the expected data")]
    MissingData(&'static str),

    #[error("Invalid provider URL: {0}")]
    InvalidUrl(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Provider traits
// ────────────────────────────────────────────────────────────────────────────

/// CareerOneStop lookups keyed by O*NET code.
#[async_trait]
pub trait OccupationProvider: Send + Sync {
    /// Returns the first `OccupationDetail` record. Its absence is an error.
    async fn occupation_detail(&self, code: &str, location: &str) -> Result<Value, ProviderError>;

    async fn job_search(
        &self,
        code: &str,
        location: &str,
        radius: u32,
        days: u32,
    ) -> Result<Value, ProviderError>;

    async fn licenses(&self, code: &str, state: &str) -> Result<Value, ProviderError>;

    async fn certifications(&self, code: &str) -> Result<Value, ProviderError>;
}

/// O*NET Web Services lookups.
#[async_trait]
pub trait SkillsProvider: Send + Sync {
    async fn technology_skills(&self, code: &str) -> Result<Value, ProviderError>;

    /// RIASEC interest profile for the occupation.
    async fn interests(&self, code: &str) -> Result<Value, ProviderError>;
}

/// BLS time-series lookups.
#[async_trait]
pub trait TimeSeriesProvider: Send + Sync {
    async fn timeseries(
        &self,
        series_id: &str,
        start_year: u16,
        end_year: u16,
    ) -> Result<Value, ProviderError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Shared HTTP helpers
// ────────────────────────────────────────────────────────────────────────────

/// Builds the HTTP client shared by a provider. Every call fails after `timeout`.
pub fn build_http_client(timeout: Duration) -> Result<Client, ProviderError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Appends percent-encoded path segments to a base URI.
pub(crate) fn endpoint<S: AsRef<str>>(base: &str, segments: &[S]) -> Result<Url, ProviderError> {
    let mut url = Url::parse(base).map_err(|e| ProviderError::InvalidUrl(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| ProviderError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments.iter().map(|s| s.as_ref()));
    Ok(url)
}

/// Reads a provider response as JSON, turning non-2xx statuses into `ProviderError::Api`.
pub(crate) async fn read_json(
    provider: &'static str,
    response: Response,
) -> Result<Value, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ProviderError::Api {
            provider,
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json::<Value>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_segments_to_bare_host() {
        let url = endpoint("https://api.careeronestop.org", &["v1", "occupation", "uid"]).unwrap();
        assert_eq!(url.as_str(), "https://api.careeronestop.org/v1/occupation/uid");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = endpoint("https://services.onetcenter.org/ws/", &["online", "occupations"]).unwrap();
        assert_eq!(url.as_str(), "https://services.onetcenter.org/ws/online/occupations");
    }

    #[test]
    fn test_endpoint_percent_encodes_locations() {
        let url = endpoint("https://api.careeronestop.org", &["v1", "San Diego, CA"]).unwrap();
        assert!(url.as_str().contains("San%20Diego"));
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_endpoint_encodes_slashes_inside_segments() {
        let url = endpoint("https://api.careeronestop.org", &["v1", "a/b"]).unwrap();
        assert!(url.as_str().ends_with("/v1/a%2Fb"));
    }

    #[test]
    fn test_endpoint_trailing_empty_segment_adds_slash() {
        let url = endpoint("https://api.bls.gov/publicAPI/v2", &["timeseries", "data", ""]).unwrap();
        assert_eq!(url.as_str(), "https://api.bls.gov/publicAPI/v2/timeseries/data/");
    }

    #[test]
    fn test_endpoint_rejects_relative_base() {
        let result = endpoint("not a url", &["v1"]);
        assert!(matches!(result, Err(ProviderError::InvalidUrl(_))));
    }
}
