use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if provider credentials are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub career_one_stop_token: String,
    pub career_one_stop_user_id: String,
    pub career_one_stop_base_uri: String,
    pub onet_username: String,
    pub onet_password: String,
    pub onet_base_uri: String,
    pub bls_api_key: String,
    pub bls_base_uri: String,
    pub bls_start_year: u16,
    pub bls_end_year: u16,
    /// Per-call deadline for every outbound provider request.
    pub provider_timeout_secs: u64,
    /// Location used for the occupation detail lookup when the caller sends none.
    pub default_location: String,
    pub default_job_location: String,
    pub default_license_state: String,
    pub job_search_radius: u32,
    pub job_search_days: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            career_one_stop_token: require_env("CAREER_ONE_STOP_API_TOKEN")?,
            career_one_stop_user_id: require_env("CAREER_ONE_STOP_API_USERID")?,
            career_one_stop_base_uri: env_or(
                "CAREER_ONE_STOP_BASE_URI",
                "https://api.careeronestop.org",
            ),
            onet_username: require_env("ONET_USERNAME")?,
            onet_password: require_env("ONET_PASSWORD")?,
            onet_base_uri: env_or("ONET_BASE_URI", "https://services.onetcenter.org/ws"),
            bls_api_key: require_env("BLS_API_KEY")?,
            bls_base_uri: env_or("BLS_BASE_URI", "https://api.bls.gov/publicAPI/v2"),
            bls_start_year: parse_env("BLS_START_YEAR", 2019)?,
            bls_end_year: parse_env("BLS_END_YEAR", 2020)?,
            provider_timeout_secs: parse_env("PROVIDER_TIMEOUT_SECS", 10)?,
            default_location: env_or("DEFAULT_LOCATION", "US"),
            default_job_location: env_or("DEFAULT_JOB_LOCATION", "CA"),
            default_license_state: env_or("DEFAULT_LICENSE_STATE", "CA"),
            job_search_radius: parse_env("JOB_SEARCH_RADIUS", 100)?,
            job_search_days: parse_env("JOB_SEARCH_DAYS", 0)?,
            port: parse_env("PORT", 3000).context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
