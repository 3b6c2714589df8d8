//! Aggregation: orchestrates provider calls for one request and hands the
//! results to the normalizer.
//!
//! The core occupation detail is fetched first and its failure aborts the request.
//! The secondary lookups have no ordering dependency and run concurrently; each one
//! that fails is logged and replaced by its default.

use serde_json::Value;
use tracing::{error, warn};

use crate::career::handlers::CareerQuery;
use crate::career::models::{AllAvailableData, Stage1Response, Stage2Structure};
use crate::career::normalize::{build_stage1, build_stage2, Stage2Sources};
use crate::config::Config;
use crate::errors::AppError;
use crate::models::careeronestop::OccupationDetail;
use crate::providers::careeronestop::license_state;
use crate::providers::ProviderError;
use crate::state::AppState;

/// Fully resolved lookup inputs: caller values with configured defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupParams {
    pub code: String,
    /// Location for the occupation detail lookup.
    pub location: String,
    /// Caller location for the job search, used by the raw `/all` view.
    pub job_location: String,
    pub license_state: String,
    pub radius: u32,
    pub days: u32,
}

impl LookupParams {
    pub fn resolve(query: &CareerQuery, config: &Config) -> Result<Self, AppError> {
        let code = non_blank(query.keyword.as_deref()).ok_or_else(|| {
            AppError::Validation("keyword (O*NET occupation code) is required".to_string())
        })?;
        let location = non_blank(query.location.as_deref());

        Ok(Self {
            license_state: location
                .as_deref()
                .map(license_state)
                .unwrap_or(&config.default_license_state)
                .to_string(),
            job_location: location
                .clone()
                .unwrap_or_else(|| config.default_job_location.clone()),
            location: location.unwrap_or_else(|| config.default_location.clone()),
            radius: parse_count("radius", query.radius.as_deref(), config.job_search_radius)?,
            days: parse_count("days", query.days.as_deref(), config.job_search_days)?,
            code,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_count(name: &str, value: Option<&str>, default: u32) -> Result<u32, AppError> {
    match non_blank(value) {
        None => Ok(default),
        Some(v) => v.parse().map_err(|_| {
            AppError::Validation(format!("{name} must be a non-negative integer, got {v:?}"))
        }),
    }
}

/// Summary view: core detail only.
pub async fn stage1(state: &AppState, params: &LookupParams) -> Result<Stage1Response, AppError> {
    let detail = core_detail(state, params).await?;
    Ok(Stage1Response {
        stage1_structure: build_stage1(OccupationDetail::from_raw(&detail)),
    })
}

/// Full view: core detail plus job postings, skills, RIASEC, licenses and certificates.
///
/// Job postings are always searched in the configured job location.
pub async fn stage2(state: &AppState, params: &LookupParams) -> Result<Stage2Structure, AppError> {
    let detail = core_detail(state, params).await?;
    let sources = secondary_lookups(state, params, &state.config.default_job_location).await;
    Ok(build_stage2(OccupationDetail::from_raw(&detail), sources))
}

/// Every provider payload, unnormalized. Never fails; missing payloads are `null`.
pub async fn all_available(state: &AppState, params: &LookupParams) -> AllAvailableData {
    let (detail, sources) = tokio::join!(
        state
            .occupations
            .occupation_detail(&params.code, &params.location),
        secondary_lookups(state, params, &params.job_location),
    );

    AllAvailableData {
        all_detail: optional("occupation detail", &params.code, detail),
        job_detail_data: sources.jobs,
        license_data: sources.licenses,
        certificate_data: sources.certificates,
        tech_skills_data: sources.technical_skills,
        riasec_code: sources.riasec,
    }
}

async fn core_detail(state: &AppState, params: &LookupParams) -> Result<Value, AppError> {
    state
        .occupations
        .occupation_detail(&params.code, &params.location)
        .await
        .map_err(|e| {
            error!("Occupation detail for {} failed: {e}", params.code);
            AppError::Aggregation(format!(
                "Data retrieval failed. CareerOneStop returned no occupation detail for {}.",
                params.code
            ))
        })
}

async fn secondary_lookups(
    state: &AppState,
    params: &LookupParams,
    job_location: &str,
) -> Stage2Sources {
    let code = params.code.as_str();
    let (jobs, technical_skills, riasec, licenses, certificates) = tokio::join!(
        state
            .occupations
            .job_search(code, job_location, params.radius, params.days),
        state.skills.technology_skills(code),
        state.skills.interests(code),
        state.occupations.licenses(code, &params.license_state),
        state.occupations.certifications(code),
    );

    Stage2Sources {
        jobs: optional("job search", code, jobs),
        technical_skills: optional("technology skills", code, technical_skills),
        riasec: optional("RIASEC interests", code, riasec),
        licenses: optional("licenses", code, licenses),
        certificates: optional("certifications", code, certificates),
    }
}

fn optional(lookup: &str, code: &str, result: Result<Value, ProviderError>) -> Option<Value> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{lookup} lookup for {code} failed, continuing without it: {e}");
            None
        }
    }
}
