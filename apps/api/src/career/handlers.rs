//! Axum route handlers for the Career API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::career::aggregate::{self, LookupParams};
use crate::career::models::{AllAvailableData, Stage1Response, Stage2Structure};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CareerQuery {
    /// O*NET occupation code, e.g. `15-1211.01`.
    pub keyword: Option<String>,
    pub location: Option<String>,
    /// Job search radius in miles. Kept as text so a bad value is a JSON 400.
    pub radius: Option<String>,
    pub days: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TimeseriesQuery {
    #[serde(rename = "seriesID")]
    pub series_id: Option<String>,
    pub startyear: Option<u16>,
    pub endyear: Option<u16>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /career/stage1
pub async fn handle_stage1(
    State(state): State<AppState>,
    Query(query): Query<CareerQuery>,
) -> Result<Json<Stage1Response>, AppError> {
    let params = LookupParams::resolve(&query, &state.config)?;
    info!("Building stage1 for {} in {}", params.code, params.location);

    Ok(Json(aggregate::stage1(&state, &params).await?))
}

/// GET /career/stage2
pub async fn handle_stage2(
    State(state): State<AppState>,
    Query(query): Query<CareerQuery>,
) -> Result<Json<Stage2Structure>, AppError> {
    let params = LookupParams::resolve(&query, &state.config)?;
    info!("Building stage2 for {} in {}", params.code, params.location);

    Ok(Json(aggregate::stage2(&state, &params).await?))
}

/// GET /career/all
///
/// Raw provider payloads for inspection; nothing is normalized.
pub async fn handle_all(
    State(state): State<AppState>,
    Query(query): Query<CareerQuery>,
) -> Result<Json<AllAvailableData>, AppError> {
    let params = LookupParams::resolve(&query, &state.config)?;
    Ok(Json(aggregate::all_available(&state, &params).await))
}

/// GET /career/timeseries
///
/// BLS passthrough. The year window defaults to the configured one.
pub async fn handle_timeseries(
    State(state): State<AppState>,
    Query(query): Query<TimeseriesQuery>,
) -> Result<Json<Value>, AppError> {
    let series_id = query
        .series_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("seriesID is required".to_string()))?;

    let start_year = query.startyear.unwrap_or(state.config.bls_start_year);
    let end_year = query.endyear.unwrap_or(state.config.bls_end_year);
    if start_year > end_year {
        return Err(AppError::Validation(format!(
            "startyear {start_year} is after endyear {end_year}"
        )));
    }

    let data = state
        .timeseries
        .timeseries(series_id, start_year, end_year)
        .await?;

    Ok(Json(data))
}
