use std::sync::Arc;

use crate::config::Config;
use crate::providers::{OccupationProvider, SkillsProvider, TimeSeriesProvider};

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// CareerOneStop: occupation detail, job postings, licenses, certifications.
    pub occupations: Arc<dyn OccupationProvider>,
    /// O*NET Web Services: technology skills and RIASEC interests.
    pub skills: Arc<dyn SkillsProvider>,
    /// BLS Public Data API.
    pub timeseries: Arc<dyn TimeSeriesProvider>,
}
