//! Output view-models served to the career page.
//!
//! Key names are part of the page contract and are kept exactly as it reads them,
//! which is why the casing is mixed.

use serde::Serialize;
use serde_json::Value;

/// Body of `GET /career/stage1`.
#[derive(Debug, Clone, Serialize)]
pub struct Stage1Response {
    #[serde(rename = "stage1Structure")]
    pub stage1_structure: Stage1Structure,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stage1Structure {
    pub code: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub growth: GrowthSummary,
    /// Education distribution; `[]` when absent.
    pub education: Value,
    pub salary: SalarySummary,
}

/// Percent change in employment. `None` serializes as `null` when the region is missing
/// or its value does not parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GrowthSummary {
    pub state: Option<f64>,
    pub national: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GrowthDetail {
    pub state: RegionGrowth,
    pub national: RegionGrowth,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionGrowth {
    pub percent_change: Option<f64>,
    pub estimated_employment: Option<f64>,
    pub projected_employment: Option<f64>,
    /// `projected_employment - estimated_employment`, when both are known.
    pub employment_change: Option<f64>,
}

/// Annual wage percentiles per scope. Each list holds at most one record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SalarySummary {
    #[serde(rename = "NationalWagesList")]
    pub national: Vec<WagePercentiles>,
    #[serde(rename = "StateWagesList")]
    pub state: Vec<WagePercentiles>,
    #[serde(rename = "BLSAreaWagesList")]
    pub local: Vec<WagePercentiles>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WagePercentiles {
    pub pct10: Option<f64>,
    pub pct25: Option<f64>,
    pub median: Option<f64>,
    pub pct75: Option<f64>,
    pub pct90: Option<f64>,
}

/// Body of `GET /career/stage2`.
#[derive(Debug, Clone, Serialize)]
pub struct Stage2Structure {
    /// Raw certification finder payload; `null` when the lookup failed.
    pub certificates: Value,
    /// Raw license payload; `null` when the lookup failed.
    #[serde(rename = "CA_licenses")]
    pub ca_licenses: Value,
    pub code: Option<String>,
    pub technical_skills: Value,
    pub onet_riasec_code: Value,
    pub onestop_riasec_code: Value,
    pub growth: GrowthDetail,
    pub tasks: Vec<String>,
    pub related_onet_codes: Value,
    pub salary: SalarySummary,
    pub title: Option<String>,
    pub description: Option<String>,
    pub education: Value,
    pub video: Option<String>,
    pub job_data: JobData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobData {
    pub area: JobArea,
    pub data: Vec<JobCounts>,
    pub top10companies: Vec<CompanyJobCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobArea {
    pub short_name: Option<String>,
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobCounts {
    #[serde(rename = "_jobcount")]
    pub job_count: Option<f64>,
    #[serde(rename = "_companycount")]
    pub company_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyJobCount {
    pub name: Option<String>,
    pub jobcount: Option<f64>,
}

/// Body of `GET /career/all`: raw provider payloads, `null` for failed lookups.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllAvailableData {
    pub all_detail: Option<Value>,
    pub job_detail_data: Option<Value>,
    pub license_data: Option<Value>,
    pub certificate_data: Option<Value>,
    pub tech_skills_data: Option<Value>,
    pub riasec_code: Option<Value>,
}
