//! Normalizer: pure functions that reshape provider payloads into the stage view-models.
//!
//! Nothing here fails: missing or malformed input becomes `None`, `null` or `[]`.

use serde_json::Value;

use crate::career::models::{
    CompanyJobCount, GrowthDetail, GrowthSummary, JobArea, JobCounts, JobData, RegionGrowth,
    SalarySummary, Stage1Structure, Stage2Structure, WagePercentiles,
};
use crate::models::careeronestop::{
    Company, JobSearchResult, OccupationDetail, Projection, Task, WageLists, WageRecord,
};

/// `StateName` of the national projection record.
pub const NATIONAL_REGION: &str = "United States";
/// Wage records of any other rate type (e.g. "Hourly") are ignored.
pub const ANNUAL_RATE_TYPE: &str = "Annual";
pub const TOP_COMPANY_LIMIT: usize = 10;
const JOB_AREA_TYPES: [&str; 2] = ["country", "political"];

// ────────────────────────────────────────────────────────────────────────────
// Number coercion
// ────────────────────────────────────────────────────────────────────────────

/// Parses provider numbers the way the page expects: thousands separators are
/// dropped, leading whitespace is skipped and the longest numeric prefix wins
/// (`"5.0%"` is 5.0). Returns `None` when there is no numeric prefix.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let text = cleaned.trim_start();
    let len = numeric_prefix_len(text);
    if len == 0 {
        return None;
    }
    text[..len].parse::<f64>().ok()
}

fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if has_digits || frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

fn parse_field(raw: &Option<String>) -> Option<f64> {
    raw.as_deref().and_then(parse_decimal)
}

// ────────────────────────────────────────────────────────────────────────────
// Growth
// ────────────────────────────────────────────────────────────────────────────

pub fn national_projection(projections: &[Projection]) -> Option<&Projection> {
    projections
        .iter()
        .find(|p| p.state_name.as_deref() == Some(NATIONAL_REGION))
}

/// The first record that is not the national one, including records without a name.
pub fn state_projection(projections: &[Projection]) -> Option<&Projection> {
    projections
        .iter()
        .find(|p| p.state_name.as_deref() != Some(NATIONAL_REGION))
}

pub fn growth_summary(projections: &[Projection]) -> GrowthSummary {
    let percent = |p: Option<&Projection>| p.and_then(|p| parse_field(&p.per_cent_change));
    GrowthSummary {
        state: percent(state_projection(projections)),
        national: percent(national_projection(projections)),
    }
}

pub fn growth_detail(projections: &[Projection]) -> GrowthDetail {
    GrowthDetail {
        state: region_growth(state_projection(projections)),
        national: region_growth(national_projection(projections)),
    }
}

pub fn region_growth(projection: Option<&Projection>) -> RegionGrowth {
    let Some(projection) = projection else {
        return RegionGrowth::default();
    };

    let estimated = parse_field(&projection.estimated_employment);
    let projected = parse_field(&projection.projected_employment);

    RegionGrowth {
        percent_change: parse_field(&projection.per_cent_change),
        estimated_employment: estimated,
        projected_employment: projected,
        employment_change: estimated.zip(projected).map(|(e, p)| p - e),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wages
// ────────────────────────────────────────────────────────────────────────────

pub fn annual_wages(wages: &WageLists) -> SalarySummary {
    SalarySummary {
        national: annual_wage_list(&wages.national_wages_list),
        state: annual_wage_list(&wages.state_wages_list),
        local: annual_wage_list(&wages.bls_area_wages_list),
    }
}

/// Singleton list holding the first "Annual" record, or empty.
pub fn annual_wage_list(records: &[WageRecord]) -> Vec<WagePercentiles> {
    records
        .iter()
        .find(|r| r.rate_type.as_deref() == Some(ANNUAL_RATE_TYPE))
        .map(wage_percentiles)
        .into_iter()
        .collect()
}

fn wage_percentiles(record: &WageRecord) -> WagePercentiles {
    WagePercentiles {
        pct10: parse_field(&record.pct10),
        pct25: parse_field(&record.pct25),
        median: parse_field(&record.median),
        pct75: parse_field(&record.pct75),
        pct90: parse_field(&record.pct90),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Job postings
// ────────────────────────────────────────────────────────────────────────────

pub fn top_companies(companies: &[Company]) -> Vec<CompanyJobCount> {
    companies
        .iter()
        .take(TOP_COMPANY_LIMIT)
        .map(|c| CompanyJobCount {
            name: c.company_name.clone(),
            jobcount: parse_field(&c.job_count),
        })
        .collect()
}

pub fn job_summary(jobs: &JobSearchResult) -> JobData {
    JobData {
        area: JobArea {
            short_name: jobs.jobs_keyword_locations.location.clone(),
            types: JOB_AREA_TYPES.iter().map(|t| t.to_string()).collect(),
        },
        data: vec![JobCounts {
            job_count: parse_field(&jobs.jobcount),
            company_count: jobs.companies.len(),
        }],
        top10companies: top_companies(&jobs.companies),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pass-through fields
// ────────────────────────────────────────────────────────────────────────────

pub fn task_descriptions(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .filter_map(|t| t.task_description.clone())
        .collect()
}

/// `null` becomes `[]`; anything else passes through.
pub fn list_or_empty(value: Value) -> Value {
    if value.is_null() {
        Value::Array(Vec::new())
    } else {
        value
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Stage assembly
// ────────────────────────────────────────────────────────────────────────────

pub fn build_stage1(detail: OccupationDetail) -> Stage1Structure {
    Stage1Structure {
        growth: growth_summary(&detail.projections.projections),
        salary: annual_wages(&detail.wages),
        education: list_or_empty(detail.education_training.education_type),
        code: detail.onet_code,
        title: detail.onet_title,
        description: detail.onet_description,
    }
}

/// Secondary lookups feeding stage2. `None` means the lookup failed.
#[derive(Debug, Default)]
pub struct Stage2Sources {
    pub jobs: Option<Value>,
    pub technical_skills: Option<Value>,
    pub riasec: Option<Value>,
    pub licenses: Option<Value>,
    pub certificates: Option<Value>,
}

pub fn build_stage2(detail: OccupationDetail, sources: Stage2Sources) -> Stage2Structure {
    let jobs = sources
        .jobs
        .as_ref()
        .map(JobSearchResult::from_raw)
        .unwrap_or_default();

    Stage2Structure {
        certificates: sources.certificates.unwrap_or(Value::Null),
        ca_licenses: sources.licenses.unwrap_or(Value::Null),
        technical_skills: list_or_empty(sources.technical_skills.unwrap_or(Value::Null)),
        onet_riasec_code: list_or_empty(sources.riasec.unwrap_or(Value::Null)),
        onestop_riasec_code: list_or_empty(detail.interest_data_list),
        growth: growth_detail(&detail.projections.projections),
        tasks: task_descriptions(&detail.tasks),
        related_onet_codes: list_or_empty(detail.related_onet_titles),
        salary: annual_wages(&detail.wages),
        education: list_or_empty(detail.education_training.education_type),
        code: detail.onet_code,
        title: detail.onet_title,
        description: detail.onet_description,
        video: detail.cos_video_url,
        job_data: job_summary(&jobs),
    }
}
