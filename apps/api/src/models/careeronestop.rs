//! Typed views over CareerOneStop payloads.
//!
//! Every field is optional. A field with an unexpected JSON type falls back to its
//! default instead of failing the record. In lists only the offending entries are
//! dropped. Numeric fields are kept as the raw
//! text the provider sent (it mixes strings and numbers) for `parse_decimal`.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// `OccupationDetail[0]` from `/v1/occupation`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OccupationDetail {
    #[serde(deserialize_with = "loose_text")]
    pub onet_code: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub onet_title: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub onet_description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub projections: ProjectionSet,
    #[serde(deserialize_with = "lenient")]
    pub wages: WageLists,
    #[serde(deserialize_with = "lenient")]
    pub education_training: EducationTraining,
    #[serde(deserialize_with = "lenient_vec")]
    pub tasks: Vec<Task>,
    pub related_onet_titles: Value,
    pub interest_data_list: Value,
    #[serde(rename = "COSVideoURL", deserialize_with = "loose_text")]
    pub cos_video_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProjectionSet {
    #[serde(deserialize_with = "lenient_vec")]
    pub projections: Vec<Projection>,
}

/// Employment projection for one region ("United States" or a state).
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Projection {
    #[serde(deserialize_with = "loose_text")]
    pub state_name: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub per_cent_change: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub estimated_employment: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub projected_employment: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WageLists {
    #[serde(deserialize_with = "lenient_vec")]
    pub national_wages_list: Vec<WageRecord>,
    #[serde(deserialize_with = "lenient_vec")]
    pub state_wages_list: Vec<WageRecord>,
    #[serde(rename = "BLSAreaWagesList", deserialize_with = "lenient_vec")]
    pub bls_area_wages_list: Vec<WageRecord>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WageRecord {
    #[serde(deserialize_with = "loose_text")]
    pub rate_type: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub pct10: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub pct25: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub median: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub pct75: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub pct90: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EducationTraining {
    /// Education attainment distribution, passed through to the view-model.
    pub education_type: Value,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Task {
    #[serde(deserialize_with = "loose_text")]
    pub task_description: Option<String>,
}

/// Response of `/v1/jobsearch`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JobSearchResult {
    #[serde(deserialize_with = "loose_text")]
    pub jobcount: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub companies: Vec<Company>,
    #[serde(deserialize_with = "lenient")]
    pub jobs_keyword_locations: KeywordLocation,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Company {
    #[serde(deserialize_with = "loose_text")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub job_count: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KeywordLocation {
    #[serde(deserialize_with = "loose_text")]
    pub location: Option<String>,
}

impl OccupationDetail {
    /// Reads a raw detail record; anything that is not an object yields an empty detail.
    pub fn from_raw(raw: &Value) -> Self {
        Self::deserialize(raw).unwrap_or_default()
    }
}

impl JobSearchResult {
    pub fn from_raw(raw: &Value) -> Self {
        Self::deserialize(raw).unwrap_or_default()
    }
}

/// Accepts a string or a number as text; anything else is `None`.
fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Deserializes `T`, falling back to `T::default()` when the shape does not match.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Keeps the array elements that match `T` and drops the rest. Non-arrays are empty.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_reads_provider_field_names() {
        let raw = json!({
            "OnetCode": "15-1211.01",
            "OnetTitle": "Health Informatics Specialists",
            "COSVideoURL": "https://cdn.careeronestop.org/OccVids/OccupationVideos/15-1211.00.mp4",
            "Projections": { "Projections": [
                { "StateName": "United States", "PerCentChange": "10", "EstimatedEmployment": "538,800", "ProjectedEmployment": "592,800" }
            ]},
            "Wages": { "BLSAreaWagesList": [{ "RateType": "Annual", "Median": 101560 }] },
            "Tasks": [{ "TaskDescription": "Maintain data dictionaries." }]
        });

        let detail = OccupationDetail::from_raw(&raw);
        assert_eq!(detail.onet_code.as_deref(), Some("15-1211.01"));
        assert!(detail.cos_video_url.is_some());
        assert_eq!(detail.projections.projections.len(), 1);
        assert_eq!(
            detail.projections.projections[0].estimated_employment.as_deref(),
            Some("538,800")
        );
        assert_eq!(detail.wages.bls_area_wages_list[0].median.as_deref(), Some("101560"));
        assert!(detail.wages.national_wages_list.is_empty());
        assert_eq!(detail.tasks.len(), 1);
    }

    #[test]
    fn test_malformed_sections_fall_back_to_defaults() {
        let raw = json!({
            "OnetTitle": "Actuaries",
            "Projections": "unavailable",
            "Wages": { "NationalWagesList": { "RateType": "Annual" } },
            "Tasks": null
        });

        let detail = OccupationDetail::from_raw(&raw);
        assert_eq!(detail.onet_title.as_deref(), Some("Actuaries"));
        assert!(detail.projections.projections.is_empty());
        assert!(detail.wages.national_wages_list.is_empty());
        assert!(detail.tasks.is_empty());
        assert!(detail.education_training.education_type.is_null());
    }

    #[test]
    fn test_bad_list_entries_are_dropped_individually() {
        let raw = json!({
            "Projections": { "Projections": [
                { "StateName": "United States", "PerCentChange": "5.0" },
                { "StateName": "California", "PerCentChange": "7.0" },
                null
            ]},
            "Wages": { "StateWagesList": [7, { "RateType": "Annual", "Median": "98,000" }] },
            "Tasks": [{ "TaskDescription": "A" }, "B"]
        });

        let detail = OccupationDetail::from_raw(&raw);
        assert_eq!(detail.projections.projections.len(), 2);
        assert_eq!(
            detail.projections.projections[1].per_cent_change.as_deref(),
            Some("7.0")
        );
        assert_eq!(detail.wages.state_wages_list.len(), 1);
        assert_eq!(detail.wages.state_wages_list[0].median.as_deref(), Some("98,000"));
        assert_eq!(detail.tasks.len(), 1);
        assert_eq!(detail.tasks[0].task_description.as_deref(), Some("A"));
    }

    #[test]
    fn test_non_object_detail_is_empty() {
        let detail = OccupationDetail::from_raw(&json!("nope"));
        assert!(detail.onet_code.is_none());
        assert!(detail.projections.projections.is_empty());
    }

    #[test]
    fn test_job_search_reads_counts() {
        let raw = json!({
            "Jobcount": "1,204",
            "Companies": [{ "CompanyName": "Kaiser Permanente", "JobCount": 31 }],
            "JobsKeywordLocations": { "Location": "CA" }
        });

        let jobs = JobSearchResult::from_raw(&raw);
        assert_eq!(jobs.jobcount.as_deref(), Some("1,204"));
        assert_eq!(jobs.companies[0].job_count.as_deref(), Some("31"));
        assert_eq!(jobs.jobs_keyword_locations.location.as_deref(), Some("CA"));
    }
}
