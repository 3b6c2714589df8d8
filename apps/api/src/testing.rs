//! In-memory providers and fixtures shared by the unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::Config;
use crate::providers::{OccupationProvider, ProviderError, SkillsProvider, TimeSeriesProvider};
use crate::state::AppState;

/// `None` fields answer with `MissingData`, like a provider that returned nothing.
#[derive(Default)]
pub struct FakeOccupations {
    pub detail: Option<Value>,
    pub jobs: Option<Value>,
    pub licenses: Option<Value>,
    pub certificates: Option<Value>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl FakeOccupations {
    fn answer(&self, call: String, payload: &Option<Value>) -> Result<Value, ProviderError> {
        self.calls.lock().unwrap().push(call);
        payload
            .clone()
            .ok_or(ProviderError::MissingData("CareerOneStop"))
    }
}

#[async_trait]
impl OccupationProvider for FakeOccupations {
    async fn occupation_detail(&self, code: &str, location: &str) -> Result<Value, ProviderError> {
        self.answer(format!("detail {code} {location}"), &self.detail)
    }

    async fn job_search(
        &self,
        code: &str,
        location: &str,
        radius: u32,
        days: u32,
    ) -> Result<Value, ProviderError> {
        self.answer(format!("jobs {code} {location} {radius} {days}"), &self.jobs)
    }

    async fn licenses(&self, code: &str, state: &str) -> Result<Value, ProviderError> {
        self.answer(format!("licenses {code} {state}"), &self.licenses)
    }

    async fn certifications(&self, code: &str) -> Result<Value, ProviderError> {
        self.answer(format!("certifications {code}"), &self.certificates)
    }
}

#[derive(Default)]
pub struct FakeSkills {
    pub technology_skills: Option<Value>,
    pub interests: Option<Value>,
}

#[async_trait]
impl SkillsProvider for FakeSkills {
    async fn technology_skills(&self, _code: &str) -> Result<Value, ProviderError> {
        self.technology_skills
            .clone()
            .ok_or(ProviderError::MissingData("O*NET"))
    }

    async fn interests(&self, _code: &str) -> Result<Value, ProviderError> {
        self.interests
            .clone()
            .ok_or(ProviderError::MissingData("O*NET"))
    }
}

#[derive(Default)]
pub struct FakeTimeSeries {
    pub series: Option<Value>,
}

#[async_trait]
impl TimeSeriesProvider for FakeTimeSeries {
    async fn timeseries(
        &self,
        series_id: &str,
        start_year: u16,
        end_year: u16,
    ) -> Result<Value, ProviderError> {
        let mut series = self
            .series
            .clone()
            .ok_or(ProviderError::MissingData("BLS"))?;
        series["requested"] = json!({ "series": series_id, "start": start_year, "end": end_year });
        Ok(series)
    }
}

pub fn test_config() -> Config {
    Config {
        career_one_stop_token: "token".to_string(),
        career_one_stop_user_id: "user".to_string(),
        career_one_stop_base_uri: "http://localhost:1".to_string(),
        onet_username: "onet".to_string(),
        onet_password: "secret".to_string(),
        onet_base_uri: "http://localhost:1/ws".to_string(),
        bls_api_key: "bls".to_string(),
        bls_base_uri: "http://localhost:1/publicAPI/v2".to_string(),
        bls_start_year: 2019,
        bls_end_year: 2020,
        provider_timeout_secs: 1,
        default_location: "US".to_string(),
        default_job_location: "CA".to_string(),
        default_license_state: "CA".to_string(),
        job_search_radius: 100,
        job_search_days: 0,
        port: 0,
        rust_log: "debug".to_string(),
    }
}

pub fn test_state(
    occupations: FakeOccupations,
    skills: FakeSkills,
    timeseries: FakeTimeSeries,
) -> AppState {
    AppState {
        config: test_config(),
        occupations: Arc::new(occupations),
        skills: Arc::new(skills),
        timeseries: Arc::new(timeseries),
    }
}

/// A trimmed CareerOneStop occupation detail record.
pub fn sample_detail() -> Value {
    json!({
        "OnetCode": "15-1211.01",
        "OnetTitle": "Health Informatics Specialists",
        "OnetDescription": "Apply knowledge of nursing and informatics to assist in the design, development, and ongoing modification of computerized health care systems.",
        "COSVideoURL": "https://cdn.careeronestop.org/OccVids/OccupationVideos/15-1211.00.mp4",
        "Projections": {
            "Projections": [
                {
                    "StateName": "United States",
                    "PerCentChange": "10",
                    "EstimatedEmployment": "538,800",
                    "ProjectedEmployment": "592,800"
                },
                {
                    "StateName": "California",
                    "PerCentChange": "11.7",
                    "EstimatedEmployment": "66,300",
                    "ProjectedEmployment": "74,060"
                }
            ]
        },
        "EducationTraining": {
            "EducationType": [
                { "EducationLevel": "Bachelor's degree", "Value": "45" },
                { "EducationLevel": "Master's degree", "Value": "18" }
            ]
        },
        "Wages": {
            "NationalWagesList": [
                { "RateType": "Annual", "Pct10": "60,040", "Pct25": "76,640", "Median": "99,270", "Pct75": "125,640", "Pct90": "156,620" },
                { "RateType": "Hourly", "Pct10": "28.87", "Pct25": "36.85", "Median": "47.72", "Pct75": "60.40", "Pct90": "75.30" }
            ],
            "StateWagesList": [
                { "RateType": "Hourly", "Median": "55.10" }
            ],
            "BLSAreaWagesList": []
        },
        "Tasks": [
            { "TaskDescription": "Maintain data dictionaries." },
            { "TaskDescription": "Train end users on new systems." }
        ],
        "RelatedOnetTitles": { "15-1211.00": "Computer Systems Analysts" },
        "InterestDataList": [
            { "Title": "Conventional", "Description": "Work with data and detail." }
        ]
    })
}
