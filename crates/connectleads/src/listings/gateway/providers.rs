use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::normalize::RawListing;
use super::{GatewayBuildError, ListingProvider, ListingQuery, ProviderError};
use crate::listings::domain::JobType;

pub(crate) const ACTIVE_JOBS_LABEL: &str = "Active Jobs DB";
pub(crate) const JSEARCH_LABEL: &str = "JSearch";

const ACTIVE_JOBS_BASE_URL: &str = "https://active-jobs-db.p.rapidapi.com";
const JSEARCH_BASE_URL: &str = "https://jsearch.p.rapidapi.com";

fn build_client(timeout: Duration) -> Result<Client, GatewayBuildError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok())
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// Primary provider: a 24-hour active-listings index keyed by title and
/// location phrases.
pub struct ActiveJobsProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ActiveJobsProvider {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, GatewayBuildError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: ACTIVE_JOBS_BASE_URL.to_string(),
            api_key,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ListingProvider for ActiveJobsProvider {
    fn label(&self) -> &'static str {
        ACTIVE_JOBS_LABEL
    }

    async fn fetch(&self, query: &ListingQuery) -> Result<Vec<RawListing>, ProviderError> {
        let title_filter = format!("\"{}\"", query.position.label());
        let location_filter = format!(
            "\"{}\"",
            query.location.as_deref().unwrap_or("United States")
        );
        let url = format!("{}/active-ats-24h", self.base_url);
        debug!(%url, %title_filter, "querying active listings index");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("title_filter", title_filter.as_str()),
                ("location_filter", location_filter.as_str()),
            ])
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", "active-jobs-db.p.rapidapi.com")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Unavailable(format!(
                "unexpected status {status}"
            )));
        }

        let rows: Vec<ActiveJobsRow> = response
            .json()
            .await
            .map_err(|err| ProviderError::MalformedPayload(err.to_string()))?;

        Ok(rows
            .into_iter()
            .take(query.limit)
            .map(ActiveJobsRow::into_raw)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct ActiveJobsRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    company_name: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    salary_range: Option<String>,
    #[serde(default)]
    company_logo: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    posted_at: Option<String>,
}

impl ActiveJobsRow {
    fn into_raw(self) -> RawListing {
        RawListing {
            id: self.id,
            title: self.title,
            company: self.company_name,
            location: self.location,
            kind: None,
            salary: self.salary_range,
            logo_url: self.company_logo,
            description: self.description,
            responsibilities: Vec::new(),
            requirements: Vec::new(),
            posted_at: parse_timestamp(self.posted_at.as_deref()),
            deadline: None,
        }
    }
}

/// Secondary provider: a general job-search API with richer per-listing
/// detail behind a `data` envelope.
pub struct JsearchProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl JsearchProvider {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, GatewayBuildError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: JSEARCH_BASE_URL.to_string(),
            api_key,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ListingProvider for JsearchProvider {
    fn label(&self) -> &'static str {
        JSEARCH_LABEL
    }

    async fn fetch(&self, query: &ListingQuery) -> Result<Vec<RawListing>, ProviderError> {
        let search_term = query
            .keywords
            .clone()
            .filter(|keywords| !keywords.trim().is_empty())
            .unwrap_or_else(|| query.position.label().to_string());
        let url = format!("{}/search", self.base_url);
        debug!(%url, %search_term, "querying job search api");

        let mut request = self
            .client
            .get(&url)
            .query(&[
                ("page", "1"),
                ("num_pages", "1"),
                ("date_posted", "today"),
                ("query", search_term.as_str()),
                ("employment_types", "FULLTIME"),
            ])
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", "jsearch.p.rapidapi.com");
        if let Some(location) = query.location.as_deref() {
            request = request.query(&[("location", location)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Unavailable(format!(
                "unexpected status {status}"
            )));
        }

        let envelope: JsearchEnvelope = response
            .json()
            .await
            .map_err(|err| ProviderError::MalformedPayload(err.to_string()))?;
        let rows = envelope.data.ok_or_else(|| {
            ProviderError::MalformedPayload("response is missing the data array".to_string())
        })?;

        Ok(rows
            .into_iter()
            .take(query.limit)
            .map(JsearchRow::into_raw)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct JsearchEnvelope {
    #[serde(default)]
    data: Option<Vec<JsearchRow>>,
}

#[derive(Debug, Deserialize)]
struct JsearchRow {
    #[serde(default)]
    job_id: Option<String>,
    #[serde(default)]
    job_title: Option<String>,
    #[serde(default)]
    employer_name: Option<String>,
    #[serde(default)]
    employer_logo: Option<String>,
    #[serde(default)]
    job_city: Option<String>,
    #[serde(default)]
    job_state: Option<String>,
    #[serde(default)]
    job_country: Option<String>,
    #[serde(default)]
    job_is_remote: Option<bool>,
    #[serde(default)]
    job_min_salary: Option<f64>,
    #[serde(default)]
    job_max_salary: Option<f64>,
    #[serde(default)]
    job_salary_currency: Option<String>,
    #[serde(default)]
    job_posted_at_datetime_utc: Option<String>,
    #[serde(default)]
    job_description: Option<String>,
    #[serde(default)]
    job_highlights: JsearchHighlights,
}

#[derive(Debug, Default, Deserialize)]
struct JsearchHighlights {
    #[serde(rename = "Responsibilities", default)]
    responsibilities: Vec<String>,
    #[serde(rename = "Qualifications", default)]
    qualifications: Vec<String>,
}

impl JsearchRow {
    fn into_raw(self) -> RawListing {
        let location = match (&self.job_city, &self.job_state, &self.job_country) {
            (Some(city), Some(state), _) => Some(format!("{city}, {state}")),
            (Some(city), None, Some(country)) => Some(format!("{city}, {country}")),
            (Some(city), None, None) => Some(city.clone()),
            (None, _, Some(country)) => Some(country.clone()),
            _ => None,
        };

        let salary = match (self.job_min_salary, self.job_max_salary) {
            (Some(min), Some(max)) => Some(format!(
                "${min:.0}-${max:.0} {}",
                self.job_salary_currency.as_deref().unwrap_or("USD")
            )),
            _ => None,
        };

        let kind = match self.job_is_remote {
            Some(true) => Some(JobType::Remote),
            _ => None,
        };

        RawListing {
            id: self.job_id,
            title: self.job_title,
            company: self.employer_name,
            location,
            kind,
            salary,
            logo_url: self.employer_logo,
            description: self.job_description,
            responsibilities: self.job_highlights.responsibilities,
            requirements: self.job_highlights.qualifications,
            posted_at: parse_timestamp(self.job_posted_at_datetime_utc.as_deref()),
            deadline: None,
        }
    }
}
