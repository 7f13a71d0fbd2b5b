mod normalize;
mod providers;
mod sample;

pub use normalize::RawListing;
pub use providers::{ActiveJobsProvider, JsearchProvider};

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::ListingsConfig;
use crate::listings::domain::{Job, JobPosition};

const SOURCED_POSITIONS: [JobPosition; 5] = JobPosition::sourced();
const CURATED_POSITIONS: [JobPosition; 4] = JobPosition::curated();
const REJECTED_SOURCE_LABEL: &str = "none";

/// A single upstream source of listings.
///
/// Providers are tried in registration order; any error simply hands the
/// query to the next link in the chain. Rows come back partial and are
/// canonicalized by the gateway, never by the provider itself.
#[async_trait]
pub trait ListingProvider: Send + Sync {
    fn label(&self) -> &'static str;

    async fn fetch(&self, query: &ListingQuery) -> Result<Vec<RawListing>, ProviderError>;
}

/// Failure of a single provider attempt. Always recovered by the gateway.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider unreachable: {0}")]
    Unavailable(String),
    #[error("provider payload failed normalization: {0}")]
    MalformedPayload(String),
    #[error("provider call exceeded the {0:?} attempt deadline")]
    TimedOut(Duration),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}

/// Error raised while assembling the provider chain.
#[derive(Debug, thiserror::Error)]
pub enum GatewayBuildError {
    #[error("failed to build provider HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Raw inbound search request, before position validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    pub position: String,
    pub location: Option<String>,
    pub keywords: Option<String>,
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn for_position(position: JobPosition) -> Self {
        Self {
            position: position.label().to_string(),
            ..Self::default()
        }
    }
}

/// Validated query handed to providers and the sample synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub position: JobPosition,
    pub location: Option<String>,
    pub keywords: Option<String>,
    pub limit: usize,
}

/// Result of a gateway search. The search itself is total: validation
/// failures and exhausted provider chains are reported here, never raised.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub message: String,
    #[serde(rename = "source")]
    pub source_label: &'static str,
    pub data: Vec<Job>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchReport {
    fn rejected(allowed: &[JobPosition]) -> Self {
        let allowed = allowed
            .iter()
            .map(|position| position.label())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            message: "Invalid position specified".to_string(),
            source_label: REJECTED_SOURCE_LABEL,
            data: Vec::new(),
            error: Some(format!("position must be one of: {allowed}")),
        }
    }

    /// True when the request itself was rejected before any source was
    /// consulted.
    pub fn was_rejected(&self) -> bool {
        self.source_label == REJECTED_SOURCE_LABEL
    }
}

/// Knobs for the chain that do not depend on any particular provider.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub attempt_timeout: Duration,
    pub default_limit: usize,
    pub max_limit: usize,
    pub include_data_analyst: bool,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self::from(&ListingsConfig::default())
    }
}

impl From<&ListingsConfig> for GatewaySettings {
    fn from(config: &ListingsConfig) -> Self {
        Self {
            attempt_timeout: config.attempt_timeout,
            default_limit: config.default_limit,
            max_limit: config.max_limit,
            include_data_analyst: config.include_data_analyst,
        }
    }
}

/// Stateless front door for listing searches.
///
/// Holds an ordered provider chain and the settings shared by every attempt.
/// Each search walks the chain until a provider succeeds and falls back to
/// the synthetic sample set when none does.
pub struct ListingGateway {
    providers: Vec<Box<dyn ListingProvider>>,
    settings: GatewaySettings,
}

impl ListingGateway {
    /// Builds the production chain. Without credentials no provider is
    /// registered and every search degrades straight to sample data.
    pub fn from_config(config: &ListingsConfig) -> Result<Self, GatewayBuildError> {
        let mut providers: Vec<Box<dyn ListingProvider>> = Vec::new();
        if let Some(api_key) = &config.rapidapi_key {
            providers.push(Box::new(ActiveJobsProvider::new(
                api_key.clone(),
                config.attempt_timeout,
            )?));
            providers.push(Box::new(JsearchProvider::new(
                api_key.clone(),
                config.attempt_timeout,
            )?));
        }

        Ok(Self {
            providers,
            settings: GatewaySettings::from(config),
        })
    }

    pub fn with_providers(
        providers: Vec<Box<dyn ListingProvider>>,
        settings: GatewaySettings,
    ) -> Self {
        Self {
            providers,
            settings,
        }
    }

    pub fn allowed_positions(&self) -> &'static [JobPosition] {
        if self.settings.include_data_analyst {
            &SOURCED_POSITIONS
        } else {
            &CURATED_POSITIONS
        }
    }

    /// Runs the chain for one request. Never fails: the worst outcome is a
    /// schema-valid synthetic response carrying the last provider error as
    /// advisory metadata.
    pub async fn search(&self, request: SearchRequest) -> SearchReport {
        let allowed = self.allowed_positions();
        let position = JobPosition::parse(&request.position).filter(|p| allowed.contains(p));
        let Some(position) = position else {
            warn!(position = %request.position, "rejecting search for unknown position");
            return SearchReport::rejected(allowed);
        };

        let query = ListingQuery {
            position,
            location: trimmed(request.location),
            keywords: trimmed(request.keywords),
            limit: request
                .limit
                .unwrap_or(self.settings.default_limit)
                .clamp(1, self.settings.max_limit),
        };
        let fetched_at = Utc::now();

        let mut last_error = None;
        for provider in &self.providers {
            match self.attempt(provider.as_ref(), &query).await {
                Ok(rows) => {
                    let data =
                        normalize::canonicalize_all(rows, &query, provider.label(), fetched_at);
                    info!(
                        source = provider.label(),
                        count = data.len(),
                        "serving listings from provider"
                    );
                    return SearchReport {
                        message: format!("Using data from {}", provider.label()),
                        source_label: provider.label(),
                        data,
                        error: None,
                    };
                }
                Err(err) => {
                    warn!(
                        source = provider.label(),
                        error = %err,
                        "listing provider failed, advancing the chain"
                    );
                    last_error = Some(format!("{}: {}", provider.label(), err));
                }
            }
        }

        let rows = sample::sample_listings(&query);
        let data =
            normalize::canonicalize_all(rows, &query, sample::SAMPLE_SOURCE_LABEL, fetched_at);
        info!(count = data.len(), "serving synthetic sample listings");

        let message = if last_error.is_some() {
            "Provider requests failed, using sample data instead".to_string()
        } else {
            "Using sample data (provider credentials not configured)".to_string()
        };

        SearchReport {
            message,
            source_label: sample::SAMPLE_SOURCE_LABEL,
            data,
            error: last_error,
        }
    }

    // Timeouts are treated exactly like any other transport failure: the
    // in-flight future is dropped and the chain advances.
    async fn attempt(
        &self,
        provider: &dyn ListingProvider,
        query: &ListingQuery,
    ) -> Result<Vec<RawListing>, ProviderError> {
        match tokio::time::timeout(self.settings.attempt_timeout, provider.fetch(query)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ProviderError::TimedOut(self.settings.attempt_timeout)),
        }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
