//! Search gateway for the Perenual species-list API
//!
//! One outbound `GET {base}/species-list` per search. Every failure mode
//! (bad endpoint, transport error, non-2xx status, malformed body) is logged
//! and replaced by the embedded fallback plants, so `search` itself never
//! fails. No retries, no caching, no timeout beyond the transport's own.

use serde::Serialize;

use crate::config::GatewayConfig;
use crate::fallback::filter_reference_plants;
use crate::plant::{PlantRecord, SpeciesListResponse};

/// Number of records requested from the API (and the cap on what is returned)
pub const PAGE_SIZE: usize = 10;

// ============================================================================
// Errors
// ============================================================================

/// Why a remote lookup did not produce records
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("invalid species-list endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("plant API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("plant API returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed species-list response: {0}")]
    Decode(#[from] serde_json::Error),
}

// ============================================================================
// Outcome
// ============================================================================

/// Where a result list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    Remote,
    Fallback,
    /// Blank query; nothing was looked up
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub records: Vec<PlantRecord>,
    pub source: SearchSource,
}

// ============================================================================
// Gateway
// ============================================================================

pub struct PlantSearchGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl PlantSearchGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("plantvision/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    /// Search for plants by name. Never fails; see module docs.
    pub async fn search(&self, query: &str) -> Vec<PlantRecord> {
        self.search_detailed(query).await.records
    }

    /// Like [`search`](Self::search), but also reports whether the records
    /// came from the API or from the fallback set.
    pub async fn search_detailed(&self, query: &str) -> SearchOutcome {
        let query = query.trim();
        if query.is_empty() {
            return SearchOutcome {
                records: Vec::new(),
                source: SearchSource::Skipped,
            };
        }

        let start = std::time::Instant::now();
        match self.fetch_remote(query).await {
            Ok(records) => {
                tracing::debug!(
                    "Plant API search '{}' returned {} results in {:?}",
                    query,
                    records.len(),
                    start.elapsed()
                );
                SearchOutcome {
                    records,
                    source: SearchSource::Remote,
                }
            }
            Err(e) => {
                let records = filter_reference_plants(query);
                tracing::warn!(
                    "Plant API search '{}' failed ({}); serving {} fallback plants",
                    query,
                    e,
                    records.len()
                );
                SearchOutcome {
                    records,
                    source: SearchSource::Fallback,
                }
            }
        }
    }

    /// Build the species-list URL for `query`.
    ///
    /// The URL carries the API key, so it must not be logged.
    pub fn species_list_url(&self, query: &str) -> Result<reqwest::Url, GatewayError> {
        let raw = format!(
            "{}/species-list?key={}&q={}&page=1&per_page={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(query),
            PAGE_SIZE,
        );
        reqwest::Url::parse(&raw)
            .map_err(|e| GatewayError::InvalidEndpoint(format!("{}: {}", self.config.base_url, e)))
    }

    async fn fetch_remote(&self, query: &str) -> Result<Vec<PlantRecord>, GatewayError> {
        let url = self.species_list_url(query)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }

        let body = response.bytes().await?;
        let envelope: SpeciesListResponse = serde_json::from_slice(&body)?;

        let mut records = envelope.into_records();
        records.truncate(PAGE_SIZE);
        Ok(records)
    }
}
