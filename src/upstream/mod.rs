//! Client for the remote roster provider.
//!
//! Each call issues exactly one request. Nothing is cached, coalesced or retried;
//! callers get whatever snapshot the provider returned at that moment.

use std::time::Duration;

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Participant;

/// Body shape published by the provider.
#[derive(Debug, Deserialize)]
struct RosterEnvelope {
    #[serde(default)]
    neighbors: Option<Vec<Participant>>,
}

/// HTTP client bound to one roster endpoint.
#[derive(Debug, Clone)]
pub struct RosterProvider {
    client: reqwest::Client,
    url: String,
}

impl RosterProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the provider's JSON body without interpreting it.
    pub async fn fetch_raw(&self) -> Result<serde_json::Value, AppError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Roster provider returned status {}", status);
            return Err(AppError::Upstream(format!(
                "API request failed with status {}",
                status.as_u16()
            )));
        }

        Ok(response.json().await?)
    }

    /// Fetch and decode the roster. A body without `neighbors` is an empty roster.
    pub async fn fetch_roster(&self) -> Result<Vec<Participant>, AppError> {
        let body = self.fetch_raw().await?;
        let envelope: RosterEnvelope = serde_json::from_value(body)?;
        let roster = envelope.neighbors.unwrap_or_default();

        tracing::debug!("Fetched roster with {} participants", roster.len());
        Ok(roster)
    }

    /// Fetch the roster, reporting any failure as an empty roster.
    pub async fn fetch_roster_or_empty(&self) -> Vec<Participant> {
        match self.fetch_roster().await {
            Ok(roster) => roster,
            Err(e) => {
                tracing::error!("Error fetching neighbors data: {}", e);
                Vec::new()
            }
        }
    }
}
