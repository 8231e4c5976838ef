// SPDX-License-Identifier: MIT
//! HTTP client for the task API.
//!
//! Every call is bounded by the configured timeout and fails closed: a
//! transport error or an unexpected status becomes a boolean or an
//! [`ApiError`] value, never a panic or a process abort. There are no
//! retries — the seeder runs once and reports what it saw.

use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::config::SeedConfig;
use crate::samples::SampleTask;

/// The two ways a call to the task API can go wrong.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection failure, DNS error, or timeout.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with a status outside the accepted set.
    #[error("unexpected status: {0}")]
    UnexpectedStatus(StatusCode),
}

/// Client for the remote task-management API.
pub struct TaskApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl TaskApiClient {
    /// Build a client with the configured base URL and per-request timeout.
    pub fn new(config: &SeedConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Probe the collection endpoint for reachability.
    ///
    /// 400 counts as reachable: the endpoint rejects a bare GET because it
    /// wants pagination parameters, but a 400 still proves the API is up.
    pub async fn check_health(&self) -> bool {
        match self.http.get(&self.base_url).send().await {
            Ok(resp) => {
                let status = resp.status();
                let reachable = status == StatusCode::OK || status == StatusCode::BAD_REQUEST;
                if !reachable {
                    debug!(%status, "health probe got unexpected status");
                }
                reachable
            }
            Err(e) => {
                debug!("health probe failed: {e}");
                false
            }
        }
    }

    /// POST one record. True iff the API answered 201 Created.
    ///
    /// All other outcomes — 4xx, 5xx, transport failure — are uniformly
    /// false; the caller's tally is the only record of them.
    pub async fn create_task(&self, record: &SampleTask) -> bool {
        match self.http.post(&self.base_url).json(record).send().await {
            Ok(resp) if resp.status() == StatusCode::CREATED => true,
            Ok(resp) => {
                debug!(status = %resp.status(), title = %record.title, "create rejected");
                false
            }
            Err(e) => {
                debug!(title = %record.title, "create failed: {e}");
                false
            }
        }
    }

    /// GET the statistics sub-path and pass the JSON through untouched.
    pub async fn fetch_statistics(&self) -> Result<Value, ApiError> {
        let url = format!("{}/statistics", self.base_url);
        let resp = self.http.get(&url).send().await?;
        if resp.status() != StatusCode::OK {
            return Err(ApiError::UnexpectedStatus(resp.status()));
        }
        Ok(resp.json().await?)
    }

    /// Base URL the client is targeting.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
