// SPDX-License-Identifier: MIT
//! Seeder configuration.
//!
//! The base URL and request timeout are carried in an explicit [`SeedConfig`]
//! that is handed to the API client at construction — no process-wide
//! mutable state. Defaults match a locally running task API.

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1/tasks";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for one seeder run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Base collection endpoint of the task API (no trailing slash).
    pub base_url: String,
    /// Timeout applied to every HTTP request.
    pub timeout: Duration,
}

impl SeedConfig {
    /// Build a config from optional CLI overrides, falling back to defaults.
    pub fn new(base_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}
