#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::DEFAULT_SUGGESTION_COUNT;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};

/// Local development backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "FLOW_DEFENCE_API_URL";

pub(crate) const MAX_TIMEOUT_SECONDS: u64 = 600;

/// Picks the override when one is given, the local default otherwise.
pub fn resolve_base_url(override_url: Option<String>) -> String {
    match override_url {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub connect_timeout_seconds: Option<u64>,
    pub suggestion_count: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            connect_timeout_seconds: None,
            suggestion_count: DEFAULT_SUGGESTION_COUNT,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: resolve_base_url(std::env::var(BASE_URL_ENV).ok()),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_range("api.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }
        if let Some(timeout) = self.connect_timeout_seconds {
            validate_range("api.connect_timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        validate_positive_number("ml.k", self.suggestion_count, 1)
    }
}
