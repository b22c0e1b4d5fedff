//! Client configuration from the environment

use crate::service::{self, Service};
use thiserror::Error;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ASSIST_SERVICE: {0} (expected a service id or `auto`)")]
    InvalidService(String),
}

/// Configuration for the terminal client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server root; `/ask` is appended by the HTTP client
    pub backend_url: String,
    /// Initial service filter, `None` for auto-detect
    pub service: Option<Service>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            service: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset and empty values
    /// fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend_url = get("ASSIST_BACKEND_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let service = match get("ASSIST_SERVICE") {
            Some(raw) => {
                service::parse_filter(&raw).map_err(|e| ConfigError::InvalidService(e.to_string()))?
            }
            None => None,
        };

        Ok(Self {
            backend_url,
            service,
        })
    }
}
