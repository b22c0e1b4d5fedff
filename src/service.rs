//! Government service catalogue
//!
//! The closed set of services the retrieval backend indexes. A session's
//! service filter is an `Option<Service>`; `None` means auto-detect.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A government service the backend can narrow retrieval to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    RationCard,
    BirthCertificate,
    UnemploymentAllowance,
}

impl Service {
    pub const ALL: [Service; 3] = [
        Service::RationCard,
        Service::BirthCertificate,
        Service::UnemploymentAllowance,
    ];

    /// Wire identifier, as the backend names the service
    pub fn id(self) -> &'static str {
        match self {
            Service::RationCard => "ration_card",
            Service::BirthCertificate => "birth_certificate",
            Service::UnemploymentAllowance => "unemployment_allowance",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Service::RationCard => "Ration Card",
            Service::BirthCertificate => "Birth Certificate",
            Service::UnemploymentAllowance => "Unemployment Allowance",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service: {0}")]
pub struct UnknownService(pub String);

impl FromStr for Service {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Service::ALL
            .into_iter()
            .find(|service| service.id() == normalized)
            .ok_or_else(|| UnknownService(s.trim().to_string()))
    }
}

/// Parse a user-supplied filter. `auto`, `all` and `none` clear the filter.
pub fn parse_filter(s: &str) -> Result<Option<Service>, UnknownService> {
    match s.trim().to_ascii_lowercase().as_str() {
        "auto" | "all" | "none" => Ok(None),
        other => other.parse().map(Some),
    }
}
