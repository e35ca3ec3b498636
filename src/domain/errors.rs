//! Domain Errors
//!
//! Failures carry full detail for server-side logs. What reaches the
//! client is limited to `CheckError::public_message`.

use axum::http::StatusCode;

/// Any failure to obtain a usable MX record for a domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("MX lookup for {domain} failed: {reason}")]
    Lookup { domain: String, reason: String },
    #[error("no MX records returned for {domain}")]
    NoRecords { domain: String },
}

impl ResolutionError {
    pub fn lookup(domain: &str, reason: impl ToString) -> Self {
        Self::Lookup {
            domain: domain.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn no_records(domain: &str) -> Self {
        Self::NoRecords {
            domain: domain.to_string(),
        }
    }
}

/// Outcome of a failed MX check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("domain is required")]
    MissingDomain,
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

impl CheckError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingDomain => StatusCode::BAD_REQUEST,
            Self::Resolution(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed client-facing message; never includes resolver detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingDomain => "Domain is required",
            Self::Resolution(_) => "Failed to resolve MX records",
        }
    }
}
