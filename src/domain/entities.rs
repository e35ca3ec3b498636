//! Domain Entities - Request-scoped values
//!
//! Every entity here lives for the duration of a single check and is never
//! shared across requests.

use crate::domain::value_objects::MxProvider;
use serde::{Deserialize, Serialize};

/// Inbound query naming the domain to inspect.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MxQuery {
    #[serde(default)]
    pub domain: Option<String>,
}

/// A single mail exchange entry as returned by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    /// Hostname of the mail server
    pub exchange: String,
    /// MX preference (lower is preferred). Carried but not used for selection.
    pub priority: u16,
}

impl MxRecord {
    pub fn new(exchange: impl Into<String>, priority: u16) -> Self {
        Self {
            exchange: exchange.into(),
            priority,
        }
    }
}

/// Classification of a domain's primary MX host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// Domain exactly as supplied by the caller
    pub domain: String,
    /// Lowercased exchange of the first MX record
    pub mx_record: String,
    pub mx_provider: MxProvider,
    pub mx_security_gateway: bool,
}
