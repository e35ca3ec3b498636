//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.

use serde::Serialize;
use std::fmt;

/// Email provider inferred from the primary MX hostname.
///
/// This is a closed set: every hostname maps to exactly one label,
/// with `Unknown` as the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MxProvider {
    #[serde(rename = "Google Workspace")]
    GoogleWorkspace,
    #[serde(rename = "Microsoft 365")]
    Microsoft365,
    #[serde(rename = "Proofpoint")]
    Proofpoint,
    #[serde(rename = "Cisco Email Security")]
    CiscoEmailSecurity,
    #[serde(rename = "Mimecast")]
    Mimecast,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl MxProvider {
    /// Human-readable label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoogleWorkspace => "Google Workspace",
            Self::Microsoft365 => "Microsoft 365",
            Self::Proofpoint => "Proofpoint",
            Self::CiscoEmailSecurity => "Cisco Email Security",
            Self::Mimecast => "Mimecast",
            Self::Unknown => "Unknown",
        }
    }
}

impl Default for MxProvider {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for MxProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
