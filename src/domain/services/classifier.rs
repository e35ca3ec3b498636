//! MX Classifier Service
//!
//! Pure domain logic mapping an MX hostname to a provider and a
//! security-gateway flag. This service has NO external dependencies.

use crate::domain::value_objects::MxProvider;

/// Ordered provider rules. The first rule with a matching fragment wins.
const PROVIDER_RULES: &[(&[&str], MxProvider)] = &[
    (&["google", "gmail"], MxProvider::GoogleWorkspace),
    (&["outlook", "microsoft"], MxProvider::Microsoft365),
    (&["gslb.pphosted.com", "ppe-hosted.com"], MxProvider::Proofpoint),
    (&["iphmx.com"], MxProvider::CiscoEmailSecurity),
    (&["mimecast.com"], MxProvider::Mimecast),
];

/// Hostname fragments of known email security gateways.
const SECURITY_GATEWAY_FRAGMENTS: &[&str] = &[
    "proofpoint",
    "pphosted.com",
    "ppe-hosted.com",
    "barracuda",
    "mimecast",
    "iphmx.com",
];

/// Classifier for MX hostnames.
///
/// Both checks expect an already-lowercased hostname and never fail. They
/// are evaluated independently: a host can be a known provider and a
/// security gateway at the same time.
pub struct Classifier;

impl Classifier {
    /// Map a lowercased MX hostname to its email provider.
    pub fn classify_provider(host: &str) -> MxProvider {
        PROVIDER_RULES
            .iter()
            .find(|(fragments, _)| fragments.iter().any(|f| host.contains(f)))
            .map(|(_, provider)| *provider)
            .unwrap_or(MxProvider::Unknown)
    }

    /// Whether a lowercased MX hostname belongs to a security gateway.
    pub fn classify_security_gateway(host: &str) -> bool {
        SECURITY_GATEWAY_FRAGMENTS.iter().any(|f| host.contains(f))
    }
}
