//! MX Resolver Port
//!
//! Defines the interface for looking up mail exchange records.

use crate::domain::entities::MxRecord;
use crate::domain::errors::ResolutionError;
use async_trait::async_trait;

/// Resolver for a domain's MX records.
///
/// This is an outbound port that abstracts the DNS layer.
/// The application service only sees the ordered record list.
#[async_trait]
pub trait MxResolver: Send + Sync {
    /// Look up MX records for `domain`.
    ///
    /// Records are returned in the order the underlying resolver produced
    /// them. Implementations do not retry.
    async fn resolve_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolutionError>;
}
