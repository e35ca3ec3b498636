//! MX Check Service - Main application use case
//!
//! Validates the query, resolves MX records through the resolver port and
//! classifies the primary exchange. This is the interface the HTTP adapter
//! calls.

use crate::domain::entities::ClassificationResult;
use crate::domain::errors::{CheckError, ResolutionError};
use crate::domain::ports::MxResolver;
use crate::domain::services::Classifier;
use std::sync::Arc;

/// MX check service - main application use case.
pub struct MxCheckService {
    resolver: Arc<dyn MxResolver>,
}

impl MxCheckService {
    /// Create a new check service over the given resolver.
    pub fn new(resolver: Arc<dyn MxResolver>) -> Self {
        Self { resolver }
    }

    /// Classify the primary MX host of `domain`.
    ///
    /// An absent or empty domain fails with `CheckError::MissingDomain`
    /// before any lookup. Otherwise the first record in resolver order is
    /// used; an empty answer is reported as `ResolutionError::NoRecords`.
    pub async fn check(&self, domain: Option<&str>) -> Result<ClassificationResult, CheckError> {
        let domain = match domain {
            Some(d) if !d.is_empty() => d,
            _ => return Err(CheckError::MissingDomain),
        };

        let records = self.resolver.resolve_mx(domain).await?;
        let primary = records
            .first()
            .ok_or_else(|| ResolutionError::no_records(domain))?;

        let mx_record = primary.exchange.to_lowercase();
        let mx_provider = Classifier::classify_provider(&mx_record);
        let mx_security_gateway = Classifier::classify_security_gateway(&mx_record);

        tracing::debug!(
            "classified {} via {} -> provider={} gateway={}",
            domain,
            mx_record,
            mx_provider,
            mx_security_gateway
        );

        Ok(ClassificationResult {
            domain: domain.to_string(),
            mx_record,
            mx_provider,
            mx_security_gateway,
        })
    }
}
