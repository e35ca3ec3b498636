//! Hickory MX Resolver
//!
//! Implements MxResolver using the hickory async resolver on tokio.

use crate::domain::entities::MxRecord;
use crate::domain::errors::ResolutionError;
use crate::domain::ports::MxResolver;
use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::proto::rr::rdata::MX;
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

/// DNS-backed MX resolver.
///
/// Uses the resolver's own timeout and attempt defaults; no retry policy
/// is layered on top. The answer cache is disabled and queries are sent
/// as fully qualified names, so search domains are never appended.
pub struct HickoryMxResolver {
    resolver: TokioAsyncResolver,
}

impl HickoryMxResolver {
    /// Build a resolver from the host's system configuration
    /// (`/etc/resolv.conf` on unix).
    pub fn from_system_conf() -> anyhow::Result<Self> {
        let (config, opts) = read_system_conf()?;
        Ok(Self::with_config(config, opts))
    }

    /// Build a resolver using hickory's default upstream servers.
    pub fn with_default_upstream() -> Self {
        Self::with_config(ResolverConfig::default(), ResolverOpts::default())
    }

    fn with_config(config: ResolverConfig, opts: ResolverOpts) -> Self {
        Self {
            resolver: TokioAsyncResolver::tokio(config, uncached(opts)),
        }
    }

    /// System configuration if readable, default upstream otherwise.
    pub fn system_or_default() -> Self {
        match Self::from_system_conf() {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(
                    "failed to read system resolver config, using default upstream: {:?}",
                    e
                );
                Self::with_default_upstream()
            }
        }
    }
}

#[async_trait]
impl MxResolver for HickoryMxResolver {
    async fn resolve_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolutionError> {
        let lookup = self
            .resolver
            .mx_lookup(fully_qualified(domain))
            .await
            .map_err(|e| ResolutionError::lookup(domain, e))?;

        let records = to_records(lookup.iter());
        tracing::debug!("resolved {} MX records for {}", records.len(), domain);
        Ok(records)
    }
}

fn uncached(mut opts: ResolverOpts) -> ResolverOpts {
    opts.cache_size = 0;
    opts
}

fn fully_qualified(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{}.", domain)
    }
}

/// Convert resolver answers, preserving their order. Exchanges keep their
/// ASCII (punycode) form.
fn to_records<'a>(answers: impl Iterator<Item = &'a MX>) -> Vec<MxRecord> {
    answers
        .map(|mx| MxRecord::new(normalize_exchange(&mx.exchange().to_ascii()), mx.preference()))
        .collect()
}

/// Strip the trailing root label dot hickory keeps on FQDNs.
fn normalize_exchange(exchange: &str) -> String {
    exchange.trim_end_matches('.').to_string()
}
