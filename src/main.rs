//! MX Record API - classifies a domain's mail provider from its MX records
//!
//! This is the composition root that wires together all the components.

use mx_record_api::config::load_config;
use mx_record_api::{ApiServer, HickoryMxResolver, MxCheckService};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt().with_max_level(log_level).init();

    // ===== COMPOSITION ROOT =====

    // 1. Outbound adapter (DNS)
    let resolver = Arc::new(HickoryMxResolver::system_or_default());

    // 2. Application service
    let service = Arc::new(MxCheckService::new(resolver));

    // 3. Inbound adapter (HTTP)
    let server = ApiServer::new(cfg.listen_addr(), service);

    server.run().await
}
