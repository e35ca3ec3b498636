//! Adapters Layer
//!
//! Inbound adapters drive the application (HTTP); outbound adapters
//! implement domain ports (DNS).

pub mod inbound;
pub mod outbound;
