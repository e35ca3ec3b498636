//! MX Record API Library
//!
//! This module exposes the MX classification components for use in
//! integration tests and as a library.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use adapters::inbound::ApiServer;
pub use adapters::outbound::HickoryMxResolver;
pub use application::MxCheckService;
pub use config::load_config;
pub use domain::entities::{ClassificationResult, MxQuery, MxRecord};
pub use domain::errors::{CheckError, ResolutionError};
pub use domain::ports::MxResolver;
pub use domain::services::Classifier;
pub use domain::value_objects::MxProvider;
