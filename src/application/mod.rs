//! Application Layer
//!
//! Use cases orchestrating domain services and ports.

mod mx_check_service;

pub use mx_check_service::MxCheckService;
