//! Infrastructure Layer
//!
//! Cross-cutting concerns shared by the adapters.

pub mod shutdown;

pub use shutdown::shutdown_signal;
