//! Infrastructure layer. Process-level concerns for hosts embedding the
//! EIP core: environment configuration and tracing setup.
//!
//! Gateway port implementations (HTTP, auth, wire format) live outside this
//! crate.

pub mod config;
pub mod telemetry;
