//! HCSO Elastic IP core: EIP lifecycle and port association control.
//!
//! The crate observes and drives remote EIP state through the gateway port
//! traits in [`application::ports`]; it owns no wire format.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod application;
pub mod domain;
pub mod infra;

pub use application::AssociationController;
pub use domain::{EipAddress, EipError, EipStatus, GatewayError, PollPolicy};
