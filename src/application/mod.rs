//! Application layer: gateway port traits and EIP use-case orchestration.
//!
//! This module depends only on `crate::domain`, never on `crate::infra`.

pub mod ports;
pub mod services;

pub use ports::{BandwidthApi, CloudGateway, EipApi, PortApi};
pub use services::association::AssociationController;
