//! Domain layer: EIP entity, status model, and classification rules.
//!
//! This module has zero imports from `crate::application`, `crate::infra`,
//! or `tokio`. All functions are synchronous and take data in, returning
//! data out.

pub mod allocation;
pub mod bandwidth;
pub mod config;
pub mod eip;
pub mod error;
pub mod port;
pub mod status;

pub use allocation::AllocateRequest;
pub use bandwidth::{Bandwidth, InternetChargeType};
pub use config::{EipSettings, PollPolicy};
pub use eip::{AssociationState, BillingType, EipAddress, EipMode, Profile};
pub use error::{EipError, GatewayContext, GatewayError, ResourceKind};
pub use port::{AssociationType, Port};
pub use status::EipStatus;
