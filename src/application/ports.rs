//! Port trait definitions for the Application layer.
//!
//! Ports are the contracts the cloud gateway layer must fulfil. They carry
//! no wire format: implementations own HTTP, auth, and JSON. This file
//! imports only from `crate::domain`.

use crate::domain::{AllocateRequest, Bandwidth, EipAddress, GatewayError, Port};

// ── EIP Port ──────────────────────────────────────────────────────────────────

/// Create, read, delete, and rebind EIPs.
#[allow(async_fn_in_trait)]
pub trait EipApi {
    /// Allocate a new EIP with its own bandwidth.
    async fn create_eip(&self, request: &AllocateRequest) -> Result<EipAddress, GatewayError>;
    /// Read the current remote state of an EIP.
    ///
    /// Unknown ids must be reported as `GatewayError::NotFound`.
    async fn get_eip(&self, id: &str) -> Result<EipAddress, GatewayError>;
    /// Release an EIP.
    async fn delete_eip(&self, id: &str) -> Result<(), GatewayError>;
    /// Point an EIP at `port_id`, or clear its port when `None`.
    async fn update_eip_port(&self, id: &str, port_id: Option<&str>) -> Result<(), GatewayError>;
}

// ── Bandwidth Port ────────────────────────────────────────────────────────────

/// Read and resize bandwidth allocations.
#[allow(async_fn_in_trait)]
pub trait BandwidthApi {
    async fn get_bandwidth(&self, id: &str) -> Result<Bandwidth, GatewayError>;
    /// Resize a bandwidth. Synchronous on the vendor side.
    async fn update_bandwidth(&self, id: &str, size_mbps: u32) -> Result<(), GatewayError>;
}

// ── Network Port lookup ───────────────────────────────────────────────────────

/// Look up network ports.
#[allow(async_fn_in_trait)]
pub trait PortApi {
    /// All ports attached to `device_id`, in the order the vendor lists them.
    async fn list_ports(&self, device_id: &str) -> Result<Vec<Port>, GatewayError>;
    async fn get_port(&self, id: &str) -> Result<Port, GatewayError>;
}

/// Composite trait. Any type implementing all three sub-traits is a `CloudGateway`.
pub trait CloudGateway: EipApi + BandwidthApi + PortApi {}

/// Blanket implementation: any type implementing all three sub-traits is a `CloudGateway`.
impl<T> CloudGateway for T where T: EipApi + BandwidthApi + PortApi {}
