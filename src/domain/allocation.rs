//! EIP allocation request and its validation.

use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::bandwidth::InternetChargeType;
use crate::domain::error::EipError;

/// HCSO only allocates IPv4 EIPs through this path.
pub const IP_VERSION: u8 = 4;
/// Bandwidth dedicated to a single EIP.
pub const SHARE_TYPE_PER: &str = "PER";

/// Parameters for allocating a new EIP together with its own bandwidth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocateRequest {
    /// Name given to the dedicated bandwidth.
    pub name: String,
    pub bandwidth_mbps: u32,
    pub charge_type: InternetChargeType,
    /// BGP line type, e.g. `5_bgp`. Required.
    pub bgp_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl AllocateRequest {
    /// # Errors
    ///
    /// Returns `EipError::InvalidRequest` when the BGP type is empty.
    pub fn validate(&self) -> Result<(), EipError> {
        if self.bgp_type.trim().is_empty() {
            return Err(EipError::InvalidRequest(
                "bgp type should not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Vendor request body for this allocation.
    #[must_use]
    pub fn to_body(&self) -> Value {
        let mut body = json!({
            "publicip": {
                "type": self.bgp_type,
                "ip_version": IP_VERSION,
            },
            "bandwidth": {
                "name": self.name,
                "size": self.bandwidth_mbps,
                "share_type": SHARE_TYPE_PER,
                "charge_mode": self.charge_type.as_str(),
            },
        });
        if let Some(project_id) = self.project_id.as_deref().filter(|p| !p.is_empty()) {
            body["enterprise_project_id"] = Value::from(project_id);
        }
        body
    }
}
