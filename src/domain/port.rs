//! Network port as seen by the EIP core, and association-type classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Device owner tags the vendor uses for load-balancer ports.
const LOADBALANCER_OWNERS: [&str; 2] = ["neutron:LOADBALANCER", "neutron:LOADBALANCERV2"];
/// Device owner tag the vendor uses for NAT gateway ports.
const NAT_GATEWAY_OWNER: &str = "network:nat_gateway";

/// A virtual network interface attachment point. Read-only to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub id: String,
    /// Owning resource, e.g. an instance or load balancer id.
    #[serde(default)]
    pub device_id: String,
    /// Type tag of the owning resource.
    #[serde(default)]
    pub device_owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Kind of resource an EIP is bound to, derived from the port owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationType {
    LoadBalancer,
    NatGateway,
    Server,
}

impl AssociationType {
    /// Classify a port by its `device_owner` tag.
    ///
    /// Exact matches only; anything unrecognised is a `Server`.
    #[must_use]
    pub fn classify(device_owner: &str) -> Self {
        if LOADBALANCER_OWNERS.contains(&device_owner) {
            Self::LoadBalancer
        } else if device_owner == NAT_GATEWAY_OWNER {
            Self::NatGateway
        } else {
            Self::Server
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoadBalancer => "elb",
            Self::NatGateway => "natgateway",
            Self::Server => "server",
        }
    }
}

impl fmt::Display for AssociationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
