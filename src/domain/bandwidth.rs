//! Bandwidth allocation referenced by an EIP, and charge-type classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Charge mode the vendor reports for traffic-billed bandwidth.
pub const CHARGE_MODE_TRAFFIC: &str = "traffic";

/// Bandwidth allocation. Read-only to this crate; EIPs only reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bandwidth {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Size in Mbps.
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub share_type: String,
    #[serde(default)]
    pub bandwidth_type: String,
    #[serde(default)]
    pub charge_mode: String,
}

/// How internet traffic through an EIP is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InternetChargeType {
    #[default]
    #[serde(rename = "traffic")]
    ByTraffic,
    #[serde(rename = "bandwidth")]
    ByBandwidth,
}

impl InternetChargeType {
    /// Anything other than `"traffic"` is billed by bandwidth.
    #[must_use]
    pub fn from_charge_mode(charge_mode: &str) -> Self {
        if charge_mode == CHARGE_MODE_TRAFFIC {
            Self::ByTraffic
        } else {
            Self::ByBandwidth
        }
    }

    /// Vendor `charge_mode` value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ByTraffic => "traffic",
            Self::ByBandwidth => "bandwidth",
        }
    }
}

impl fmt::Display for InternetChargeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
