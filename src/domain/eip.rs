//! Elastic IP entity: the in-memory projection of remote EIP state.
//!
//! This module is free of I/O and async. Accessors that need the gateway
//! (port lookup, charge type) live in `crate::application::services`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::port::Port;
use crate::domain::status::EipStatus;

/// Prepaid order details. Its presence on an EIP marks the EIP as prepaid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub region_id: String,
    #[serde(default)]
    pub order_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingType {
    Prepaid,
    Postpaid,
}

impl BillingType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prepaid => "prepaid",
            Self::Postpaid => "postpaid",
        }
    }
}

/// How the public address is provided. HCSO only offers standalone EIPs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EipMode {
    StandaloneEip,
}

impl EipMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StandaloneEip => "elastic_ip",
        }
    }
}

/// Association state of one EIP.
///
/// `Unassociated` and `Associated` are derived from `port_id`; the two
/// transitional states only exist while an associate or dissociate call is
/// in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationState {
    Unassociated,
    Associating,
    Associated,
    Dissociating,
}

impl AssociationState {
    #[must_use]
    pub fn of(eip: &EipAddress) -> Self {
        if eip.is_associated() {
            Self::Associated
        } else {
            Self::Unassociated
        }
    }
}

impl fmt::Display for AssociationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unassociated => "unassociated",
            Self::Associating => "associating",
            Self::Associated => "associated",
            Self::Dissociating => "dissociating",
        })
    }
}

/// One allocated elastic IP, decoded straight from the vendor's JSON.
///
/// Fields are private: identity is immutable and `port_id` only changes
/// through refresh or a confirmed associate/dissociate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EipAddress {
    id: String,
    #[serde(rename = "status", default)]
    raw_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile: Option<Profile>,
    /// BGP line type, e.g. `5_bgp`.
    #[serde(rename = "type", default)]
    bgp_type: String,
    #[serde(default)]
    public_ip_address: String,
    #[serde(default)]
    private_ip_address: String,
    #[serde(default)]
    tenant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    create_time: Option<DateTime<Utc>>,
    #[serde(default)]
    bandwidth_id: String,
    #[serde(default)]
    bandwidth_share_type: String,
    /// Mbps.
    #[serde(default)]
    bandwidth_size: u32,
    #[serde(default)]
    bandwidth_name: String,
    #[serde(default)]
    enterprise_project_id: String,
    #[serde(default)]
    ip_version: u8,
    /// The vendor sends `""` or `null` when unbound; both become `None`.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    port_id: Option<String>,
    /// Non-authoritative copy of the port `port_id` points at.
    #[serde(skip)]
    port: Option<Port>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}

impl EipAddress {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn global_id(&self) -> &str {
        &self.id
    }

    /// Bandwidth name when the EIP has one, otherwise its public address.
    #[must_use]
    pub fn name(&self) -> &str {
        if self.bandwidth_name.is_empty() {
            &self.public_ip_address
        } else {
            &self.bandwidth_name
        }
    }

    #[must_use]
    pub fn ip_addr(&self) -> &str {
        &self.public_ip_address
    }

    #[must_use]
    pub fn private_ip_addr(&self) -> &str {
        &self.private_ip_address
    }

    #[must_use]
    pub fn raw_status(&self) -> &str {
        &self.raw_status
    }

    #[must_use]
    pub fn status(&self) -> EipStatus {
        EipStatus::from_raw(&self.raw_status)
    }

    #[must_use]
    pub fn bgp_type(&self) -> &str {
        &self.bgp_type
    }

    #[must_use]
    pub const fn mode(&self) -> EipMode {
        EipMode::StandaloneEip
    }

    #[must_use]
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    #[must_use]
    pub fn bandwidth_id(&self) -> &str {
        &self.bandwidth_id
    }

    /// Bandwidth size in Mbps.
    #[must_use]
    pub const fn bandwidth(&self) -> u32 {
        self.bandwidth_size
    }

    #[must_use]
    pub fn bandwidth_share_type(&self) -> &str {
        &self.bandwidth_share_type
    }

    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub const fn billing_type(&self) -> BillingType {
        if self.profile.is_some() {
            BillingType::Prepaid
        } else {
            BillingType::Postpaid
        }
    }

    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.create_time
    }

    /// HCSO does not report expiry for EIPs.
    #[must_use]
    pub const fn expired_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        Some(self.enterprise_project_id.as_str()).filter(|id| !id.is_empty())
    }

    #[must_use]
    pub const fn ip_version(&self) -> u8 {
        self.ip_version
    }

    #[must_use]
    pub const fn is_emulated(&self) -> bool {
        false
    }

    /// Standalone EIPs do not belong to a tenant network.
    #[must_use]
    pub const fn network_id(&self) -> Option<&str> {
        None
    }

    #[must_use]
    pub fn port_id(&self) -> Option<&str> {
        self.port_id.as_deref()
    }

    #[must_use]
    pub const fn is_associated(&self) -> bool {
        self.port_id.is_some()
    }

    /// Cached port, if one was resolved since the last refresh.
    #[must_use]
    pub fn cached_port(&self) -> Option<&Port> {
        self.port.as_ref()
    }

    /// Replace local state with a fresh remote read. Drops the cached port.
    pub(crate) fn merge(&mut self, fresh: Self) {
        *self = fresh;
    }

    pub(crate) fn set_port_id(&mut self, port_id: Option<String>) {
        let port_id = port_id.filter(|id| !id.is_empty());
        if self.port_id != port_id {
            self.port = None;
        }
        self.port_id = port_id;
    }

    /// Cache `port` if it is the one this EIP points at.
    pub(crate) fn cache_port(&mut self, port: Port) {
        if self.port_id.as_deref() == Some(port.id.as_str()) {
            self.port = Some(port);
        }
    }

    pub(crate) fn set_bandwidth_size(&mut self, size_mbps: u32) {
        self.bandwidth_size = size_mbps;
    }
}
