//! Shared test helpers for EIP service tests.
//!
//! `FakeGateway` is the remote state of record for a single EIP. It serves
//! scripted raw statuses and records every mutating call so tests can
//! assert on what reached the gateway.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use serde_json::json;

use crate::application::ports::{BandwidthApi, EipApi, PortApi};
use crate::domain::{
    AllocateRequest, Bandwidth, EipAddress, GatewayError, Port, ResourceKind,
};

pub fn eip(id: &str, raw_status: &str, port_id: Option<&str>) -> EipAddress {
    serde_json::from_value(json!({
        "id": id,
        "status": raw_status,
        "port_id": port_id,
        "public_ip_address": "1.2.3.4",
        "bandwidth_id": "bw-1",
        "bandwidth_size": 5,
    }))
    .expect("fixture eip")
}

pub fn port(id: &str, device_id: &str, device_owner: &str) -> Port {
    Port {
        id: id.into(),
        device_id: device_id.into(),
        device_owner: device_owner.into(),
        status: Some("ACTIVE".into()),
    }
}

struct Remote {
    id: String,
    status: String,
    port_id: Option<String>,
    bandwidth_size: u32,
}

pub struct FakeGateway {
    remote: RefCell<Remote>,
    /// Raw statuses served by successive `get_eip` calls; the last one repeats.
    statuses: RefCell<VecDeque<String>>,
    ports: Vec<Port>,
    bandwidth: Option<Bandwidth>,
    fail_updates: bool,
    pub get_calls: Cell<usize>,
    pub port_lookups: Cell<usize>,
    pub port_updates: RefCell<Vec<(String, Option<String>)>>,
    pub bandwidth_updates: RefCell<Vec<(String, u32)>>,
    pub deleted: RefCell<Vec<String>>,
}

impl FakeGateway {
    pub fn new(id: &str, raw_status: &str, port_id: Option<&str>) -> Self {
        Self {
            remote: RefCell::new(Remote {
                id: id.into(),
                status: raw_status.into(),
                port_id: port_id.map(str::to_owned),
                bandwidth_size: 5,
            }),
            statuses: RefCell::new(VecDeque::new()),
            ports: Vec::new(),
            bandwidth: None,
            fail_updates: false,
            get_calls: Cell::new(0),
            port_lookups: Cell::new(0),
            port_updates: RefCell::new(Vec::new()),
            bandwidth_updates: RefCell::new(Vec::new()),
            deleted: RefCell::new(Vec::new()),
        }
    }

    pub fn with_port(mut self, port: Port) -> Self {
        self.ports.push(port);
        self
    }

    pub fn with_bandwidth(mut self, charge_mode: &str) -> Self {
        self.bandwidth = Some(Bandwidth {
            id: "bw-1".into(),
            name: "bw-web".into(),
            size: 5,
            share_type: "PER".into(),
            bandwidth_type: "bgp".into(),
            charge_mode: charge_mode.into(),
        });
        self
    }

    /// Script the raw statuses returned by the next `get_eip` calls.
    pub fn serving(self, statuses: &[&str]) -> Self {
        *self.statuses.borrow_mut() = statuses.iter().map(|s| (*s).to_owned()).collect();
        self
    }

    pub fn failing_updates(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    pub fn remote_port_id(&self) -> Option<String> {
        self.remote.borrow().port_id.clone()
    }

    fn snapshot(&self) -> EipAddress {
        let remote = self.remote.borrow();
        serde_json::from_value(json!({
            "id": remote.id,
            "status": remote.status,
            "port_id": remote.port_id,
            "public_ip_address": "1.2.3.4",
            "bandwidth_id": "bw-1",
            "bandwidth_size": remote.bandwidth_size,
        }))
        .expect("fake eip")
    }
}

impl EipApi for FakeGateway {
    async fn create_eip(&self, request: &AllocateRequest) -> Result<EipAddress, GatewayError> {
        let eip: EipAddress = serde_json::from_value(json!({
            "id": "eip-new",
            "status": "PENDING_CREATE",
            "type": request.bgp_type,
            "bandwidth_name": request.name,
            "bandwidth_size": request.bandwidth_mbps,
            "enterprise_project_id": request.project_id.clone().unwrap_or_default(),
        }))
        .map_err(|e| GatewayError::Remote(e.into()))?;
        Ok(eip)
    }

    async fn get_eip(&self, id: &str) -> Result<EipAddress, GatewayError> {
        self.get_calls.set(self.get_calls.get() + 1);
        if self.remote.borrow().id != id {
            return Err(GatewayError::NotFound {
                resource: ResourceKind::Eip,
                id: id.into(),
            });
        }
        {
            let mut statuses = self.statuses.borrow_mut();
            let next = if statuses.len() > 1 {
                statuses.pop_front()
            } else {
                statuses.front().cloned()
            };
            if let Some(status) = next {
                self.remote.borrow_mut().status = status;
            }
        }
        Ok(self.snapshot())
    }

    async fn delete_eip(&self, id: &str) -> Result<(), GatewayError> {
        self.deleted.borrow_mut().push(id.into());
        Ok(())
    }

    async fn update_eip_port(&self, id: &str, port_id: Option<&str>) -> Result<(), GatewayError> {
        if self.fail_updates {
            return Err(GatewayError::Remote(anyhow::anyhow!("503 service unavailable")));
        }
        self.port_updates
            .borrow_mut()
            .push((id.into(), port_id.map(str::to_owned)));
        self.remote.borrow_mut().port_id = port_id.map(str::to_owned);
        Ok(())
    }
}

impl BandwidthApi for FakeGateway {
    async fn get_bandwidth(&self, id: &str) -> Result<Bandwidth, GatewayError> {
        self.bandwidth
            .clone()
            .filter(|bw| bw.id == id)
            .ok_or_else(|| GatewayError::NotFound {
                resource: ResourceKind::Bandwidth,
                id: id.into(),
            })
    }

    async fn update_bandwidth(&self, id: &str, size_mbps: u32) -> Result<(), GatewayError> {
        if self.fail_updates {
            return Err(GatewayError::Remote(anyhow::anyhow!("quota exceeded")));
        }
        self.bandwidth_updates.borrow_mut().push((id.into(), size_mbps));
        self.remote.borrow_mut().bandwidth_size = size_mbps;
        Ok(())
    }
}

impl PortApi for FakeGateway {
    async fn list_ports(&self, device_id: &str) -> Result<Vec<Port>, GatewayError> {
        Ok(self
            .ports
            .iter()
            .filter(|p| p.device_id == device_id)
            .cloned()
            .collect())
    }

    async fn get_port(&self, id: &str) -> Result<Port, GatewayError> {
        self.port_lookups.set(self.port_lookups.get() + 1);
        self.ports
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound {
                resource: ResourceKind::Port,
                id: id.into(),
            })
    }
}
