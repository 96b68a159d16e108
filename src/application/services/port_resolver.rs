//! Port resolution: instance → port, EIP → port, port → association type.
//!
//! # Single-NIC constraint
//!
//! An instance is assumed to have exactly one active network interface.
//! [`resolve_instance_port`] therefore binds to the first port the vendor
//! lists for the instance. Multi-NIC instances are a known limitation; a
//! port selector would be the place to extend this.

use tracing::{debug, error, info};

use crate::application::ports::{EipApi, PortApi};
use crate::domain::{AssociationType, EipAddress, EipError, GatewayContext, Port, ResourceKind};

/// Find the network port attached to `instance_id`.
///
/// # Errors
///
/// Returns `EipError::NotFound` (kind `InstancePort`) when the instance has
/// no ports, or the gateway failure.
pub async fn resolve_instance_port(gw: &impl PortApi, instance_id: &str) -> Result<Port, EipError> {
    let ports = gw
        .list_ports(instance_id)
        .await
        .with_op("ListPorts", instance_id)?;
    if ports.len() > 1 {
        debug!(
            instance_id,
            count = ports.len(),
            "instance has several ports, binding to the first"
        );
    }
    ports.into_iter().next().ok_or_else(|| EipError::NotFound {
        kind: ResourceKind::InstancePort,
        id: instance_id.to_owned(),
    })
}

/// Port the EIP is bound to, served from the entity's cache when present.
///
/// Returns `Ok(None)` for an unassociated EIP.
///
/// # Errors
///
/// Returns the port lookup failure; nothing is cached in that case.
pub async fn port<'e>(
    gw: &impl PortApi,
    eip: &'e mut EipAddress,
) -> Result<Option<&'e Port>, EipError> {
    let Some(port_id) = eip.port_id().map(str::to_owned) else {
        return Ok(None);
    };
    if eip.cached_port().is_none() {
        let port = gw.get_port(&port_id).await.with_op("GetPort", &port_id)?;
        eip.cache_port(port);
    }
    Ok(eip.cached_port())
}

/// What kind of resource the EIP is bound to.
///
/// `None` when unassociated or when the port cannot be read; lookup failures
/// are logged, not returned, so read paths keep working.
pub async fn association_type(gw: &impl PortApi, eip: &EipAddress) -> Option<AssociationType> {
    let port_id = eip.port_id()?;
    let port = match gw.get_port(port_id).await {
        Ok(port) => port,
        Err(err) => {
            error!(eip_id = %eip.id(), port_id, error = %err, "failed to look up eip port");
            return None;
        }
    };
    let kind = AssociationType::classify(&port.device_owner);
    if kind == AssociationType::Server {
        info!(eip_id = %eip.id(), device_owner = %port.device_owner, "eip associate type");
    }
    Some(kind)
}

/// Id of the device (instance, load balancer, ...) the EIP is bound to.
///
/// The vendor only links EIP → port, so the device is read off the port.
///
/// # Errors
///
/// Returns the port lookup failure.
pub async fn association_external_id(
    gw: &impl PortApi,
    eip: &EipAddress,
) -> Result<Option<String>, EipError> {
    let Some(port_id) = eip.port_id() else {
        return Ok(None);
    };
    let port = gw.get_port(port_id).await.with_op("GetPort", port_id)?;
    Ok(Some(port.device_id))
}

/// Bind EIP `eip_id` to the port of `instance_id` without any conflict
/// check or waiting. Returns the port id that was bound.
///
/// # Errors
///
/// Returns `EipError::NotFound` when the instance has no port, or the
/// gateway failure.
pub async fn associate_instance(
    gw: &(impl EipApi + PortApi),
    eip_id: &str,
    instance_id: &str,
) -> Result<String, EipError> {
    let port = resolve_instance_port(gw, instance_id).await?;
    gw.update_eip_port(eip_id, Some(&port.id))
        .await
        .with_op("UpdateEipPort", eip_id)?;
    info!(eip_id, instance_id, port_id = %port.id, "bound eip to instance port");
    Ok(port.id)
}
