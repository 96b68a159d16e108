//! EIP lifecycle operations: allocate, get, refresh, delete.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use tracing::{debug, info};

use crate::application::ports::EipApi;
use crate::domain::{AllocateRequest, EipAddress, EipError, GatewayContext};

/// Allocate a new EIP with a dedicated bandwidth.
///
/// # Errors
///
/// Returns `EipError::InvalidRequest` if the request is invalid (no remote
/// call is made), or the gateway failure with context.
pub async fn allocate(gw: &impl EipApi, request: &AllocateRequest) -> Result<EipAddress, EipError> {
    request.validate()?;
    let eip = gw
        .create_eip(request)
        .await
        .with_op("CreateEip", &request.name)?;
    info!(
        eip_id = %eip.id(),
        bandwidth_mbps = request.bandwidth_mbps,
        charge_type = %request.charge_type,
        bgp_type = %request.bgp_type,
        "allocated eip"
    );
    Ok(eip)
}

/// Fetch the live state of an EIP.
///
/// # Errors
///
/// Returns `EipError::NotFound` for unknown ids, or the gateway failure.
pub async fn get(gw: &impl EipApi, id: &str) -> Result<EipAddress, EipError> {
    gw.get_eip(id).await.with_op("GetEip", id)
}

/// Re-read `eip` from the remote and replace its local fields.
///
/// The cached port is dropped even if `port_id` did not change.
///
/// # Errors
///
/// Returns the gateway failure; `eip` is left untouched in that case.
pub async fn refresh(gw: &impl EipApi, eip: &mut EipAddress) -> Result<(), EipError> {
    let fresh = get(gw, eip.id()).await?;
    debug!(eip_id = %eip.id(), raw_status = fresh.raw_status(), "refreshed eip");
    eip.merge(fresh);
    Ok(())
}

/// Release the EIP. Consumes it: nothing may be done with this identity
/// afterwards.
///
/// # Errors
///
/// Returns the gateway failure with context.
#[allow(clippy::needless_pass_by_value)]
pub async fn delete(gw: &impl EipApi, eip: EipAddress) -> Result<(), EipError> {
    gw.delete_eip(eip.id()).await.with_op("DeleteEip", eip.id())?;
    info!(eip_id = %eip.id(), "deallocated eip");
    Ok(())
}
