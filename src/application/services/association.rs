//! Association control loop: bind and unbind an EIP, then wait for it to
//! settle.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//!
//! The conflict checks below are check-then-act against the remote and are
//! not atomic. Mutating calls take `&mut EipAddress`, so one in-memory EIP
//! cannot run two association operations at once; callers holding several
//! copies of the same EIP id must serialise them.

use tracing::{debug, info};

use crate::application::ports::CloudGateway;
use crate::application::services::{lifecycle, poll, port_resolver};
use crate::domain::status::RAW_STATUS_DOWN;
use crate::domain::{
    AssociationState, EipAddress, EipError, EipStatus, GatewayContext, PollPolicy, ResourceKind,
};

/// Drives associate, dissociate, and bandwidth changes for EIPs through a
/// shared gateway.
pub struct AssociationController<'g, G: CloudGateway> {
    gateway: &'g G,
    policy: PollPolicy,
}

impl<'g, G: CloudGateway> AssociationController<'g, G> {
    /// Controller with the default 10s/10s/180s polling policy.
    #[must_use]
    pub fn new(gateway: &'g G) -> Self {
        Self::with_policy(gateway, PollPolicy::default())
    }

    #[must_use]
    pub fn with_policy(gateway: &'g G, policy: PollPolicy) -> Self {
        Self { gateway, policy }
    }

    #[must_use]
    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    /// Bind `eip` to the port of `instance_id` and wait until it is ready.
    ///
    /// Idempotent when the EIP is already bound to that port. An EIP bound
    /// to any other port is never rebound.
    ///
    /// # Errors
    ///
    /// - `EipError::NotFound` if the instance has no port.
    /// - `EipError::Conflict` if the EIP is bound to a different port.
    /// - `EipError::Timeout` / `EipError::ConvergenceFailed` from polling;
    ///   `eip` must be refreshed before its `port_id` is trusted again.
    /// - Gateway failures with context.
    pub async fn associate(&self, eip: &mut EipAddress, instance_id: &str) -> Result<(), EipError> {
        let port = port_resolver::resolve_instance_port(self.gateway, instance_id).await?;

        if let Some(current) = eip.port_id() {
            if current == port.id {
                debug!(eip_id = %eip.id(), port_id = %port.id, "eip already bound to instance port");
                return Ok(());
            }
            return Err(EipError::Conflict {
                eip_id: eip.id().to_owned(),
                bound_to: current.to_owned(),
                requested: port.id,
            });
        }

        info!(
            eip_id = %eip.id(),
            instance_id,
            port_id = %port.id,
            state = %AssociationState::Associating,
            "binding eip"
        );
        self.gateway
            .update_eip_port(eip.id(), Some(&port.id))
            .await
            .with_op("UpdateEipPort", eip.id())?;

        poll::wait_for_status(self.gateway, eip, EipStatus::Ready, &self.policy).await?;

        eip.set_port_id(Some(port.id.clone()));
        eip.cache_port(port);
        info!(eip_id = %eip.id(), state = %AssociationState::of(eip), "eip associated");
        Ok(())
    }

    /// Unbind `eip` from whatever device its port belongs to.
    ///
    /// The owning device is read off the EIP's own port and then checked
    /// against the live association by [`Self::dissociate_from`].
    ///
    /// # Errors
    ///
    /// Returns `EipError::NotFound` if the bound port no longer exists, plus
    /// everything [`Self::dissociate_from`] returns.
    pub async fn dissociate(&self, eip: &mut EipAddress) -> Result<(), EipError> {
        let Some(port_id) = eip.port_id().map(str::to_owned) else {
            return Ok(());
        };
        let owner = port_resolver::port(self.gateway, eip)
            .await?
            .map(|port| port.device_id.clone())
            .ok_or(EipError::NotFound {
                kind: ResourceKind::Port,
                id: port_id,
            })?;
        self.dissociate_from(eip, &owner).await
    }

    /// Unbind `eip`, provided the live association belongs to
    /// `owner_instance_id`, and wait until it is ready.
    ///
    /// Idempotent when the EIP is unbound locally or the live EIP is `DOWN`.
    ///
    /// The `DOWN` shortcut is taken before the ownership check, so a stale
    /// `DOWN` read skips that check entirely.
    ///
    /// # Errors
    ///
    /// - `EipError::Conflict` if the live association belongs to another
    ///   device, or the live EIP reports no port without being `DOWN`;
    ///   local state is left untouched.
    /// - `EipError::Timeout` / `EipError::ConvergenceFailed` from polling.
    /// - Gateway failures with context.
    pub async fn dissociate_from(
        &self,
        eip: &mut EipAddress,
        owner_instance_id: &str,
    ) -> Result<(), EipError> {
        if !eip.is_associated() {
            return Ok(());
        }

        let live = lifecycle::get(self.gateway, eip.id()).await?;
        if live.raw_status() == RAW_STATUS_DOWN {
            info!(eip_id = %eip.id(), "eip already unbound");
            eip.merge(live);
            eip.set_port_id(None);
            return Ok(());
        }

        let remote_device = port_resolver::association_external_id(self.gateway, &live)
            .await?
            .unwrap_or_default();
        if remote_device != owner_instance_id {
            return Err(EipError::Conflict {
                eip_id: eip.id().to_owned(),
                bound_to: remote_device,
                requested: owner_instance_id.to_owned(),
            });
        }

        info!(
            eip_id = %eip.id(),
            instance_id = owner_instance_id,
            state = %AssociationState::Dissociating,
            "unbinding eip"
        );
        self.gateway
            .update_eip_port(eip.id(), None)
            .await
            .with_op("UpdateEipPort", eip.id())?;

        poll::wait_for_status(self.gateway, eip, EipStatus::Ready, &self.policy).await?;

        eip.set_port_id(None);
        info!(eip_id = %eip.id(), state = %AssociationState::of(eip), "eip dissociated");
        Ok(())
    }

    /// Resize the bandwidth behind `eip`. The vendor applies this
    /// synchronously, so there is nothing to wait for.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure with context; `eip` is left untouched.
    pub async fn change_bandwidth(&self, eip: &mut EipAddress, size_mbps: u32) -> Result<(), EipError> {
        self.gateway
            .update_bandwidth(eip.bandwidth_id(), size_mbps)
            .await
            .with_op("UpdateBandwidth", eip.bandwidth_id())?;
        eip.set_bandwidth_size(size_mbps);
        info!(eip_id = %eip.id(), size_mbps, "changed eip bandwidth");
        Ok(())
    }
}
