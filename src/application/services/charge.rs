//! Internet charge type of an EIP, read off its bandwidth.

use tracing::warn;

use crate::application::ports::BandwidthApi;
use crate::domain::{EipAddress, InternetChargeType};

/// Charge type of the bandwidth behind `eip`.
///
/// Never fails: if the bandwidth cannot be read the EIP is reported as
/// billed by traffic, the common case, so classification errors do not
/// block read paths.
pub async fn internet_charge_type(gw: &impl BandwidthApi, eip: &EipAddress) -> InternetChargeType {
    match gw.get_bandwidth(eip.bandwidth_id()).await {
        Ok(bandwidth) => InternetChargeType::from_charge_mode(&bandwidth.charge_mode),
        Err(err) => {
            warn!(
                eip_id = %eip.id(),
                bandwidth_id = %eip.bandwidth_id(),
                error = %err,
                "cannot read eip bandwidth, assuming traffic billing"
            );
            InternetChargeType::ByTraffic
        }
    }
}
