//! Convergence polling: re-read an EIP until it reaches a status.
//!
//! Only the observation is retried here, never the mutating request that
//! preceded it.

use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::application::ports::EipApi;
use crate::application::services::lifecycle;
use crate::domain::{EipAddress, EipError, EipStatus, PollPolicy};

/// Refresh `eip` until its canonical status equals `expected`.
///
/// Sleeps `policy.delay` before the first read and `policy.interval` between
/// reads. The bound covers the whole wait; the loop never sleeps past it.
///
/// # Errors
///
/// - `EipError::ConvergenceFailed` if the remote reports a failure status.
/// - `EipError::Timeout` if `expected` is not observed within the bound.
/// - Any refresh failure, unchanged.
pub async fn wait_for_status(
    gw: &impl EipApi,
    eip: &mut EipAddress,
    expected: EipStatus,
    policy: &PollPolicy,
) -> Result<(), EipError> {
    let started = Instant::now();
    sleep(policy.delay).await;
    loop {
        lifecycle::refresh(gw, eip).await?;
        let status = eip.status();
        debug!(
            eip_id = %eip.id(),
            raw_status = eip.raw_status(),
            %status,
            %expected,
            "polled eip status"
        );
        if status == expected {
            return Ok(());
        }
        if status.is_failure() {
            return Err(EipError::ConvergenceFailed {
                eip_id: eip.id().to_owned(),
                status,
            });
        }
        let waited = started.elapsed();
        if waited.saturating_add(policy.interval) > policy.timeout {
            return Err(EipError::Timeout {
                eip_id: eip.id().to_owned(),
                expected,
                last: status,
                waited,
            });
        }
        sleep(policy.interval).await;
    }
}
