//! Convergence polling policy and the settings it is built from.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::error::EipError;

/// How long and how often to re-read an EIP while waiting for it to settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Wait before the first read.
    pub delay: Duration,
    /// Wait between reads.
    pub interval: Duration,
    /// Bound on the whole wait, delay included.
    pub timeout: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(default_poll_delay_secs()),
            interval: Duration::from_secs(default_poll_interval_secs()),
            timeout: Duration::from_secs(default_poll_timeout_secs()),
        }
    }
}

/// Tunables for the EIP core, usually read from `HCSO_EIP_*` variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EipSettings {
    #[serde(default = "default_poll_delay_secs")]
    pub poll_delay_secs: u64,

    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    #[serde(default = "default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,
}

fn default_poll_delay_secs() -> u64 {
    10
}

fn default_poll_interval_secs() -> u64 {
    10
}

fn default_poll_timeout_secs() -> u64 {
    180
}

impl Default for EipSettings {
    fn default() -> Self {
        Self {
            poll_delay_secs: default_poll_delay_secs(),
            poll_interval_secs: default_poll_interval_secs(),
            poll_timeout_secs: default_poll_timeout_secs(),
        }
    }
}

impl EipSettings {
    /// # Errors
    ///
    /// Returns `EipError::InvalidRequest` if the interval is zero, which would
    /// turn polling into a busy loop.
    pub fn poll_policy(&self) -> Result<PollPolicy, EipError> {
        if self.poll_interval_secs == 0 {
            return Err(EipError::InvalidRequest(
                "poll interval must be at least one second".to_string(),
            ));
        }
        Ok(PollPolicy {
            delay: Duration::from_secs(self.poll_delay_secs),
            interval: Duration::from_secs(self.poll_interval_secs),
            timeout: Duration::from_secs(self.poll_timeout_secs),
        })
    }
}
