//! Environment-backed loading of `EipSettings`.
//!
//! Each field maps to `HCSO_EIP_<FIELD>`:
//!   - `HCSO_EIP_POLL_DELAY_SECS`    (default `10`)
//!   - `HCSO_EIP_POLL_INTERVAL_SECS` (default `10`)
//!   - `HCSO_EIP_POLL_TIMEOUT_SECS`  (default `180`)

use anyhow::{Context, Result};

use crate::domain::{EipSettings, PollPolicy};

pub const ENV_PREFIX: &str = "HCSO_EIP_";

/// Load settings from the process environment.
///
/// # Errors
///
/// Returns an error if a variable is set but cannot be parsed.
pub fn load_settings() -> Result<EipSettings> {
    envy::prefixed(ENV_PREFIX)
        .from_env()
        .context("failed to load settings from HCSO_EIP_* env vars")
}

/// Load settings from explicit `(name, value)` pairs, e.g. a captured
/// environment.
///
/// # Errors
///
/// Returns an error if a variable is set but cannot be parsed.
pub fn settings_from_vars<I>(vars: I) -> Result<EipSettings>
where
    I: IntoIterator<Item = (String, String)>,
{
    envy::prefixed(ENV_PREFIX)
        .from_iter(vars)
        .context("failed to parse HCSO_EIP_* settings")
}

/// Polling policy from the process environment.
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded or are out of range.
pub fn load_poll_policy() -> Result<PollPolicy> {
    let settings = load_settings()?;
    tracing::info!(
        poll_delay_secs = settings.poll_delay_secs,
        poll_interval_secs = settings.poll_interval_secs,
        poll_timeout_secs = settings.poll_timeout_secs,
        "eip settings loaded",
    );
    Ok(settings.poll_policy()?)
}
