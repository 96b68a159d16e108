//! Typed domain error enums.
//!
//! This module has zero imports from `crate::application` or `crate::infra`.
//! `GatewayError` is what gateway ports report; `EipError` is what every
//! public EIP operation returns. Both convert to `anyhow::Error` via `?`.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::domain::status::EipStatus;

// ── Resource kinds ────────────────────────────────────────────────────────────

/// Kind of remote identity a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Eip,
    Port,
    /// The port attached to an instance, looked up by instance id.
    InstancePort,
    Bandwidth,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Eip => "eip",
            Self::Port => "port",
            Self::InstancePort => "port for instance",
            Self::Bandwidth => "bandwidth",
        })
    }
}

// ── Gateway errors ────────────────────────────────────────────────────────────

/// Failure reported by a gateway port implementation.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{resource} {id} not found")]
    NotFound { resource: ResourceKind, id: String },

    #[error(transparent)]
    Remote(#[from] anyhow::Error),
}

// ── EIP errors ────────────────────────────────────────────────────────────────

/// Errors surfaced by EIP lifecycle and association operations.
#[derive(Debug, Error)]
pub enum EipError {
    #[error("{kind} {id} not found")]
    NotFound { kind: ResourceKind, id: String },

    #[error("eip {eip_id} is associated with {bound_to}, not {requested}")]
    Conflict {
        eip_id: String,
        bound_to: String,
        requested: String,
    },

    #[error(
        "eip {eip_id} did not reach status {expected} within {}s (last status: {last})",
        .waited.as_secs()
    )]
    Timeout {
        eip_id: String,
        expected: EipStatus,
        last: EipStatus,
        waited: Duration,
    },

    #[error("eip {eip_id} entered status {status} while waiting for it to settle")]
    ConvergenceFailed { eip_id: String, status: EipStatus },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("{op}({target}) failed")]
    Gateway {
        op: &'static str,
        target: String,
        source: anyhow::Error,
    },
}

impl EipError {
    /// Attach operation context to a gateway failure.
    ///
    /// `NotFound` keeps its identity so callers can match on it; every other
    /// failure becomes an opaque `Gateway` error naming the call and target.
    #[must_use]
    pub fn from_gateway(op: &'static str, target: &str, err: GatewayError) -> Self {
        match err {
            GatewayError::NotFound { resource, id } => Self::NotFound { kind: resource, id },
            GatewayError::Remote(source) => Self::Gateway {
                op,
                target: target.to_owned(),
                source,
            },
        }
    }
}

/// `Context`-style adapter for gateway results.
pub trait GatewayContext<T> {
    /// # Errors
    ///
    /// Returns the gateway failure converted with [`EipError::from_gateway`].
    fn with_op(self, op: &'static str, target: &str) -> Result<T, EipError>;
}

impl<T> GatewayContext<T> for Result<T, GatewayError> {
    fn with_op(self, op: &'static str, target: &str) -> Result<T, EipError> {
        self.map_err(|err| EipError::from_gateway(op, target, err))
    }
}
