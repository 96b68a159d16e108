//! Canonical EIP status and the vendor status normalizer.
//!
//! Pure data in, data out. Unrecognised vendor strings degrade to
//! `EipStatus::Unknown` instead of failing, so new remote states never break
//! read paths.

use std::fmt;

/// Raw vendor status of an EIP that exists but is bound to nothing.
pub const RAW_STATUS_DOWN: &str = "DOWN";

/// Canonical lifecycle status of an EIP, decoupled from vendor strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EipStatus {
    Ready,
    Allocating,
    AllocateFailed,
    Deallocating,
    Unknown,
}

impl EipStatus {
    /// Map a vendor lifecycle string onto the canonical status.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "ACTIVE" | "DOWN" | "ELB" => Self::Ready,
            "PENDING_CREATE" | "NOTIFYING" | "BINDING" => Self::Allocating,
            "BIND_ERROR" => Self::AllocateFailed,
            "PENDING_DELETE" | "NOTIFY_DELETE" => Self::Deallocating,
            _ => Self::Unknown,
        }
    }

    /// Name used by the orchestration layer for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Allocating => "allocate",
            Self::AllocateFailed => "allocate_failed",
            Self::Deallocating => "deallocate",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the remote reported a terminal failure for the last request.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::AllocateFailed)
    }
}

impl fmt::Display for EipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
