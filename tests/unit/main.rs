//! Unit tests for the HCSO EIP core
//!
//! These tests drive the public API against an in-memory cloud and run on a
//! paused clock, so polling costs no wall time.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod lifecycle_flow;
