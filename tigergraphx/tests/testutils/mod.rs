//! Test utilities for TigerGraphX integration tests
//!
//! - MockTransport: in-memory recording transport with failure injection
//! - fixtures: sample schemas and graphs wired to a MockTransport

#![allow(dead_code)]

pub mod fixtures;
pub mod mock_transport;

/// Route library logging to the test harness (idempotent)
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}
