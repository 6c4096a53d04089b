//! udap-test-harness: Mock control transports for udap.
//!
//! This crate provides [`MockControlTransport`] for deterministic unit
//! testing of pairing and command dispatch without a television on the
//! network.

pub mod mock_control;

pub use mock_control::{MockControlTransport, RecordedRequest};
