//! udap-core: Core traits, types, and error definitions for the udap
//! television control library.
//!
//! This crate defines the protocol-agnostic abstractions the UDAP driver
//! builds on. Applications depend on these types without pulling in the
//! concrete UDP/HTTP transports.
//!
//! # Key types
//!
//! - [`Television`] -- the entity a discovery/pairing/command session acts on
//! - [`ControlTransport`] -- the HTTP control-channel seam
//! - [`Error`] / [`Result`] -- error handling

pub mod error;
pub mod television;
pub mod transport;

// Re-export key types at crate root for ergonomic `use udap_core::*`.
pub use error::{Error, Result};
pub use television::{Television, TvIdentity};
pub use transport::{ControlResponse, ControlTransport, CONTROL_PORT};
