//! LG UDAP 2.0 protocol driver for the udap library.
//!
//! This crate implements the proprietary UDAP control protocol spoken by
//! LG smart televisions over UDP (discovery) and HTTP (pairing, commands).
//! It provides:
//!
//! - **Command catalog** ([`commands`]) -- the fixed table of remote-control
//!   key codes the firmware accepts, preserved value-for-value.
//! - **Envelope builders** ([`envelope`]) -- construct the XML request
//!   bodies for the pairing and command endpoints.
//! - **Discovery** ([`discovery`]) -- broadcast a B-SEARCH query and
//!   classify inbound datagrams until the television answers.
//! - **Pairing** ([`pairing`]) -- the showKey / hello handshake that
//!   authorizes this client against a pin shown on-screen.
//! - **Client** ([`client`]) -- command dispatch with the one-shot
//!   re-pair-and-retry fallback.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use udap_core::Television;
//! use udap_lg::{Command, DiscoverySession, LgTv};
//!
//! # async fn example() -> udap_core::Result<()> {
//! let tv_client = LgTv::with_http()?;
//! let mut tv = Television::new();
//!
//! // Locate the set; on a match it is asked to show its pairing pin.
//! let session = DiscoverySession::bind().await?;
//! session
//!     .discover(&mut tv, tv_client.pairing(), Duration::from_secs(10))
//!     .await?;
//!
//! // The user reads the pin off-screen and supplies it out-of-band.
//! tv.set_pin("429590");
//! tv_client.pairing().confirm(&tv).await?;
//!
//! let report = tv_client.send_command(&tv, Command::VolumeUp).await;
//! assert!(report.delivered);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod commands;
pub mod discovery;
pub mod envelope;
pub mod pairing;

// Re-export the primary types for ergonomic `use udap_lg::*`.
pub use client::{DispatchReport, LgTv};
pub use commands::Command;
pub use discovery::{classify, Classification, DiscoverySession};
pub use pairing::PairingSession;
