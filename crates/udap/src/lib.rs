//! # udap -- LG Smart TV Control over UDAP 2.0
//!
//! `udap` is an asynchronous Rust library for discovering, pairing with,
//! and sending remote-control commands to LG smart televisions on the
//! local network, using the proprietary UDAP 2.0 protocol: UDP broadcast
//! for discovery, HTTP POSTs of small XML envelopes for pairing and
//! commands.
//!
//! ## Quick Start
//!
//! Add `udap` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! udap = "0.1"
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! Discover a television, pair, and press a key:
//!
//! ```no_run
//! use std::time::Duration;
//! use udap::lg::{Command, DiscoverySession, LgTv};
//! use udap::Television;
//!
//! #[tokio::main]
//! async fn main() -> udap::Result<()> {
//!     let client = LgTv::with_http()?;
//!     let mut tv = Television::new();
//!
//!     // Broadcast for the set; a match asks it to show its pairing pin.
//!     let session = DiscoverySession::bind().await?;
//!     session
//!         .discover(&mut tv, client.pairing(), Duration::from_secs(10))
//!         .await?;
//!
//!     // The user reads the pin off the screen.
//!     tv.set_pin("429590");
//!     client.pairing().confirm(&tv).await?;
//!
//!     let report = client.send_command(&tv, Command::VolumeUp).await;
//!     println!("delivered: {}", report.delivered);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized as a workspace of focused crates:
//!
//! | Crate               | Purpose                                          |
//! |----------------------|--------------------------------------------------|
//! | `udap-core`          | [`Television`] state, errors, transport traits   |
//! | `udap-transport`     | UDP broadcast channel, HTTP control transport    |
//! | `udap-lg`            | LG protocol driver: discovery, pairing, commands |
//! | `udap-test-harness`  | Mock control transport for tests                 |
//! | **`udap`**           | This facade crate -- re-exports everything       |
//!
//! ## Pairing Model
//!
//! The television authorizes clients with a pin it displays on-screen. The
//! flow is: discovery finds the set and asks it to show the pin; the user
//! supplies the pin out-of-band via [`Television::set_pin`]; pairing is
//! confirmed with a `hello` envelope. Televisions forget pairings when
//! power-cycled, so command dispatch transparently re-pairs once and
//! retries when a command is rejected.

pub use udap_core::*;

/// LG UDAP protocol driver.
///
/// Provides [`LgTv`](lg::LgTv) for pairing and command dispatch,
/// [`DiscoverySession`](lg::DiscoverySession) for locating sets on the
/// network, and the [`Command`](lg::Command) key-code catalog.
pub mod lg {
    pub use udap_lg::*;
}

/// Transport implementations: the UDP broadcast channel used by discovery
/// and the HTTP control transport used by pairing and commands.
pub mod transport {
    pub use udap_transport::*;
}
