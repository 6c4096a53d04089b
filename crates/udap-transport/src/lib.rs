//! Transport implementations for the udap library.
//!
//! This crate provides the two concrete channels the UDAP protocol runs
//! over:
//!
//! - [`UdpChannel`]: a broadcast-capable datagram socket for television
//!   discovery
//! - [`HttpControlTransport`]: a [`ControlTransport`](udap_core::ControlTransport)
//!   implementation posting XML envelopes to the control endpoint
//!
//! # Example
//!
//! ```no_run
//! use udap_transport::UdpChannel;
//! use std::time::Duration;
//!
//! # async fn example() -> udap_core::Result<()> {
//! let channel = UdpChannel::bind(1990).await?;
//! channel.send_broadcast(b"B-SEARCH * HTTP/1.1\r\n\r\n", 1990).await?;
//!
//! let mut buf = [0u8; 1024];
//! let (n, src) = channel.recv_from(&mut buf, Duration::from_secs(3)).await?;
//! println!("{} bytes from {}", n, src);
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod udp;

pub use http::HttpControlTransport;
pub use udp::{local_ipv4, UdpChannel};
