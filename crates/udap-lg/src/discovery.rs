//! Television discovery via UDP broadcast.
//!
//! UDAP televisions answer a B-SEARCH broadcast on UDP port 1990 with a
//! text reply whose `SERVER:` header carries the device name. This module
//! owns the datagram channel for one discovery session, broadcasts the
//! query, and classifies every inbound datagram until the television is
//! found or the caller's deadline passes.
//!
//! # Usage
//!
//! ```no_run
//! use std::time::Duration;
//! use udap_core::Television;
//! use udap_lg::{DiscoverySession, LgTv};
//!
//! # async fn example() -> udap_core::Result<()> {
//! let client = LgTv::with_http()?;
//! let mut tv = Television::new();
//!
//! let session = DiscoverySession::bind().await?;
//! session
//!     .discover(&mut tv, client.pairing(), Duration::from_secs(10))
//!     .await?;
//! println!("{} at {}", tv.name().unwrap(), tv.addr().unwrap());
//! # Ok(())
//! # }
//! ```

use std::net::{IpAddr, Ipv4Addr, SocketAddr, SocketAddrV4};
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tracing::{debug, trace, warn};

use udap_core::error::{Error, Result};
use udap_core::television::Television;
use udap_transport::{local_ipv4, UdpChannel};

use crate::pairing::PairingSession;

/// UDP port televisions listen on for the discovery query and answer from.
pub const DISCOVERY_PORT: u16 = 1990;

/// Bounded size of one inbound discovery datagram read.
pub const DISCOVERY_BUFFER: usize = 1024;

/// The literal B-SEARCH query broadcast to locate a television.
pub const DISCOVERY_QUERY: &str = "B-SEARCH * HTTP/1.1\r\n\
    HOST: 255.255.255.255:1990\r\n\
    MAN: \"ssdp:discover\"\r\n\
    MX: 3\r\n\
    ST: urn:schemas-udap:service:smartText:1\r\n\
    USER-AGENT: linux UDAP/2.0 ninjasphere\r\n\r\n";

/// Grammar of a discovery reply: a `SERVER:` header of two word/slash/dot
/// tokens followed by the parenthesized device name (word characters and
/// hyphens). Anything that does not match is ignored, never guessed at.
static SERVER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"SERVER:\s+[\w/.]+\s+[\w/.]+\s+\(([\w-]+)\)").expect("discovery pattern compiles")
});

/// What one inbound datagram turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A broadcast reply carrying the television's advertised name.
    DiscoveryMatch {
        /// Device name captured from the `SERVER:` header.
        name: String,
    },
    /// An unsolicited message from the already-discovered television.
    ///
    /// Surfaced so callers can handle it; the discovery loop itself only
    /// logs it.
    KnownDevice {
        /// The datagram payload as lossy UTF-8.
        message: String,
    },
    /// Unrelated traffic.
    Ignored,
}

/// Classify one inbound datagram against the session's television.
///
/// Rules, in order:
/// 1. a zero-length datagram is an error, not a silent ignore;
/// 2. a datagram from source port 1990 is a candidate discovery reply and
///    is matched against the `SERVER:` grammar (non-matching replies are
///    ignored, not fatal);
/// 3. a datagram from the television's resolved address after discovery is
///    an unsolicited [`KnownDevice`](Classification::KnownDevice) message;
/// 4. everything else is ignored.
pub fn classify(datagram: &[u8], sender: SocketAddr, tv: &Television) -> Result<Classification> {
    if datagram.is_empty() {
        return Err(Error::BlankMessage);
    }

    let text = String::from_utf8_lossy(datagram);

    if sender.port() == DISCOVERY_PORT {
        if let Some(caps) = SERVER_PATTERN.captures(&text) {
            return Ok(Classification::DiscoveryMatch {
                name: caps[1].to_string(),
            });
        }
        debug!(sender = %sender, "Datagram on discovery port did not match SERVER grammar");
        return Ok(Classification::Ignored);
    }

    if tv.found() && tv.addr().map(IpAddr::V4) == Some(sender.ip()) {
        return Ok(Classification::KnownDevice {
            message: text.into_owned(),
        });
    }

    Ok(Classification::Ignored)
}

/// One discovery session: an owned broadcast channel plus the local
/// address used to suppress our own query when it loops back.
///
/// Sessions are independent; binding a channel per session (instead of a
/// process-wide socket) is what allows several sessions to coexist and
/// guarantees the socket is released whenever the session is dropped.
pub struct DiscoverySession {
    channel: UdpChannel,
    local_ip: Option<Ipv4Addr>,
    query_target: SocketAddr,
}

impl DiscoverySession {
    /// Bind a session on the standard discovery port (1990).
    pub async fn bind() -> Result<Self> {
        Self::bind_on_port(DISCOVERY_PORT).await
    }

    /// Bind a session on a specific port.
    ///
    /// This variant allows tests to run discovery against mock replies on
    /// an unprivileged loopback port.
    pub async fn bind_on_port(port: u16) -> Result<Self> {
        let channel = UdpChannel::bind(port).await?;
        let local_ip = local_ipv4();
        match local_ip {
            Some(ip) => debug!(local_ip = %ip, "Resolved local address for self-filtering"),
            None => warn!("Could not resolve a local IPv4 address; self-filtering disabled"),
        }
        Ok(DiscoverySession {
            channel,
            local_ip,
            query_target: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::BROADCAST, DISCOVERY_PORT)),
        })
    }

    /// Override the resolved local address used for self-filtering.
    pub fn with_local_ip(mut self, ip: Option<Ipv4Addr>) -> Self {
        self.local_ip = ip;
        self
    }

    /// Redirect the query away from the broadcast address.
    ///
    /// Tests point this at a loopback sink so the query send succeeds in
    /// environments where broadcast is unroutable.
    pub fn with_query_target(mut self, target: SocketAddr) -> Self {
        self.query_target = target;
        self
    }

    /// The local address of the session's channel.
    pub fn local_addr(&self) -> SocketAddr {
        self.channel.local_addr()
    }

    /// Run discovery until `tv` is found or `timeout` passes.
    ///
    /// Sends exactly one B-SEARCH query (the send always precedes the
    /// receive loop), then classifies inbound datagrams one bounded read
    /// at a time. On a match the television's name and address are
    /// recorded and it is immediately asked to show its pairing pin via
    /// `pairing` -- a failed pin request is logged but does not fail the
    /// discovery.
    ///
    /// # Errors
    ///
    /// - [`Error::Timeout`] if nothing matched within the deadline;
    /// - [`Error::BlankMessage`] if a zero-length datagram arrived;
    /// - [`Error::Transport`] if the query could not be sent.
    pub async fn discover(
        &self,
        tv: &mut Television,
        pairing: &PairingSession,
        timeout: Duration,
    ) -> Result<()> {
        debug!(target = %self.query_target, "Broadcasting discovery query");
        self.channel
            .send_to(DISCOVERY_QUERY.as_bytes(), self.query_target)
            .await?;

        let deadline = tokio::time::Instant::now() + timeout;
        let mut buf = [0u8; DISCOVERY_BUFFER];

        while !tv.found() {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return Err(Error::Timeout);
            }

            let (n, sender) = self.channel.recv_from(&mut buf, remaining).await?;

            if self.is_own_datagram(sender) {
                trace!(sender = %sender, "Discarding our own broadcast");
                continue;
            }

            match classify(&buf[..n], sender, tv)? {
                Classification::DiscoveryMatch { name } => {
                    let SocketAddr::V4(v4) = sender else {
                        continue;
                    };
                    if tv.record_discovery(&name, *v4.ip()) {
                        debug!(name = %name, addr = %v4.ip(), "Television discovered");
                        // Protocol sequencing: a discovered set is asked to
                        // show its pin so the user can read it off-screen.
                        if let Err(e) = pairing.request_pin_display(tv).await {
                            warn!(error = %e, "Pin display request failed");
                        }
                    }
                }
                Classification::KnownDevice { message } => {
                    debug!(sender = %sender, message = %message, "Message from known television");
                }
                Classification::Ignored => {}
            }
        }

        Ok(())
    }

    fn is_own_datagram(&self, sender: SocketAddr) -> bool {
        match (self.local_ip, sender.ip()) {
            (Some(local), IpAddr::V4(ip)) => ip == local,
            _ => false,
        }
    }
}
