//! Broadcast-capable UDP channel for television discovery.
//!
//! [`UdpChannel`] wraps a [`tokio::net::UdpSocket`] bound to the discovery
//! listening port with broadcast enabled. One channel serves one discovery
//! session; it is constructed by the session and released when the session
//! is dropped, on every exit path (match, timeout, error).

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use tokio::net::UdpSocket;

use udap_core::error::{Error, Result};

/// Datagram channel for broadcast discovery.
///
/// Unlike a connected socket this receives from any sender; the discovery
/// engine classifies each inbound datagram by source address.
#[derive(Debug)]
pub struct UdpChannel {
    socket: UdpSocket,
    local_addr: SocketAddr,
}

impl UdpChannel {
    /// Bind to `0.0.0.0:{port}` with broadcast sending enabled.
    ///
    /// Pass `0` to let the OS pick a port (useful in tests). Bind or
    /// broadcast-flag failures are returned to the caller -- socket setup
    /// problems are fatal for the discovery attempt but the process
    /// decides what to do about them.
    pub async fn bind(port: u16) -> Result<Self> {
        let bind_addr = format!("0.0.0.0:{port}");
        tracing::debug!(addr = %bind_addr, "Binding discovery socket");

        let socket = UdpSocket::bind(&bind_addr).await.map_err(|e| {
            Error::Transport(format!("failed to bind discovery socket on {bind_addr}: {e}"))
        })?;
        socket
            .set_broadcast(true)
            .map_err(|e| Error::Transport(format!("failed to enable broadcast: {e}")))?;

        let local_addr = socket.local_addr().map_err(Error::Io)?;
        tracing::debug!(local_addr = %local_addr, "Discovery socket bound");

        Ok(UdpChannel { socket, local_addr })
    }

    /// The local address this channel is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Send one datagram to the IPv4 broadcast address on `port`.
    pub async fn send_broadcast(&self, data: &[u8], port: u16) -> Result<()> {
        let dest = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::BROADCAST, port));
        self.send_to(data, dest).await
    }

    /// Send one datagram to a specific address.
    pub async fn send_to(&self, data: &[u8], dest: SocketAddr) -> Result<()> {
        tracing::trace!(local = %self.local_addr, remote = %dest, bytes = data.len(), "Sending datagram");

        self.socket.send_to(data, dest).await.map_err(|e| {
            tracing::error!(remote = %dest, error = %e, "Failed to send datagram");
            Error::Transport(format!("failed to send datagram to {dest}: {e}"))
        })?;
        Ok(())
    }

    /// Receive one datagram with a deadline. Returns `(bytes_read, source)`.
    ///
    /// Bytes beyond `buf.len()` are discarded, standard UDP behavior; the
    /// discovery engine reads into a bounded 1024-byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] if no datagram arrives within `timeout`.
    pub async fn recv_from(&self, buf: &mut [u8], timeout: Duration) -> Result<(usize, SocketAddr)> {
        match tokio::time::timeout(timeout, self.socket.recv_from(buf)).await {
            Ok(Ok((n, src))) => {
                tracing::trace!(local = %self.local_addr, remote = %src, bytes = n, "Received datagram");
                Ok((n, src))
            }
            Ok(Err(e)) => {
                tracing::error!(local = %self.local_addr, error = %e, "Failed to receive datagram");
                Err(Error::Io(e))
            }
            Err(_) => Err(Error::Timeout),
        }
    }
}

/// Best-effort resolution of the host's own IPv4 address.
///
/// Opens a throwaway UDP socket and "connects" it toward the broadcast
/// address -- no datagram is sent -- so the OS routing table picks the
/// outbound interface, whose address is then read back. Returns `None` if
/// the host has no usable non-loopback IPv4 interface.
///
/// The discovery engine uses this to discard its own broadcast query when
/// it loops back, so the client never self-matches.
pub fn local_ipv4() -> Option<Ipv4Addr> {
    let socket = std::net::UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.set_broadcast(true).ok()?;
    socket.connect((Ipv4Addr::BROADCAST, 1990)).ok()?;
    match socket.local_addr().ok()? {
        SocketAddr::V4(v4) if !v4.ip().is_loopback() && !v4.ip().is_unspecified() => Some(*v4.ip()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_assigns_local_addr() {
        let channel = UdpChannel::bind(0).await.unwrap();
        assert_ne!(channel.local_addr().port(), 0, "OS should assign a port");
    }

    #[tokio::test]
    async fn send_recv_loopback() {
        let channel = UdpChannel::bind(0).await.unwrap();
        let sender = UdpSocket::bind("127.0.0.1:0").await.unwrap();

        let dest: SocketAddr = format!("127.0.0.1:{}", channel.local_addr().port())
            .parse()
            .unwrap();
        sender.send_to(b"B-SEARCH * HTTP/1.1", dest).await.unwrap();

        let mut buf = [0u8; 1024];
        let (n, src) = channel
            .recv_from(&mut buf, Duration::from_secs(2))
            .await
            .unwrap();

        assert_eq!(&buf[..n], b"B-SEARCH * HTTP/1.1");
        assert_eq!(src, sender.local_addr().unwrap());
    }

    #[tokio::test]
    async fn recv_timeout() {
        let channel = UdpChannel::bind(0).await.unwrap();

        let mut buf = [0u8; 1024];
        let result = channel.recv_from(&mut buf, Duration::from_millis(50)).await;

        assert!(
            matches!(result, Err(Error::Timeout)),
            "expected Timeout, got: {result:?}"
        );
    }

    #[tokio::test]
    async fn broadcast_flag_is_set() {
        // Sending to 255.255.255.255 may be unroutable in CI environments.
        // The important part is that bind() enabled SO_BROADCAST, so a
        // broadcast send attempt does not fail with EACCES.
        let channel = UdpChannel::bind(0).await.unwrap();
        let receiver = UdpChannel::bind(0).await.unwrap();
        let port = receiver.local_addr().port();

        if channel.send_broadcast(b"discovery", port).await.is_ok() {
            let mut buf = [0u8; 64];
            match receiver.recv_from(&mut buf, Duration::from_millis(200)).await {
                Ok((n, _)) => assert_eq!(&buf[..n], b"discovery"),
                Err(Error::Timeout) => {
                    // Broadcast not delivered on this host -- still valid.
                }
                Err(e) => panic!("unexpected error: {e:?}"),
            }
        }
    }

    #[tokio::test]
    async fn bounded_read_truncates() {
        let channel = UdpChannel::bind(0).await.unwrap();
        let sender = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let dest: SocketAddr = format!("127.0.0.1:{}", channel.local_addr().port())
            .parse()
            .unwrap();

        let big: Vec<u8> = (0..2048).map(|i| (i % 251) as u8).collect();
        sender.send_to(&big, dest).await.unwrap();

        let mut buf = [0u8; 1024];
        let (n, _) = channel
            .recv_from(&mut buf, Duration::from_secs(2))
            .await
            .unwrap();
        assert_eq!(n, 1024, "read is bounded by the buffer size");
        assert_eq!(&buf[..], &big[..1024]);
    }
}
