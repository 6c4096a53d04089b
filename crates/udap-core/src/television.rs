//! The television entity acted on by discovery, pairing, and dispatch.
//!
//! A [`Television`] starts blank (or with a pre-configured pin for a known
//! device). Discovery resolves its name and network address; pairing and
//! command dispatch only read from it. The discovery fields are private so
//! that [`record_discovery`](Television::record_discovery) is the single
//! code path allowed to set them.

use std::net::Ipv4Addr;

/// Opaque vendor metadata identifying the client application to the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TvIdentity {
    /// Application id reported during pairing (vendor-assigned, opaque).
    pub app_id: String,
    /// Human-readable application name.
    pub app_name: String,
}

/// A single television on the local network.
///
/// Created by the caller, mutated only by a successful discovery exchange,
/// and discarded when no longer needed -- there is no teardown protocol.
#[derive(Debug, Clone, Default)]
pub struct Television {
    /// Client application metadata.
    pub identity: TvIdentity,
    id: Option<String>,
    name: Option<String>,
    addr: Option<Ipv4Addr>,
    found: bool,
    pin: Option<String>,
}

impl Television {
    /// Create a blank television with no pin configured.
    pub fn new() -> Self {
        Television::default()
    }

    /// Create a television with a pre-configured pairing pin.
    ///
    /// Use this for a device that has been paired before, so commands can
    /// be dispatched (and the pairing silently re-established) without
    /// asking the user to read the pin off-screen again.
    pub fn with_pin(pin: &str) -> Self {
        Television {
            pin: Some(pin.to_string()),
            ..Television::default()
        }
    }

    /// Set the pairing pin the user read off the television screen.
    pub fn set_pin(&mut self, pin: &str) {
        self.pin = Some(pin.to_string());
    }

    /// The configured pairing pin, if any.
    pub fn pin(&self) -> Option<&str> {
        self.pin.as_deref()
    }

    /// The device name advertised in the discovery reply.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The protocol identifier advertised by the device, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Record a protocol identifier for the device.
    pub fn set_id(&mut self, id: &str) {
        self.id = Some(id.to_string());
    }

    /// The television's IPv4 address, resolved by discovery.
    pub fn addr(&self) -> Option<Ipv4Addr> {
        self.addr
    }

    /// Whether discovery has located this television.
    ///
    /// Transitions false -> true at most once per session and never resets.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Record a successful discovery reply.
    ///
    /// Sets `name` and `addr` together and marks the television found.
    /// Returns `true` if this call performed the transition. Once found,
    /// further calls are no-ops returning `false` -- a second structurally
    /// valid reply must not overwrite the resolved identity.
    pub fn record_discovery(&mut self, name: &str, addr: Ipv4Addr) -> bool {
        if self.found {
            return false;
        }
        self.name = Some(name.to_string());
        self.addr = Some(addr);
        self.found = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_television_is_blank() {
        let tv = Television::new();
        assert!(tv.name().is_none());
        assert!(tv.addr().is_none());
        assert!(tv.pin().is_none());
        assert!(!tv.found());
    }

    #[test]
    fn with_pin_preconfigures_pin() {
        let tv = Television::with_pin("1234");
        assert_eq!(tv.pin(), Some("1234"));
        assert!(!tv.found());
    }

    #[test]
    fn record_discovery_sets_fields_atomically() {
        let mut tv = Television::new();
        let addr: Ipv4Addr = "192.168.1.50".parse().unwrap();

        assert!(tv.record_discovery("LivingRoomTV", addr));
        assert_eq!(tv.name(), Some("LivingRoomTV"));
        assert_eq!(tv.addr(), Some(addr));
        assert!(tv.found());
    }

    #[test]
    fn record_discovery_is_monotonic() {
        let mut tv = Television::new();
        let first: Ipv4Addr = "192.168.1.50".parse().unwrap();
        let second: Ipv4Addr = "192.168.1.99".parse().unwrap();

        assert!(tv.record_discovery("LivingRoomTV", first));
        // A second structurally valid reply must not overwrite anything.
        assert!(!tv.record_discovery("Imposter", second));
        assert_eq!(tv.name(), Some("LivingRoomTV"));
        assert_eq!(tv.addr(), Some(first));
        assert!(tv.found());
    }

    #[test]
    fn set_pin_after_discovery() {
        let mut tv = Television::new();
        tv.record_discovery("Bedroom", "10.0.0.7".parse().unwrap());
        tv.set_pin("987654");
        assert_eq!(tv.pin(), Some("987654"));
    }
}
