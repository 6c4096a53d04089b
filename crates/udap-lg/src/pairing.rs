//! The two-step UDAP pairing handshake.
//!
//! Pairing establishes that this client may send remote-control commands:
//! `showKey` makes the television display a pin on-screen, and `hello`
//! submits that pin back. Both operations are single POSTs with no local
//! state, so they can be repeated freely -- the set accepts a repeated
//! `hello` with the same pin, which is what the command dispatcher's
//! re-pair fallback relies on.

use std::sync::Arc;

use tracing::{debug, warn};

use udap_core::error::{Error, Result};
use udap_core::television::Television;
use udap_core::transport::ControlTransport;

use crate::envelope;

/// Pairing operations against one television's control endpoint.
#[derive(Clone)]
pub struct PairingSession {
    transport: Arc<dyn ControlTransport>,
}

impl PairingSession {
    /// Create a pairing session over the given control transport.
    pub fn new(transport: Arc<dyn ControlTransport>) -> Self {
        PairingSession { transport }
    }

    /// Ask the television to show its pairing pin on-screen.
    ///
    /// Fired automatically when discovery matches a set, so the user can
    /// read the pin off-screen. Failure is reported to the caller but is
    /// not fatal to the surrounding discovery session.
    pub async fn request_pin_display(&self, tv: &Television) -> Result<()> {
        let addr = tv.addr().ok_or(Error::NotDiscovered)?;
        let response = self
            .transport
            .post(addr, envelope::PAIRING_PATH, &envelope::show_key())
            .await?;

        if response.is_ok() {
            debug!(addr = %addr, "Pin display request accepted");
            Ok(())
        } else {
            warn!(addr = %addr, status = response.status, "Pin display request rejected");
            Err(Error::Rejected(response.status))
        }
    }

    /// Confirm the pairing with the television's pin.
    ///
    /// Succeeds iff the set answers HTTP 200. No pin format validation is
    /// performed -- the firmware is the authority on what it accepts.
    pub async fn confirm(&self, tv: &Television) -> Result<()> {
        let addr = tv.addr().ok_or(Error::NotDiscovered)?;
        let pin = tv.pin().ok_or(Error::MissingPin)?;

        debug!(addr = %addr, name = tv.name().unwrap_or("<unnamed>"), "Confirming pairing");
        let response = self
            .transport
            .post(addr, envelope::PAIRING_PATH, &envelope::hello(pin))
            .await?;

        if response.is_ok() {
            debug!(addr = %addr, "Pairing confirmed");
            Ok(())
        } else {
            warn!(addr = %addr, status = response.status, "Pairing rejected");
            Err(Error::Rejected(response.status))
        }
    }
}
