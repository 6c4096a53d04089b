//! Command dispatch against a paired television.
//!
//! The dispatcher posts a `HandleKeyInput` envelope and, when the first
//! attempt does not come back HTTP 200, re-confirms the pairing once and
//! resends the identical envelope once. Televisions silently drop their
//! pairing table on power-cycle, so a single re-pair recovers the common
//! failure without ever looping.

use std::sync::Arc;

use tracing::{debug, warn};

use udap_core::error::Error;
use udap_core::transport::ControlTransport;
use udap_core::Result;
use udap_core::Television;
use udap_transport::HttpControlTransport;

use crate::commands::Command;
use crate::envelope;
use crate::pairing::PairingSession;

/// Outcome of one [`LgTv::send_command`] call.
///
/// Dispatch never returns `Err`: every outcome, including transport
/// failures on both attempts, is folded into this report so the caller
/// always learns how far delivery got.
#[derive(Debug)]
pub struct DispatchReport {
    /// Whether the television acknowledged the command with HTTP 200.
    pub delivered: bool,
    /// How many command posts were attempted (0, 1 or 2).
    pub attempts: u32,
    /// Whether the re-pair fallback ran.
    pub repaired: bool,
    /// HTTP status of the last command attempt that got a response.
    pub last_status: Option<u16>,
    /// The last error observed, if delivery ultimately failed.
    pub last_error: Option<Error>,
}

impl DispatchReport {
    fn undelivered(error: Error) -> Self {
        DispatchReport {
            delivered: false,
            attempts: 0,
            repaired: false,
            last_status: None,
            last_error: Some(error),
        }
    }
}

/// Client for one LG television's control endpoint.
///
/// Holds the control transport and a [`PairingSession`] sharing it. The
/// client itself is stateless; all per-device state lives in the
/// [`Television`] the caller passes in.
pub struct LgTv {
    transport: Arc<dyn ControlTransport>,
    pairing: PairingSession,
}

impl LgTv {
    /// Create a client over an arbitrary control transport.
    pub fn new(transport: Arc<dyn ControlTransport>) -> Self {
        let pairing = PairingSession::new(transport.clone());
        LgTv { transport, pairing }
    }

    /// Create a client over the standard HTTP control transport.
    pub fn with_http() -> Result<Self> {
        Ok(Self::new(Arc::new(HttpControlTransport::new()?)))
    }

    /// The pairing session sharing this client's transport.
    pub fn pairing(&self) -> &PairingSession {
        &self.pairing
    }

    /// Send one remote-control command to the television.
    ///
    /// Posts the command envelope; if the set does not answer HTTP 200
    /// (or the post fails outright), re-confirms the pairing once and
    /// resends the same envelope once. The resend happens even when the
    /// re-pair itself fails, since the first rejection may have had an
    /// unrelated transient cause.
    pub async fn send_command(&self, tv: &Television, command: Command) -> DispatchReport {
        let Some(addr) = tv.addr() else {
            return DispatchReport::undelivered(Error::NotDiscovered);
        };

        let body = envelope::handle_key_input(command.code());
        debug!(addr = %addr, command = %command, code = command.code(), "Sending command");

        let mut report = DispatchReport {
            delivered: false,
            attempts: 0,
            repaired: false,
            last_status: None,
            last_error: None,
        };

        match self.post_command(addr, &body, &mut report).await {
            Ok(()) => return report,
            Err(e) => {
                warn!(addr = %addr, command = %command, error = %e, "Command rejected; re-pairing once");
                report.last_error = Some(e);
            }
        }

        report.repaired = true;
        if let Err(e) = self.pairing.confirm(tv).await {
            warn!(addr = %addr, error = %e, "Re-pair failed; retrying command regardless");
        }

        match self.post_command(addr, &body, &mut report).await {
            Ok(()) => {}
            Err(e) => {
                warn!(addr = %addr, command = %command, error = %e, "Command failed after re-pair");
                report.last_error = Some(e);
            }
        }

        report
    }

    async fn post_command(
        &self,
        addr: std::net::Ipv4Addr,
        body: &str,
        report: &mut DispatchReport,
    ) -> Result<()> {
        report.attempts += 1;
        let response = self
            .transport
            .post(addr, envelope::COMMAND_PATH, body)
            .await?;
        report.last_status = Some(response.status);
        if response.is_ok() {
            report.delivered = true;
            report.last_error = None;
            Ok(())
        } else {
            Err(Error::Rejected(response.status))
        }
    }
}
