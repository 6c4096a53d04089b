//! XML request envelopes for the UDAP control API.
//!
//! All functions are pure -- they produce the literal request bodies the
//! television firmware expects, byte for byte. The caller is responsible
//! for posting them over a [`ControlTransport`](udap_core::ControlTransport).

use udap_core::transport::CONTROL_PORT;

/// Path of the pairing endpoint on the control port.
pub const PAIRING_PATH: &str = "/udap/api/pairing";

/// Path of the command endpoint on the control port.
pub const COMMAND_PATH: &str = "/udap/api/command";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Build the envelope asking the television to show its pairing pin
/// on-screen.
pub fn show_key() -> String {
    format!(r#"{XML_DECL}<envelope><api type="pairing"><name>showKey</name></api></envelope>"#)
}

/// Build the pairing-confirmation envelope carrying the pin the user read
/// off-screen.
///
/// The `<port>` field echoes the control port back to the set; it is part
/// of the handshake, not the destination of the request.
pub fn hello(pin: &str) -> String {
    format!(
        r#"{XML_DECL}<envelope><api type="pairing"><name>hello</name><value>{pin}</value><port>{CONTROL_PORT}</port></api></envelope>"#
    )
}

/// Build the `HandleKeyInput` envelope for one remote-control key code.
///
/// The `<value>` field is the decimal code exactly as catalogued -- the
/// firmware matches it literally.
pub fn handle_key_input(code: u16) -> String {
    format!(
        r#"{XML_DECL}<envelope><api type="command"><name>HandleKeyInput</name><value>{code}</value></api></envelope>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;

    #[test]
    fn show_key_is_literal() {
        assert_eq!(
            show_key(),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?><envelope><api type=\"pairing\"><name>showKey</name></api></envelope>"
        );
    }

    #[test]
    fn hello_embeds_pin_and_port() {
        assert_eq!(
            hello("429590"),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?><envelope><api type=\"pairing\"><name>hello</name><value>429590</value><port>8080</port></api></envelope>"
        );
    }

    #[test]
    fn handle_key_input_embeds_decimal_code() {
        assert_eq!(
            handle_key_input(1),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?><envelope><api type=\"command\"><name>HandleKeyInput</name><value>1</value></api></envelope>"
        );
    }

    #[test]
    fn every_catalog_code_round_trips_into_the_envelope() {
        for cmd in Command::ALL {
            let body = handle_key_input(cmd.code());
            let expected = format!("<value>{}</value>", cmd.code());
            assert!(
                body.contains(&expected),
                "envelope for {cmd} must carry {expected}, got: {body}"
            );
            // The rest of the envelope is invariant across codes.
            assert!(body.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?><envelope><api type=\"command\"><name>HandleKeyInput</name><value>"));
            assert!(body.ends_with("</value></api></envelope>"));
        }
    }

    #[test]
    fn paths_are_literal() {
        assert_eq!(PAIRING_PATH, "/udap/api/pairing");
        assert_eq!(COMMAND_PATH, "/udap/api/command");
    }
}
