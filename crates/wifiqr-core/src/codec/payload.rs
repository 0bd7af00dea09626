// ── WIFI: payload encoder / decoder ──
//
// Wire form: `WIFI:T:<token>;S:<ssid>;P:<password>;H:<true|false>;;`
// Fields may arrive in any order; `P:` is omitted for empty passwords.

use std::fmt::Write as _;

use thiserror::Error;
use tracing::trace;

use super::escape::{escape, split_escape_aware, unescape};
use crate::model::{Security, WifiCredential};

/// Literal prefix of every WiFi QR payload.
pub const PREFIX: &str = "WIFI:";

/// Why a payload could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("payload does not start with `WIFI:`")]
    InvalidPrefix,

    #[error("payload has no network name (`S:` field missing or empty)")]
    MissingSsid,
}

/// How the payload body is cut into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Split on every `;`. An escaped `\;` inside a value ends the field,
    /// which truncates such values. Matches widely deployed scanners.
    #[default]
    Naive,
    /// A `;` preceded by an escaping backslash stays inside the value.
    EscapeAware,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    pub split: SplitMode,
}

impl DecodeOptions {
    pub fn escape_aware() -> Self {
        Self {
            split: SplitMode::EscapeAware,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Security,
    Ssid,
    Password,
    Hidden,
}

const FIELDS: [(&str, Field); 4] = [
    ("T:", Field::Security),
    ("S:", Field::Ssid),
    ("P:", Field::Password),
    ("H:", Field::Hidden),
];

/// Quick check for the `WIFI:` prefix, before a full decode.
pub fn is_wifi_payload(raw: &str) -> bool {
    raw.starts_with(PREFIX)
}

/// Build the payload for a credential.
pub fn encode(credential: &WifiCredential) -> String {
    let mut out = String::from(PREFIX);
    let _ = write!(out, "T:{};", credential.security().wire_token());
    let _ = write!(out, "S:{};", escape(credential.ssid()));
    if !credential.password().is_empty() {
        let _ = write!(out, "P:{};", escape(credential.password()));
    }
    let _ = write!(out, "H:{};;", credential.is_hidden());
    out
}

/// Build a payload from loose fields. `security` may be a wire token or a
/// human label.
pub fn encode_fields(
    ssid: &str,
    password: &str,
    security: &str,
    hidden: bool,
) -> Result<String, DecodeError> {
    let credential = WifiCredential::new(ssid, password, Security::from_label_or_token(security))?
        .with_hidden(hidden);
    Ok(encode(&credential))
}

/// Decode a payload with the default (naive) field split.
pub fn decode(raw: &str) -> Result<WifiCredential, DecodeError> {
    decode_with(raw, DecodeOptions::default())
}

/// Decode a payload.
pub fn decode_with(raw: &str, options: DecodeOptions) -> Result<WifiCredential, DecodeError> {
    let body = raw.strip_prefix(PREFIX).ok_or(DecodeError::InvalidPrefix)?;

    let parts: Vec<&str> = match options.split {
        SplitMode::Naive => body.split(';').collect(),
        SplitMode::EscapeAware => split_escape_aware(body),
    };

    let mut token = "";
    let mut ssid = String::new();
    let mut password = String::new();
    let mut hidden = false;

    for part in parts {
        let Some((field, value)) = FIELDS
            .iter()
            .find_map(|(prefix, field)| part.strip_prefix(*prefix).map(|v| (*field, v)))
        else {
            if !part.is_empty() {
                trace!(part, "ignoring unrecognized payload field");
            }
            continue;
        };

        match field {
            Field::Security => token = value,
            Field::Ssid => ssid = unescape(value),
            Field::Password => password = unescape(value),
            Field::Hidden => hidden = value.eq_ignore_ascii_case("true"),
        }
    }

    if ssid.is_empty() {
        return Err(DecodeError::MissingSsid);
    }

    Ok(WifiCredential::new(ssid, password, Security::from_wire(token))?.with_hidden(hidden))
}
