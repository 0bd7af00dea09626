// ── Security type ──
//
// One enum owns both spellings of a network's security: the compact token
// that travels inside the QR payload and the label shown to people.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire token for WPA/WPA2 personal networks.
pub const TOKEN_WPA: &str = "WPA";
/// Wire token for WEP networks.
pub const TOKEN_WEP: &str = "WEP";
/// Wire token for open networks.
pub const TOKEN_OPEN: &str = "nopass";

/// Human label for [`Security::Wpa`].
pub const LABEL_WPA: &str = "WPA/WPA2";
/// Human label for [`Security::Wep`].
pub const LABEL_WEP: &str = "WEP";
/// Human label for [`Security::Open`].
pub const LABEL_OPEN: &str = "Open Network";
/// Human label for [`Security::Unknown`].
pub const LABEL_UNKNOWN: &str = "Unknown";

/// Security of a WiFi network.
///
/// | Variant      | Wire token | Human label    |
/// |--------------|------------|----------------|
/// | `Wpa`        | `WPA`      | `WPA/WPA2`     |
/// | `Wep`        | `WEP`      | `WEP`          |
/// | `Open`       | `nopass`   | `Open Network` |
/// | `Unknown`    | *(empty)*  | `Unknown`      |
/// | `Other(t)`   | `t`        | `t`            |
///
/// `WPA` and `WEP` are matched in any case; `nopass` only in lower case, so
/// `NOPASS` stays `Other("NOPASS")`.
///
/// Serialized as the wire token, so every variant (including an `Other`
/// whose token looks like a label) reloads unchanged. Show [`Security::label`]
/// to people.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Security {
    #[default]
    Wpa,
    Wep,
    Open,
    Unknown,
    /// A token outside the fixed table, carried verbatim.
    Other(String),
}

impl Security {
    /// Parse the `T:` token of a QR payload.
    ///
    /// `WPA` and `WEP` match case-insensitively, `nopass` exactly; an empty
    /// token is `Unknown`; anything else is kept as-is.
    pub fn from_wire(token: &str) -> Self {
        if token.is_empty() {
            Self::Unknown
        } else if token.eq_ignore_ascii_case(TOKEN_WPA) {
            Self::Wpa
        } else if token.eq_ignore_ascii_case(TOKEN_WEP) {
            Self::Wep
        } else if token == TOKEN_OPEN {
            Self::Open
        } else {
            Self::Other(token.to_owned())
        }
    }

    /// Parse user input that may be either a human label or a wire token.
    pub fn from_label_or_token(value: &str) -> Self {
        match value {
            LABEL_WPA => Self::Wpa,
            LABEL_OPEN => Self::Open,
            LABEL_UNKNOWN => Self::Unknown,
            other => Self::from_wire(other),
        }
    }

    /// The token written after `T:` in a QR payload.
    pub fn wire_token(&self) -> &str {
        match self {
            Self::Wpa => TOKEN_WPA,
            Self::Wep => TOKEN_WEP,
            Self::Open => TOKEN_OPEN,
            Self::Unknown => "",
            Self::Other(token) => token,
        }
    }

    /// The label shown to people.
    pub fn label(&self) -> &str {
        match self {
            Self::Wpa => LABEL_WPA,
            Self::Wep => LABEL_WEP,
            Self::Open => LABEL_OPEN,
            Self::Unknown => LABEL_UNKNOWN,
            Self::Other(token) => token,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Security> for String {
    fn from(security: Security) -> Self {
        match security {
            Security::Other(token) => token,
            other => other.wire_token().to_owned(),
        }
    }
}

impl From<String> for Security {
    fn from(value: String) -> Self {
        Self::from_wire(&value)
    }
}

impl From<&str> for Security {
    fn from(value: &str) -> Self {
        Self::from_wire(value)
    }
}
