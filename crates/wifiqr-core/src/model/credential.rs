// ── WiFi credential ──

use serde::{Deserialize, Serialize};

use super::security::Security;
use crate::codec::DecodeError;

/// Credentials for joining one WiFi network.
///
/// The SSID is never empty once a value exists: [`WifiCredential::new`], the
/// decoder and deserialization all reject an empty name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCredential")]
pub struct WifiCredential {
    ssid: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    security: Security,
    #[serde(default)]
    hidden: bool,
}

/// Unchecked serde shape of [`WifiCredential`].
#[derive(Deserialize)]
struct RawCredential {
    ssid: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    security: Security,
    #[serde(default)]
    hidden: bool,
}

impl TryFrom<RawCredential> for WifiCredential {
    type Error = DecodeError;

    fn try_from(raw: RawCredential) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.ssid, raw.password, raw.security)?.with_hidden(raw.hidden))
    }
}

impl WifiCredential {
    pub fn new(
        ssid: impl Into<String>,
        password: impl Into<String>,
        security: Security,
    ) -> Result<Self, DecodeError> {
        let ssid = ssid.into();
        if ssid.is_empty() {
            return Err(DecodeError::MissingSsid);
        }
        Ok(Self {
            ssid,
            password: password.into(),
            security,
            hidden: false,
        })
    }

    /// Credentials for an open network.
    pub fn open(ssid: impl Into<String>) -> Result<Self, DecodeError> {
        Self::new(ssid, String::new(), Security::Open)
    }

    /// Mark the network as hidden (or not).
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn security(&self) -> &Security {
        &self.security
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
