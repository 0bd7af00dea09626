// ── Manual credential entry ──
//
// Validation for credentials typed in by hand, before they are encoded or
// joined. Open networks never keep a password.

use thiserror::Error;

use super::credential::WifiCredential;
use super::security::Security;

/// Longest SSID allowed by IEEE 802.11, in bytes.
pub const MAX_SSID_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("network name must not be blank")]
    SsidBlank,

    #[error("network name is {len} bytes, the limit is {max}")]
    SsidTooLong { len: usize, max: usize },

    #[error("a password is required for {security} networks")]
    PasswordRequired { security: String },
}

/// Raw form input for a credential.
#[derive(Debug, Clone, Default)]
pub struct CredentialForm {
    pub ssid: String,
    pub password: String,
    pub security: Security,
    pub hidden: bool,
}

impl CredentialForm {
    /// Validate the form and build a credential.
    pub fn submit(self) -> Result<WifiCredential, EntryError> {
        if self.ssid.trim().is_empty() {
            return Err(EntryError::SsidBlank);
        }
        if self.ssid.len() > MAX_SSID_LEN {
            return Err(EntryError::SsidTooLong {
                len: self.ssid.len(),
                max: MAX_SSID_LEN,
            });
        }

        let password = if self.security.is_open() {
            String::new()
        } else if self.password.is_empty() {
            return Err(EntryError::PasswordRequired {
                security: self.security.label().to_owned(),
            });
        } else {
            self.password
        };

        WifiCredential::new(self.ssid, password, self.security)
            .map(|credential| credential.with_hidden(self.hidden))
            .map_err(|_| EntryError::SsidBlank)
    }
}
