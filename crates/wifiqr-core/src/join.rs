// ── Join planning and device capabilities ──
//
// Turning a credential into a platform join request, plus the capability
// traits the scan flow depends on. Platforms implement the traits; the core
// never reaches for ambient services.

use serde::Serialize;

use crate::error::CoreError;
use crate::model::{Security, WifiCredential};

/// Which platform join interface the plan targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinApi {
    /// Network-specifier style API. Has no WEP support.
    #[default]
    Modern,
    /// Saved-configuration style API with explicit WEP keys.
    Legacy,
}

/// Authentication material for a join request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "key")]
pub enum JoinAuth {
    Open,
    Wpa2Passphrase(String),
    WepKey(String),
}

/// A fully resolved join request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinPlan {
    pub ssid: String,
    pub auth: JoinAuth,
    pub hidden: bool,
    pub api: JoinApi,
}

impl JoinPlan {
    /// Build the plan for `credential` on the given API.
    ///
    /// The modern API joins WEP networks with a WPA2 passphrase since it
    /// offers nothing else.
    pub fn from_credential(credential: &WifiCredential, api: JoinApi) -> Result<Self, CoreError> {
        let password = credential.password().to_owned();
        let auth = match (credential.security(), api) {
            (Security::Open, _) => JoinAuth::Open,
            (Security::Wpa, _) | (Security::Wep, JoinApi::Modern) => {
                JoinAuth::Wpa2Passphrase(password)
            }
            (Security::Wep, JoinApi::Legacy) => JoinAuth::WepKey(password),
            (Security::Unknown | Security::Other(_), _) => {
                return Err(CoreError::JoinUnsupported {
                    ssid: credential.ssid().to_owned(),
                    security: credential.security().label().to_owned(),
                });
            }
        };

        Ok(Self {
            ssid: credential.ssid().to_owned(),
            auth,
            hidden: credential.is_hidden(),
            api,
        })
    }
}

/// Joins the device to a network.
pub trait NetworkJoiner {
    fn api(&self) -> JoinApi {
        JoinApi::Modern
    }

    fn join(&self, plan: &JoinPlan) -> Result<(), CoreError>;
}

/// Haptic cues.
pub trait HapticFeedback {
    fn tap(&self);
    fn success(&self);
    fn error(&self);
    fn qr_detected(&self);
}

/// Audible cues.
pub trait SoundEffects {
    fn scan_beep(&self);
    fn success(&self);
    fn error(&self);
    fn click(&self);
}

/// Capability that does nothing, for hosts without haptics or audio.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl HapticFeedback for Silent {
    fn tap(&self) {}
    fn success(&self) {}
    fn error(&self) {}
    fn qr_detected(&self) {}
}

impl SoundEffects for Silent {
    fn scan_beep(&self) {}
    fn success(&self) {}
    fn error(&self) {}
    fn click(&self) {}
}
