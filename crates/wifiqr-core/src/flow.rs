// ── Scan → decode → join flow ──
//
// Orchestrates one scanned code end to end. Device services arrive as
// injected capabilities so the flow runs the same on a phone, a desktop,
// or in tests.

use tracing::{debug, info, warn};

use crate::codec::{self, DecodeError, DecodeOptions};
use crate::error::CoreError;
use crate::history::HistoryStore;
use crate::join::{HapticFeedback, JoinPlan, NetworkJoiner, SoundEffects};
use crate::model::WifiCredential;

/// Result of handing one detected code to the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The code is not a WiFi QR code. No feedback fired.
    NotWifi,
    /// A WiFi QR code that failed to decode.
    Invalid(DecodeError),
    /// A decoded credential, ready to show or join.
    Credential(WifiCredential),
}

pub struct ScanFlow<J, H, S> {
    joiner: J,
    haptics: H,
    sounds: S,
    history: Option<HistoryStore>,
    decode_options: DecodeOptions,
}

impl<J, H, S> ScanFlow<J, H, S>
where
    J: NetworkJoiner,
    H: HapticFeedback,
    S: SoundEffects,
{
    pub fn new(joiner: J, haptics: H, sounds: S) -> Self {
        Self {
            joiner,
            haptics,
            sounds,
            history: None,
            decode_options: DecodeOptions::default(),
        }
    }

    /// Record successful joins in `history`.
    pub fn with_history(mut self, history: HistoryStore) -> Self {
        self.history = Some(history);
        self
    }

    pub fn with_decode_options(mut self, options: DecodeOptions) -> Self {
        self.decode_options = options;
        self
    }

    /// Handle one raw string from the barcode detector.
    pub fn on_detected(&self, raw: &str) -> ScanOutcome {
        if !codec::is_wifi_payload(raw) {
            debug!("detected code is not a WiFi payload");
            return ScanOutcome::NotWifi;
        }

        self.haptics.qr_detected();
        self.sounds.scan_beep();

        match codec::decode_with(raw, self.decode_options) {
            Ok(credential) => {
                info!(ssid = credential.ssid(), security = %credential.security(), "scanned WiFi code");
                ScanOutcome::Credential(credential)
            }
            Err(err) => {
                warn!(error = %err, "WiFi code could not be decoded");
                self.haptics.error();
                self.sounds.error();
                ScanOutcome::Invalid(err)
            }
        }
    }

    /// Join the network and, on success, remember it.
    ///
    /// Acknowledges the request with a tap and a click before joining.
    pub fn connect(&self, credential: &WifiCredential) -> Result<JoinPlan, CoreError> {
        self.haptics.tap();
        self.sounds.click();

        let result = JoinPlan::from_credential(credential, self.joiner.api())
            .and_then(|plan| self.joiner.join(&plan).map(|()| plan));

        let plan = match result {
            Ok(plan) => plan,
            Err(err) => {
                warn!(ssid = credential.ssid(), error = %err, "join failed");
                self.haptics.error();
                self.sounds.error();
                return Err(err);
            }
        };

        info!(ssid = credential.ssid(), "joined network");
        self.haptics.success();
        self.sounds.success();

        if let Some(history) = &self.history {
            if let Err(err) = history.save(credential.clone()) {
                warn!(error = %err, "could not record network in history");
            }
        }

        Ok(plan)
    }
}
