//! WiFi QR payload codec and the pieces built around it.
//!
//! - **[`codec`]**: bidirectional transform between a [`WifiCredential`]
//!   and the `WIFI:T:<token>;S:<ssid>;P:<password>;H:<hidden>;;` payload,
//!   with escaping and the fixed wire-token ↔ label table owned by
//!   [`Security`].
//! - **[`model`]**: credential and security types, plus validation for
//!   hand-typed credentials.
//! - **[`history`]**: bounded, newest-first record of scanned and joined
//!   networks, persisted as JSON.
//! - **[`join`]**: join planning and the capability traits
//!   ([`NetworkJoiner`], [`HapticFeedback`], [`SoundEffects`]) a platform
//!   implements.
//! - **[`flow`]**: [`ScanFlow`], the scan → decode → join orchestrator.

pub mod codec;
pub mod error;
pub mod flow;
pub mod history;
pub mod join;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use codec::{DecodeError, DecodeOptions, SplitMode, decode, decode_with, encode};
pub use error::CoreError;
pub use flow::{ScanFlow, ScanOutcome};
pub use history::{History, HistoryStore, SavedNetwork};
pub use join::{HapticFeedback, JoinApi, JoinAuth, JoinPlan, NetworkJoiner, Silent, SoundEffects};
pub use model::{CredentialForm, EntryError, Security, WifiCredential};
