// ── Core error types ──
//
// The codec returns its own `DecodeError`; everything that touches the
// outside world (history file, join capability) reports a `CoreError`.

use std::path::PathBuf;

use thiserror::Error;

use crate::codec::DecodeError;
use crate::model::EntryError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input errors ─────────────────────────────────────────────────
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Entry(#[from] EntryError),

    // ── Join errors ──────────────────────────────────────────────────
    #[error("cannot join '{ssid}': security '{security}' is not supported")]
    JoinUnsupported { ssid: String, security: String },

    #[error("failed to join '{ssid}': {reason}")]
    JoinFailed { ssid: String, reason: String },

    // ── History errors ───────────────────────────────────────────────
    #[error("network '{ssid}' is not in the history")]
    NotInHistory { ssid: String },

    #[error("history file {path}: {source}")]
    HistoryIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize history: {0}")]
    Serialization(#[from] serde_json::Error),
}
