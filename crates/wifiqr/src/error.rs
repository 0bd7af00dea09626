//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use wifiqr_config::ConfigError;
use wifiqr_core::{CoreError, DecodeError, EntryError};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const DATA: i32 = 65;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Payload ──────────────────────────────────────────────────────
    #[error("Not a WiFi QR code")]
    #[diagnostic(
        code(wifiqr::invalid_prefix),
        help("WiFi QR payloads start with `WIFI:`, e.g. WIFI:T:WPA;S:MyNetwork;P:secret;H:false;;")
    )]
    NotWifiPayload,

    #[error("WiFi QR code has no network name")]
    #[diagnostic(
        code(wifiqr::missing_ssid),
        help("The payload needs a non-empty `S:<ssid>;` field.")
    )]
    MissingSsid,

    #[error("Payload does not fit in a QR code: {reason}")]
    #[diagnostic(
        code(wifiqr::qr_capacity),
        help("Shorten the network name or password.")
    )]
    QrRender { reason: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(wifiqr::validation))]
    Validation { field: String, reason: String },

    // ── History ──────────────────────────────────────────────────────
    #[error("Network '{ssid}' not found in history")]
    #[diagnostic(
        code(wifiqr::not_found),
        help("Run: wifiqr history list to see remembered networks")
    )]
    NotFound { ssid: String },

    #[error("Cannot join '{ssid}': {reason}")]
    #[diagnostic(code(wifiqr::join))]
    Join { ssid: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(wifiqr::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(wifiqr::config))]
    Config(ConfigError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(wifiqr::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("History file error: {0}")]
    #[diagnostic(code(wifiqr::history_io))]
    History(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotWifiPayload | Self::MissingSsid => exit_code::DATA,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::ConfigExists { .. } => exit_code::CONFLICT,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl From<DecodeError> for CliError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::InvalidPrefix => CliError::NotWifiPayload,
            DecodeError::MissingSsid => CliError::MissingSsid,
        }
    }
}

impl From<EntryError> for CliError {
    fn from(err: EntryError) -> Self {
        let field = match err {
            EntryError::SsidBlank | EntryError::SsidTooLong { .. } => "ssid",
            EntryError::PasswordRequired { .. } => "password",
        };
        CliError::Validation {
            field: field.into(),
            reason: err.to_string(),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(other),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Decode(e) => e.into(),
            CoreError::Entry(e) => e.into(),
            CoreError::NotInHistory { ssid } => CliError::NotFound { ssid },
            CoreError::JoinUnsupported { ssid, security } => CliError::Join {
                ssid,
                reason: format!("security '{security}' is not supported"),
            },
            CoreError::JoinFailed { ssid, reason } => CliError::Join { ssid, reason },
            e @ (CoreError::HistoryIo { .. } | CoreError::Serialization(_)) => {
                CliError::History(e.to_string())
            }
        }
    }
}
