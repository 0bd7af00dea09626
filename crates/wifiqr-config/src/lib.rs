//! Shared configuration for wifiqr tools.
//!
//! TOML file + `WIFIQR_*` environment overrides, and translation of the
//! result into `wifiqr_core` types (history store, decode options).

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use wifiqr_core::history::DEFAULT_LIMIT;
use wifiqr_core::{DecodeOptions, HistoryStore};

/// Smallest QR image edge accepted, in pixels (a version-1 code is 21 modules).
pub const MIN_QR_SIZE: u32 = 21;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Connection history settings.
    #[serde(default)]
    pub history: HistoryConfig,

    /// Payload decoding settings.
    #[serde(default)]
    pub decode: DecodeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Edge length of generated QR images, in pixels.
    #[serde(default = "default_qr_size")]
    pub qr_size: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            qr_size: default_qr_size(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_qr_size() -> u32 {
    512
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// History file (defaults to the platform data directory).
    pub path: Option<PathBuf>,

    /// Entries kept, newest first.
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: None,
            limit: default_history_limit(),
        }
    }
}

fn default_history_limit() -> usize {
    DEFAULT_LIMIT
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DecodeConfig {
    /// Keep escaped `\;` inside values instead of splitting on it.
    #[serde(default)]
    pub escape_aware: bool,
}

impl Config {
    /// Reject values the tools cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.limit == 0 {
            return Err(ConfigError::Validation {
                field: "history.limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.defaults.qr_size < MIN_QR_SIZE {
            return Err(ConfigError::Validation {
                field: "defaults.qr_size".into(),
                reason: format!(
                    "must be at least {MIN_QR_SIZE}, got {}",
                    self.defaults.qr_size
                ),
            });
        }
        Ok(())
    }

    /// Resolved history file location.
    pub fn history_path(&self) -> PathBuf {
        self.history.path.clone().unwrap_or_else(default_history_path)
    }

    pub fn history_store(&self) -> HistoryStore {
        HistoryStore::new(self.history_path(), self.history.limit)
    }

    pub fn decode_options(&self) -> DecodeOptions {
        if self.decode.escape_aware {
            DecodeOptions::escape_aware()
        } else {
            DecodeOptions::default()
        }
    }
}

// ── Paths ───────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "wifiqr", "wifiqr")
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback().join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Default history file path, in the platform data directory.
pub fn default_history_path() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback().join("history.json"),
        |dirs| dirs.data_dir().join("history.json"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("wifiqr");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the config from `path` + environment.
///
/// A missing file is not an error; defaults and environment still apply.
/// Callers pick the path (see [`config_path`]).
///
/// Environment keys use `__` between sections, e.g. `WIFIQR_HISTORY__LIMIT`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("WIFIQR_").split("__"));

    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML at `path`, creating parent directories.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wifiqr_core::SplitMode;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert_eq!(cfg.defaults.qr_size, 512);
        assert_eq!(cfg.history.limit, 50);
        assert!(!cfg.decode.escape_aware);
        cfg.validate().unwrap();
    }

    #[test]
    fn zero_history_limit_is_invalid() {
        let mut cfg = Config::default();
        cfg.history.limit = 0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Validation { ref field, .. }) if field == "history.limit"
        ));
    }

    #[test]
    fn tiny_qr_is_invalid() {
        let mut cfg = Config::default();
        cfg.defaults.qr_size = 8;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn decode_options_follow_config() {
        let mut cfg = Config::default();
        assert_eq!(cfg.decode_options().split, SplitMode::Naive);
        cfg.decode.escape_aware = true;
        assert_eq!(cfg.decode_options().split, SplitMode::EscapeAware);
    }

    #[test]
    fn explicit_history_path_wins() {
        let mut cfg = Config::default();
        cfg.history.path = Some(PathBuf::from("/tmp/wifiqr/h.json"));
        assert_eq!(cfg.history_store().path(), Path::new("/tmp/wifiqr/h.json"));
    }

    #[test]
    fn file_and_env_layers_merge() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [defaults]
                output = "json"

                [history]
                limit = 10
                "#,
            )?;
            jail.set_env("WIFIQR_DECODE__ESCAPE_AWARE", "true");
            jail.set_env("WIFIQR_HISTORY__LIMIT", "7");

            let cfg = load_config_from(Path::new("config.toml")).unwrap();
            assert_eq!(cfg.defaults.output, "json");
            assert_eq!(cfg.defaults.qr_size, 512);
            assert_eq!(cfg.history.limit, 7);
            assert!(cfg.decode.escape_aware);
            Ok(())
        });
    }

    #[test]
    fn missing_file_loads_defaults() {
        figment::Jail::expect_with(|jail| {
            let path = jail.directory().join("absent/config.toml");
            assert_eq!(load_config_from(&path).unwrap(), Config::default());
            Ok(())
        });
    }

    #[test]
    fn save_then_load_round_trips() {
        figment::Jail::expect_with(|jail| {
            let path = jail.directory().join("nested/config.toml");
            let mut cfg = Config::default();
            cfg.defaults.qr_size = 256;
            cfg.history.path = Some(PathBuf::from("/var/lib/wifiqr/history.json"));
            save_config_to(&cfg, &path).unwrap();

            let loaded = load_config_from(&path).unwrap();
            assert_eq!(loaded, cfg);
            Ok(())
        });
    }
}
