//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output` (or the configured
//! default). Table uses `tabled`, structured formats use serde, plain emits
//! one identifier per line.

use std::io::{self, IsTerminal, Write};

use clap::ValueEnum;
use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use wifiqr_core::Security;

use crate::cli::{ColorMode, OutputFormat};

// ── Format / color resolution ────────────────────────────────────────

/// Flag wins over the configured default; unknown config values fall back
/// to `table`.
pub fn resolve_format(flag: Option<&OutputFormat>, configured: &str) -> OutputFormat {
    flag.cloned()
        .or_else(|| OutputFormat::from_str(configured, true).ok())
        .unwrap_or(OutputFormat::Table)
}

pub fn resolve_color(flag: Option<&ColorMode>, configured: &str) -> ColorMode {
    flag.cloned()
        .or_else(|| ColorMode::from_str(configured, true).ok())
        .unwrap_or(ColorMode::Auto)
}

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Security label, colored by strength when color is on.
pub fn paint_security(security: &Security, color: bool) -> String {
    let label = security.label();
    if !color {
        return label.to_owned();
    }
    match security {
        Security::Wpa => label.green().to_string(),
        Security::Wep => label.yellow().to_string(),
        Security::Open => label.red().to_string(),
        Security::Unknown | Security::Other(_) => label.dimmed().to_string(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact`: serializes the original data via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `id_fn` on each item to emit one identifier per line
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses a custom `detail_fn` that returns a pre-formatted
/// string, since single-item detail views don't use `Tabled` derive.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => id_fn(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    if compact {
        serde_json::to_string(data).expect("serialization should not fail")
    } else {
        serde_json::to_string_pretty(data).expect("serialization should not fail")
    }
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}
