//! Clap derive structures for the `wifiqr` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Depends only on clap + clap_complete so `build.rs` can include it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// wifiqr -- encode, decode, and remember WiFi QR codes
#[derive(Debug, Parser)]
#[command(
    name = "wifiqr",
    version,
    about = "Encode, decode, and remember WiFi QR codes",
    long_about = "Work with WiFi-credential QR codes from the command line.\n\n\
        Builds `WIFI:T:<security>;S:<ssid>;P:<password>;H:<hidden>;;` payloads,\n\
        renders them as QR codes, decodes scanned payloads, and keeps a\n\
        history of known networks.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "WIFIQR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(long, short = 'o', global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a WiFi QR payload (and optionally render it)
    #[command(alias = "enc", alias = "e")]
    Encode(EncodeArgs),

    /// Decode a scanned WiFi QR payload
    #[command(alias = "dec", alias = "d")]
    Decode(DecodeArgs),

    /// Show how a payload's network would be joined
    Plan(PlanArgs),

    /// Process detector output from stdin, one scanned code per line
    Scan(ScanArgs),

    /// Manage remembered networks
    #[command(alias = "h")]
    History(HistoryArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared QR rendering arguments ────────────────────────────────────

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Render the QR code in the terminal
    #[arg(long)]
    pub qr: bool,

    /// Write the QR code as an SVG file
    #[arg(long, value_name = "FILE")]
    pub svg: Option<PathBuf>,

    /// Minimum SVG edge length in pixels (overrides config)
    #[arg(long, value_name = "PIXELS")]
    pub size: Option<u32>,
}

// ── Encode ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Network name
    #[arg(long, short = 'n')]
    pub ssid: String,

    /// Network password (omit for open networks)
    #[arg(long, short = 'P', default_value = "")]
    pub password: String,

    /// Security: WPA, WEP, nopass, or a label like "WPA/WPA2" / "Open Network"
    #[arg(long, short = 't', default_value = "WPA")]
    pub security: String,

    /// The network does not broadcast its SSID
    #[arg(long)]
    pub hidden: bool,

    #[command(flatten)]
    pub render: RenderArgs,
}

// ── Decode ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Payload to decode (reads stdin when omitted)
    pub payload: Option<String>,

    /// Keep escaped `\;` inside values instead of splitting on it
    #[arg(long)]
    pub escape_aware: bool,

    /// Remember the decoded network in the history
    #[arg(long)]
    pub save: bool,
}

// ── Plan ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum JoinApiArg {
    /// Network-specifier API (WEP joins with a WPA2 passphrase)
    Modern,
    /// Saved-configuration API with explicit WEP keys
    Legacy,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Payload to plan for (reads stdin when omitted)
    pub payload: Option<String>,

    /// Platform join interface
    #[arg(long, default_value = "modern")]
    pub api: JoinApiArg,

    /// Keep escaped `\;` inside values instead of splitting on it
    #[arg(long)]
    pub escape_aware: bool,
}

// ── Scan ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Join each decoded network (dry run) and remember it in the history
    #[arg(long)]
    pub connect: bool,

    /// Platform join interface used with --connect
    #[arg(long, default_value = "modern")]
    pub api: JoinApiArg,

    /// Ring the terminal bell when a WiFi code is detected
    #[arg(long)]
    pub beep: bool,

    /// Keep escaped `\;` inside values instead of splitting on it
    #[arg(long)]
    pub escape_aware: bool,
}

// ── History ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommand,
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// List remembered networks, newest first
    #[command(alias = "ls")]
    List {
        /// Only show favourites
        #[arg(long)]
        favorites: bool,
    },

    /// Show one remembered network
    Show { ssid: String },

    /// Toggle the favourite flag of a network
    #[command(alias = "fav")]
    Favorite { ssid: String },

    /// Forget a network
    #[command(alias = "rm")]
    Delete { ssid: String },

    /// Forget every network
    Clear,

    /// Print (and optionally render) the payload of a remembered network
    Qr {
        ssid: String,

        #[command(flatten)]
        render: RenderArgs,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
