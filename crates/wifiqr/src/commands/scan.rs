//! Scan command handler.
//!
//! Treats each stdin line as one detected barcode and runs it through the
//! scan flow. Joining is a dry run: the plan is logged and reported, nothing
//! touches the host's network configuration.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tabled::Tabled;

use wifiqr_core::{
    CoreError, HapticFeedback, JoinApi, JoinPlan, NetworkJoiner, ScanFlow, ScanOutcome, Silent,
    SoundEffects,
};

use crate::cli::ScanArgs;
use crate::error::CliError;
use crate::output;

use super::Context;

// ── Capabilities ────────────────────────────────────────────────────

struct DryRunJoiner {
    api: JoinApi,
}

impl NetworkJoiner for DryRunJoiner {
    fn api(&self) -> JoinApi {
        self.api
    }

    fn join(&self, plan: &JoinPlan) -> Result<(), CoreError> {
        tracing::info!(ssid = %plan.ssid, api = ?plan.api, "dry run: would join network");
        Ok(())
    }
}

/// Audible cues via the terminal bell.
struct TerminalBell;

impl TerminalBell {
    fn ring() {
        let mut stderr = io::stderr().lock();
        let _ = stderr.write_all(b"\x07");
        let _ = stderr.flush();
    }
}

impl SoundEffects for TerminalBell {
    fn scan_beep(&self) {
        Self::ring();
    }
    fn success(&self) {}
    fn error(&self) {
        Self::ring();
    }
    fn click(&self) {}
}

// ── Report ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum ScanStatus {
    Ignored,
    Invalid,
    Decoded,
    Joined,
    JoinFailed,
}

impl ScanStatus {
    fn as_str(self) -> &'static str {
        match self {
            Self::Ignored => "ignored",
            Self::Invalid => "invalid",
            Self::Decoded => "decoded",
            Self::Joined => "joined",
            Self::JoinFailed => "join_failed",
        }
    }
}

#[derive(Debug, Serialize)]
struct ScanRecord {
    line: usize,
    status: ScanStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    ssid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    security: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Tabled)]
struct ScanRow {
    #[tabled(rename = "Line")]
    line: usize,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "Security")]
    security: String,
    #[tabled(rename = "Message")]
    message: String,
}

impl From<&ScanRecord> for ScanRow {
    fn from(r: &ScanRecord) -> Self {
        Self {
            line: r.line,
            status: r.status.as_str(),
            ssid: r.ssid.clone().unwrap_or_else(|| "-".into()),
            security: r.security.clone().unwrap_or_else(|| "-".into()),
            message: r.message.clone().unwrap_or_default(),
        }
    }
}

fn process<J, H, S>(flow: &ScanFlow<J, H, S>, line: usize, raw: &str, connect: bool) -> ScanRecord
where
    J: NetworkJoiner,
    H: HapticFeedback,
    S: SoundEffects,
{
    let mut record = ScanRecord {
        line,
        status: ScanStatus::Ignored,
        ssid: None,
        security: None,
        message: None,
    };
    match flow.on_detected(raw) {
        ScanOutcome::NotWifi => {}
        ScanOutcome::Invalid(err) => {
            record.status = ScanStatus::Invalid;
            record.message = Some(err.to_string());
        }
        ScanOutcome::Credential(credential) => {
            record.ssid = Some(credential.ssid().to_owned());
            record.security = Some(credential.security().label().to_owned());
            record.status = ScanStatus::Decoded;
            if connect {
                match flow.connect(&credential) {
                    Ok(_) => record.status = ScanStatus::Joined,
                    Err(err) => {
                        record.status = ScanStatus::JoinFailed;
                        record.message = Some(err.to_string());
                    }
                }
            }
        }
    }
    record
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &ScanArgs, ctx: &Context) -> Result<(), CliError> {
    let joiner = DryRunJoiner {
        api: args.api.clone().into(),
    };
    let options = ctx.decode_options(args.escape_aware);

    let records = if args.beep {
        let mut flow = ScanFlow::new(joiner, Silent, TerminalBell).with_decode_options(options);
        if args.connect {
            flow = flow.with_history(ctx.config.history_store());
        }
        read_lines(&flow, args.connect)?
    } else {
        let mut flow = ScanFlow::new(joiner, Silent, Silent).with_decode_options(options);
        if args.connect {
            flow = flow.with_history(ctx.config.history_store());
        }
        read_lines(&flow, args.connect)?
    };

    let out = output::render_list(&ctx.output, &records, |r| ScanRow::from(r), |r| {
        format!("{}\t{}", r.status.as_str(), r.ssid.as_deref().unwrap_or("-"))
    });
    ctx.print(&out);
    Ok(())
}

fn read_lines<J, H, S>(flow: &ScanFlow<J, H, S>, connect: bool) -> Result<Vec<ScanRecord>, CliError>
where
    J: NetworkJoiner,
    H: HapticFeedback,
    S: SoundEffects,
{
    let mut records = Vec::new();
    for (idx, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        let raw = line.trim_end_matches('\r');
        if raw.is_empty() {
            continue;
        }
        records.push(process(flow, idx + 1, raw, connect));
    }
    Ok(records)
}
