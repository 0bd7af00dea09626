//! Shared helpers for command handlers.

use std::io::{self, IsTerminal, Read};

use wifiqr_config::MIN_QR_SIZE;

use crate::cli::RenderArgs;
use crate::error::CliError;
use crate::qr;

use super::Context;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal to prompt on, refuses instead of blocking.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(io::Error::other(e)))?;
    Ok(confirmed)
}

/// Use the positional payload, or read one from stdin.
///
/// Trailing newlines are dropped; scanners and `echo` both add one.
pub fn payload_or_stdin(payload: Option<String>) -> Result<String, CliError> {
    if let Some(payload) = payload {
        return Ok(payload);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_owned())
}

/// Render the QR code to the terminal and/or an SVG file, as requested.
pub fn render_qr(payload: &str, render: &RenderArgs, ctx: &Context) -> Result<(), CliError> {
    if render.qr {
        let art = qr::render_terminal(payload)?;
        ctx.print(&art);
    }
    if let Some(ref path) = render.svg {
        let size = render.size.unwrap_or(ctx.config.defaults.qr_size);
        if size < MIN_QR_SIZE {
            return Err(CliError::Validation {
                field: "size".into(),
                reason: format!("must be at least {MIN_QR_SIZE}, got {size}"),
            });
        }
        qr::write_svg(payload, size, path)?;
        if !ctx.quiet {
            eprintln!("Wrote {}", path.display());
        }
    }
    Ok(())
}
