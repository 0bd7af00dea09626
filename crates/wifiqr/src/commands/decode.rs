//! Decode command handler.

use serde::Serialize;

use wifiqr_core::{WifiCredential, decode_with};

use crate::cli::DecodeArgs;
use crate::error::CliError;
use crate::output;

use super::{Context, util};

/// Structured view of a credential: the human label plus the wire token.
#[derive(Serialize)]
pub(super) struct CredentialView<'a> {
    pub ssid: &'a str,
    pub password: &'a str,
    pub security: &'a str,
    pub token: &'a str,
    pub hidden: bool,
}

impl<'a> From<&'a WifiCredential> for CredentialView<'a> {
    fn from(c: &'a WifiCredential) -> Self {
        Self {
            ssid: c.ssid(),
            password: c.password(),
            security: c.security().label(),
            token: c.security().wire_token(),
            hidden: c.is_hidden(),
        }
    }
}

/// Multi-line detail view of a credential.
pub(super) fn detail(credential: &WifiCredential, color: bool) -> String {
    let password = if credential.password().is_empty() {
        "-"
    } else {
        credential.password()
    };
    [
        format!("SSID:     {}", credential.ssid()),
        format!(
            "Security: {}",
            output::paint_security(credential.security(), color)
        ),
        format!("Password: {password}"),
        format!("Hidden:   {}", if credential.is_hidden() { "yes" } else { "no" }),
    ]
    .join("\n")
}

pub fn handle(args: DecodeArgs, ctx: &Context) -> Result<(), CliError> {
    let raw = util::payload_or_stdin(args.payload)?;
    let credential = decode_with(&raw, ctx.decode_options(args.escape_aware))?;

    let out = output::render_single(
        &ctx.output,
        &CredentialView::from(&credential),
        |_| detail(&credential, ctx.color),
        |v| v.ssid.to_owned(),
    );
    ctx.print(&out);

    if args.save {
        ctx.config.history_store().save(credential)?;
        tracing::info!("saved network to history");
    }
    Ok(())
}
