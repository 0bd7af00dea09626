//! History command handlers.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::Tabled;

use wifiqr_core::{SavedNetwork, encode};

use crate::cli::{HistoryArgs, HistoryCommand};
use crate::error::CliError;
use crate::output;

use super::decode::{self, CredentialView};
use super::{Context, util};

// ── Structured view ─────────────────────────────────────────────────

#[derive(Serialize)]
struct NetworkView<'a> {
    #[serde(skip)]
    network: &'a SavedNetwork,
    #[serde(flatten)]
    credential: CredentialView<'a>,
    favorite: bool,
    saved_at: DateTime<Utc>,
}

impl<'a> From<&'a SavedNetwork> for NetworkView<'a> {
    fn from(n: &'a SavedNetwork) -> Self {
        Self {
            network: n,
            credential: CredentialView::from(&n.credential),
            favorite: n.favorite,
            saved_at: n.saved_at,
        }
    }
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct NetworkRow {
    #[tabled(rename = "")]
    star: &'static str,
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "Security")]
    security: String,
    #[tabled(rename = "Hidden")]
    hidden: &'static str,
    #[tabled(rename = "Saved")]
    saved: String,
}

impl NetworkRow {
    fn new(n: &SavedNetwork, color: bool) -> Self {
        Self {
            star: if n.favorite { "★" } else { "" },
            ssid: n.credential.ssid().to_owned(),
            security: output::paint_security(n.credential.security(), color),
            hidden: if n.credential.is_hidden() { "yes" } else { "no" },
            saved: n.saved_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn detail(n: &SavedNetwork, color: bool) -> String {
    [
        decode::detail(&n.credential, color),
        format!("Favorite: {}", if n.favorite { "yes" } else { "no" }),
        format!("Saved:    {}", n.saved_at.to_rfc3339()),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: HistoryArgs, ctx: &Context) -> Result<(), CliError> {
    let store = ctx.config.history_store();
    tracing::debug!(path = %store.path().display(), "using history file");

    match args.command {
        HistoryCommand::List { favorites } => {
            let mut entries = store.list();
            if favorites {
                entries.retain(|n| n.favorite);
            }
            let views: Vec<NetworkView<'_>> = entries.iter().map(NetworkView::from).collect();
            let out = output::render_list(
                &ctx.output,
                &views,
                |v| NetworkRow::new(v.network, ctx.color),
                |v| v.credential.ssid.to_owned(),
            );
            ctx.print(&out);
            Ok(())
        }

        HistoryCommand::Show { ssid } => {
            let network = store.get(&ssid)?;
            let out = output::render_single(
                &ctx.output,
                &NetworkView::from(&network),
                |v| detail(v.network, ctx.color),
                |v| v.credential.ssid.to_owned(),
            );
            ctx.print(&out);
            Ok(())
        }

        HistoryCommand::Favorite { ssid } => {
            let favorite = store.toggle_favorite(&ssid)?;
            if !ctx.quiet {
                let state = if favorite { "added to" } else { "removed from" };
                eprintln!("'{ssid}' {state} favorites");
            }
            Ok(())
        }

        HistoryCommand::Delete { ssid } => {
            // Fail with not-found before prompting
            store.get(&ssid)?;
            if !util::confirm(&format!("Forget network '{ssid}'?"), "history delete", ctx.yes)? {
                return Ok(());
            }
            store.delete(&ssid)?;
            if !ctx.quiet {
                eprintln!("Forgot '{ssid}'");
            }
            Ok(())
        }

        HistoryCommand::Clear => {
            if !util::confirm("Forget every remembered network?", "history clear", ctx.yes)? {
                return Ok(());
            }
            store.clear()?;
            if !ctx.quiet {
                eprintln!("History cleared");
            }
            Ok(())
        }

        HistoryCommand::Qr { ssid, render } => {
            let network = store.get(&ssid)?;
            let payload = encode(&network.credential);
            ctx.print(&payload);
            util::render_qr(&payload, &render, ctx)
        }
    }
}
