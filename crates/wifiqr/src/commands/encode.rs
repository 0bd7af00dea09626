//! Encode command handler.

use serde::Serialize;

use wifiqr_core::{CredentialForm, Security, encode};

use crate::cli::EncodeArgs;
use crate::error::CliError;
use crate::output;

use super::{Context, util};

#[derive(Serialize)]
struct EncodedView<'a> {
    payload: &'a str,
    ssid: &'a str,
    security: &'a str,
    token: &'a str,
    hidden: bool,
}

pub fn handle(args: EncodeArgs, ctx: &Context) -> Result<(), CliError> {
    let form = CredentialForm {
        ssid: args.ssid,
        password: args.password,
        security: Security::from_label_or_token(&args.security),
        hidden: args.hidden,
    };
    let credential = form.submit()?;
    let payload = encode(&credential);
    tracing::debug!(ssid = credential.ssid(), "encoded payload");

    let view = EncodedView {
        payload: &payload,
        ssid: credential.ssid(),
        security: credential.security().label(),
        token: credential.security().wire_token(),
        hidden: credential.is_hidden(),
    };
    let out = output::render_single(
        &ctx.output,
        &view,
        |v| v.payload.to_owned(),
        |v| v.payload.to_owned(),
    );
    ctx.print(&out);

    util::render_qr(&payload, &args.render, ctx)
}
