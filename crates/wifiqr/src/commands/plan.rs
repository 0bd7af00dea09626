//! Plan command handler: show the join request a payload resolves to.

use wifiqr_core::{JoinApi, JoinAuth, JoinPlan, decode_with};

use crate::cli::{JoinApiArg, PlanArgs};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

impl From<JoinApiArg> for JoinApi {
    fn from(arg: JoinApiArg) -> Self {
        match arg {
            JoinApiArg::Modern => JoinApi::Modern,
            JoinApiArg::Legacy => JoinApi::Legacy,
        }
    }
}

fn detail(plan: &JoinPlan) -> String {
    let (auth, key) = match &plan.auth {
        JoinAuth::Open => ("open", "-"),
        JoinAuth::Wpa2Passphrase(key) => ("WPA2 passphrase", key.as_str()),
        JoinAuth::WepKey(key) => ("WEP key", key.as_str()),
    };
    let api = match plan.api {
        JoinApi::Modern => "modern",
        JoinApi::Legacy => "legacy",
    };
    [
        format!("SSID:   {}", plan.ssid),
        format!("Auth:   {auth}"),
        format!("Key:    {key}"),
        format!("Hidden: {}", if plan.hidden { "yes" } else { "no" }),
        format!("API:    {api}"),
    ]
    .join("\n")
}

pub fn handle(args: PlanArgs, ctx: &Context) -> Result<(), CliError> {
    let raw = util::payload_or_stdin(args.payload)?;
    let credential = decode_with(&raw, ctx.decode_options(args.escape_aware))?;
    let plan = JoinPlan::from_credential(&credential, args.api.into())?;

    let out = output::render_single(&ctx.output, &plan, detail, |p| p.ssid.clone());
    ctx.print(&out);
    Ok(())
}
