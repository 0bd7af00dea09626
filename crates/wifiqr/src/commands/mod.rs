//! Command dispatch: bridges CLI args -> core operations -> output formatting.

pub mod config_cmd;
pub mod decode;
pub mod encode;
pub mod history;
pub mod plan;
pub mod scan;
pub mod util;

use wifiqr_config::Config;
use wifiqr_core::DecodeOptions;

use crate::cli::{Command, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

/// Everything a handler needs once flags and config are merged.
pub struct Context {
    pub config: Config,
    pub output: OutputFormat,
    pub color: bool,
    pub quiet: bool,
    pub yes: bool,
}

impl Context {
    pub fn new(config: Config, global: &GlobalOpts) -> Self {
        let output = output::resolve_format(global.output.as_ref(), &config.defaults.output);
        let color = output::should_color(&output::resolve_color(
            global.color.as_ref(),
            &config.defaults.color,
        ));
        Self {
            config,
            output,
            color,
            quiet: global.quiet,
            yes: global.yes,
        }
    }

    /// Decode options, with `--escape-aware` forcing escape-aware splitting.
    pub fn decode_options(&self, escape_aware_flag: bool) -> DecodeOptions {
        if escape_aware_flag {
            DecodeOptions::escape_aware()
        } else {
            self.config.decode_options()
        }
    }

    pub fn print(&self, out: &str) {
        output::print_output(out, self.quiet);
    }
}

/// Dispatch a config-backed command to the appropriate handler.
pub fn dispatch(cmd: Command, ctx: &Context) -> Result<(), CliError> {
    match cmd {
        Command::Encode(args) => encode::handle(args, ctx),
        Command::Decode(args) => decode::handle(args, ctx),
        Command::Plan(args) => plan::handle(args, ctx),
        Command::Scan(args) => scan::handle(&args, ctx),
        Command::History(args) => history::handle(args, ctx),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
