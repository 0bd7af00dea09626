mod cli;
mod commands;
mod error;
mod output;
mod qr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::commands::Context;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands must work even when the file is broken
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "wifiqr", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let path = commands::config_cmd::resolve_path(&cli.global);
            let config = wifiqr_config::load_config_from(&path)?;
            let ctx = Context::new(config, &cli.global);

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &ctx)
        }
    }
}
