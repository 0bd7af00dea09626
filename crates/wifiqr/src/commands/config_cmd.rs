//! Config subcommand handlers.

use std::path::PathBuf;

use wifiqr_config::{self as config, Config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

/// Config file in effect: `--config` / `WIFIQR_CONFIG`, else the platform path.
pub fn resolve_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config::config_path)
}

fn to_toml(cfg: &Config) -> Result<String, CliError> {
    toml::to_string_pretty(cfg).map_err(|e| CliError::Config(e.into()))
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = resolve_path(global);

    match args.command {
        ConfigCommand::Path => {
            output::print_output(&path.display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config_from(&path)?;
            let format = output::resolve_format(global.output.as_ref(), &cfg.defaults.output);
            let out = match format {
                OutputFormat::Table | OutputFormat::Plain => to_toml(&cfg)?,
                other => output::render_single(&other, &cfg, |_| String::new(), |_| String::new()),
            };
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }
            config::save_config_to(&Config::default(), &path)?;
            tracing::info!(path = %path.display(), "wrote default config");
            if !global.quiet {
                eprintln!("Wrote {}", path.display());
            }
            Ok(())
        }
    }
}
