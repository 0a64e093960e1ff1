//! Config command handlers.

use pulse_core::PageLocation;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let rendered = toml::to_string_pretty(&cfg).map_err(pulse_config::ConfigError::from)?;
            output::print_output(rendered.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init {
            protocol,
            hostname,
            port,
            force,
        } => {
            let path = config::config_path();
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            let mut cfg = Config::default();
            if let Some(raw) = global.api_base.as_deref() {
                pulse_config::parse_api_base("api-base", raw)?;
                cfg.api_base = Some(raw.to_owned());
            } else if let Some(hostname) = hostname {
                let page = PageLocation::new(protocol, hostname, port);
                pulse_config::parse_api_base("page", &page.api_base_url())?;
                cfg.page = Some(page);
            } else {
                return Err(CliError::Validation {
                    field: "api-base".into(),
                    reason: "pass --api-base <url> or --hostname <host>".into(),
                });
            }
            if let Some(ref mount) = global.mount {
                cfg.mount.clone_from(mount);
            }

            let written = config::save_config(&cfg)?;
            tracing::info!(path = %written.display(), "config written");
            output::print_output(
                &format!("Config written to {}", written.display()),
                global.quiet,
            );
            Ok(())
        }
    }
}
