//! Config command handlers. These never touch the network.

use tabled::{Table, Tabled, settings::Style};

use campus_config as config;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Profile")]
    name: String,
    #[tabled(rename = "Server")]
    server: String,
    #[tabled(rename = "Default")]
    default: String,
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let rendered = toml_string(&cfg)?;
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            let mut rows: Vec<ProfileRow> = cfg
                .profiles
                .iter()
                .map(|(name, profile)| ProfileRow {
                    name: name.clone(),
                    server: profile.server.clone(),
                    default: if name == default { "*" } else { "" }.into(),
                })
                .collect();
            rows.sort_by(|a, b| a.name.cmp(&b.name));
            let table = Table::new(&rows).with(Style::rounded()).to_string();
            output::print_output(&table, global.quiet);
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();
            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::Validation {
                    field: "profile".into(),
                    reason: format!("no profile named '{name}'"),
                });
            }
            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            output::print_output(&format!("default profile set to '{name}'"), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}

fn toml_string(cfg: &config::Config) -> Result<String, CliError> {
    toml::to_string_pretty(cfg).map_err(|err| CliError::Validation {
        field: "config".into(),
        reason: err.to_string(),
    })
}
