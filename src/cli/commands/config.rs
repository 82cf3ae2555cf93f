//! `config`: inspect or reset the configuration file

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use crate::config::Config;

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Print the current configuration as TOML
    Show,
    /// Print the path of the configuration file
    Path,
    /// Forget recently used sources
    ClearRecent,
    /// Drop the stored settings of one generation
    Forget {
        /// Generation id from a file header
        id: String,
    },
}

/// Handle the config command
pub async fn handle_config_command(args: ConfigCommands) -> Result<()> {
    match args.command {
        ConfigSubcommands::Show => {
            let config = Config::load()?;
            let content =
                toml::to_string_pretty(&config).context("Failed to serialize config to TOML")?;
            println!("{}", content);
        }
        ConfigSubcommands::Path => {
            println!("{}", Config::get_config_path()?.display());
        }
        ConfigSubcommands::ClearRecent => {
            let mut config = Config::load()?;
            config.clear_recent_sources();
            config.save()?;
            println!("{}", "Recent sources cleared".green());
        }
        ConfigSubcommands::Forget { id } => {
            let mut config = Config::load()?;
            if config.generations.remove(&id).is_none() {
                anyhow::bail!("Generation '{}' not found", id);
            }
            config.save()?;
            println!("Forgot generation {}", id.bright_green());
        }
    }
    Ok(())
}
