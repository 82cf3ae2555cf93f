use super::commands::config::ConfigCommands;
use super::commands::generate::GenerateCommands;
use super::commands::update::UpdateCommands;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "odata-typegen")]
#[command(version)]
#[command(about = "Generate TypeScript declarations from an OData service's $metadata")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate declarations for an OData service
    Generate(GenerateCommands),
    /// Regenerate a previously generated file from its header
    Update(UpdateCommands),
    /// Inspect or reset the configuration file
    Config(ConfigCommands),
}
