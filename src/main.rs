use anyhow::Result;
use clap::Parser;
use log::info;

use odata_typegen::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr so generated declarations on stdout stay clean
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    info!("Starting odata-typegen");

    match cli.command {
        Commands::Generate(generate_args) => {
            cli::commands::handle_generate_command(generate_args).await?;
        }
        Commands::Update(update_args) => {
            cli::commands::handle_update_command(update_args).await?;
        }
        Commands::Config(config_args) => {
            cli::commands::handle_config_command(config_args).await?;
        }
    }

    Ok(())
}
