pub mod config;
pub mod generate;
pub mod update;

pub use config::{ConfigCommands, handle_config_command};
pub use generate::{GenerateCommands, handle_generate_command};
pub use update::{UpdateCommands, handle_update_command};

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::api::{FileMetadataSource, HttpMetadataSource, MetadataSource};
use crate::config::Config;
use crate::typegen::Generated;

/// Local file when given, the service otherwise
fn metadata_source(metadata_file: Option<&Path>, config: &Config) -> Result<Box<dyn MetadataSource>> {
    Ok(match metadata_file {
        Some(path) => Box::new(FileMetadataSource::new(path)),
        None => Box::new(HttpMetadataSource::with_retry_config(config.retry.clone())?),
    })
}

/// Tell the user a run only produced the header
fn report_failure(generated: &Generated) {
    if let Some(error) = &generated.failure {
        log::error!("Creating declarations returned following error: {}", error);
        eprintln!(
            "{}",
            "Could not create interfaces. See log output for details (RUST_LOG=info).".red()
        );
    }
}

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("Failed to write output to: {}", path.display()))?;
            eprintln!("Declarations written to {}", path.display().to_string().bright_green());
        }
        None => print!("{}", text),
    }
    Ok(())
}
