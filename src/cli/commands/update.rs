//! `update`: regenerate a file in place from its header

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use super::{metadata_source, report_failure, write_output};
use crate::cli::ui::with_spinner;
use crate::config::Config;
use crate::typegen::{EmitOptions, GenerateError, Generator};

#[derive(Args)]
pub struct UpdateCommands {
    /// Previously generated declaration file
    pub file: PathBuf,

    /// Read the metadata document from a local file instead of the service
    #[arg(long)]
    pub metadata_file: Option<PathBuf>,

    /// Print the regenerated document instead of rewriting the file
    #[arg(long)]
    pub stdout: bool,

    /// Emit properties with an explicit Nullable attribute as required
    /// (otherwise the choice made when the file was generated is kept)
    #[arg(long)]
    pub required_when_declared: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Handle the update command
pub async fn handle_update_command(args: UpdateCommands) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let existing = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read: {}", args.file.display()))?;

    let mut config = Config::load()?;
    let mut generator = Generator::new(metadata_source(args.metadata_file.as_deref(), &config)?)
        .with_custom_types(config.primitive_types.clone())
        .with_request_defaults(config.request.clone())
        .with_sidecar(config.generations.clone());
    if args.required_when_declared {
        generator = generator.with_emit_options(EmitOptions {
            required_when_declared: true,
        });
    }

    let message = format!("Updating {}", args.file.display());
    let generated = match with_spinner(message, generator.regenerate(&existing)).await {
        Ok(generated) => generated,
        Err(GenerateError::HeaderNotFound) => {
            eprintln!(
                "{}",
                format!("Did not find odata source in document: '{}'", args.file.display()).red()
            );
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    report_failure(&generated);

    config.remember_source(&generated.settings.source);
    config.record_generation(&generated.id, &generated.settings);
    config.save()?;

    if args.stdout {
        write_output(None, &generated.text)
    } else {
        write_output(Some(args.file.as_path()), &generated.text)
    }
}
