//! `generate`: create declarations for a service

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use is_terminal::IsTerminal;
use log::debug;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{metadata_source, report_failure, write_output};
use crate::cli::ui::with_spinner;
use crate::config::Config;
use crate::typegen::{
    EmitOptions, GenerateError, Generator, GeneratorSettings, Modularity, RequestOptions,
    normalize_source,
};
use crate::ui::prompts;

#[derive(Args)]
pub struct GenerateCommands {
    /// Service root or $metadata URI (prompted for when omitted)
    pub source: Option<String>,

    /// Output style
    #[arg(long, help = "Output style (prompted for when omitted)")]
    pub modularity: Option<ModularityArg>,

    /// Write declarations to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read the metadata document from a local file instead of the service
    #[arg(long)]
    pub metadata_file: Option<PathBuf>,

    /// Extra request header, repeatable
    #[arg(long = "header", value_name = "NAME:VALUE")]
    pub headers: Vec<String>,

    /// Bearer token for the metadata request
    #[arg(long)]
    pub bearer_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Emit properties with an explicit Nullable attribute as required
    #[arg(long)]
    pub required_when_declared: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModularityArg {
    /// `declare namespace`, no import needed
    Ambient,
    /// `export namespace`, import the file
    Module,
}

impl From<ModularityArg> for Modularity {
    fn from(value: ModularityArg) -> Self {
        match value {
            ModularityArg::Ambient => Modularity::Ambient,
            ModularityArg::Module => Modularity::Module,
        }
    }
}

impl GenerateCommands {
    fn request_overrides(&self, defaults: &RequestOptions) -> Result<RequestOptions> {
        Ok(RequestOptions {
            timeout_secs: self.timeout.unwrap_or(defaults.timeout_secs),
            bearer_token: self.bearer_token.clone(),
            basic_auth: None,
            headers: parse_headers(&self.headers)?,
        })
    }
}

/// Parse `NAME:VALUE` pairs
pub fn parse_headers(raw: &[String]) -> Result<BTreeMap<String, String>> {
    raw.iter()
        .map(|header| -> Result<(String, String)> {
            let (name, value) = header
                .split_once(':')
                .with_context(|| format!("Invalid header '{}', expected NAME:VALUE", header))?;
            let name = name.trim();
            if name.is_empty() {
                anyhow::bail!("Invalid header '{}', name is empty", header);
            }
            Ok((name.to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Handle the generate command
pub async fn handle_generate_command(args: GenerateCommands) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let mut config = Config::load()?;
    let interactive = std::io::stdin().is_terminal();

    let raw_source = match &args.source {
        Some(source) => source.clone(),
        None if interactive => prompts::prompt_source(config.most_recent_source())?,
        None => String::new(),
    };

    let source = match normalize_source(&raw_source) {
        Ok(source) => source,
        Err(GenerateError::InputCancelled) => {
            debug!("No source given, nothing to generate");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let modularity = match args.modularity {
        Some(modularity) => modularity.into(),
        None if interactive => prompts::prompt_modularity()?,
        None => Modularity::default(),
    };

    let request_options = config.request.merged(&args.request_overrides(&config.request)?);
    let settings = GeneratorSettings::new(source, modularity)
        .with_request_options(request_options)
        .with_emit_options(EmitOptions {
            required_when_declared: args.required_when_declared,
        });

    let generator = Generator::new(metadata_source(args.metadata_file.as_deref(), &config)?)
        .with_custom_types(config.primitive_types.clone());

    let message = format!("Fetching {}", settings.source);
    let generated = with_spinner(message, generator.generate(settings)).await;
    report_failure(&generated);

    config.remember_source(&generated.settings.source);
    config.record_generation(&generated.id, &generated.settings);
    config.save()?;

    write_output(args.output.as_deref(), &generated.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headers() {
        let headers = parse_headers(&[
            "X-Api-Key: abc".to_string(),
            "Prefer:odata.maxpagesize=1".to_string(),
        ])
        .unwrap();
        assert_eq!(headers["X-Api-Key"], "abc");
        assert_eq!(headers["Prefer"], "odata.maxpagesize=1");
    }

    #[test]
    fn test_parse_invalid_headers() {
        assert!(parse_headers(&["no-colon".to_string()]).is_err());
        assert!(parse_headers(&[":value".to_string()]).is_err());
    }
}
