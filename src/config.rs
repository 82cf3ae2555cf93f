use crate::api::RetryConfig;
use crate::typegen::{GeneratorSettings, RequestOptions};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternative config file
pub const CONFIG_PATH_ENV: &str = "ODATA_TYPEGEN_CONFIG";

/// How many recently used sources are remembered
pub const MAX_RECENT_SOURCES: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Most recent first
    #[serde(default)]
    pub recent_sources: Vec<String>,
    /// Defaults for every `$metadata` request
    #[serde(default)]
    pub request: RequestOptions,
    #[serde(default)]
    pub retry: RetryConfig,
    /// Extra or overriding Edm primitive mappings, e.g. `Geography = "GeoJSON.Geometry"`
    #[serde(default)]
    pub primitive_types: BTreeMap<String, String>,
    /// Settings of every generated document, keyed by the id in its header
    #[serde(default)]
    pub generations: BTreeMap<String, GeneratorSettings>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("odata-typegen")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".odata-typegen")
        };

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using default config");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!(
            "Loaded config with {} recent sources and {} generations",
            config.recent_sources.len(),
            config.generations.len()
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
                fs::create_dir_all(config_dir).with_context(|| {
                    format!("Failed to create config directory: {:?}", config_dir)
                })?;
                info!("Created config directory: {:?}", config_dir);
            }
        }

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn most_recent_source(&self) -> Option<&str> {
        self.recent_sources.first().map(String::as_str)
    }

    /// Move `source` to the front of the recent list
    pub fn remember_source(&mut self, source: &str) {
        self.recent_sources.retain(|s| s != source);
        self.recent_sources.insert(0, source.to_string());
        self.recent_sources.truncate(MAX_RECENT_SOURCES);
    }

    pub fn clear_recent_sources(&mut self) {
        info!("Clearing {} recent sources", self.recent_sources.len());
        self.recent_sources.clear();
    }

    pub fn record_generation(&mut self, id: &str, settings: &GeneratorSettings) {
        info!("Recording settings for generation {}", id);
        if settings.request_options.has_credentials() {
            warn!(
                "Credentials for {} are stored in plain text in the config file; \
                 remove them with `odata-typegen config forget {}`",
                settings.source, id
            );
        }
        self.generations.insert(id.to_string(), settings.clone());
    }
}
