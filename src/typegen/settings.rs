//! Generator settings

use super::emit::EmitOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Output style of the generated declarations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modularity {
    /// `declare namespace`: usable without an import
    #[default]
    Ambient,
    /// `export namespace`: consumers import the file as a module
    Module,
}

impl Modularity {
    pub const ALL: [Modularity; 2] = [Modularity::Ambient, Modularity::Module];

    /// Keyword placed in front of every `namespace` block
    pub fn namespace_prefix(self) -> &'static str {
        match self {
            Modularity::Ambient => "declare ",
            Modularity::Module => "export ",
        }
    }
}

impl fmt::Display for Modularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modularity::Ambient => write!(f, "Ambient"),
            Modularity::Module => write!(f, "Module"),
        }
    }
}

/// How the `$metadata` request is sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<BasicAuth>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuth {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            bearer_token: None,
            basic_auth: None,
            headers: BTreeMap::new(),
        }
    }
}

impl RequestOptions {
    /// Layer `other` on top of `self`: headers merge, credentials replace when set
    pub fn merged(&self, other: &RequestOptions) -> RequestOptions {
        let mut headers = self.headers.clone();
        headers.extend(other.headers.iter().map(|(k, v)| (k.clone(), v.clone())));

        RequestOptions {
            timeout_secs: other.timeout_secs,
            bearer_token: other.bearer_token.clone().or_else(|| self.bearer_token.clone()),
            basic_auth: other.basic_auth.clone().or_else(|| self.basic_auth.clone()),
            headers,
        }
    }

    /// Whether a bearer token or basic auth is set
    pub fn has_credentials(&self) -> bool {
        self.bearer_token.is_some() || self.basic_auth.is_some()
    }
}

/// Everything needed to (re)generate a declaration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    pub source: String,
    pub modularity: Modularity,
    #[serde(default)]
    pub request_options: RequestOptions,
    #[serde(default)]
    pub emit_options: EmitOptions,
}

impl GeneratorSettings {
    pub fn new(source: impl Into<String>, modularity: Modularity) -> Self {
        Self {
            source: source.into(),
            modularity,
            request_options: RequestOptions::default(),
            emit_options: EmitOptions::default(),
        }
    }

    pub fn with_request_options(mut self, request_options: RequestOptions) -> Self {
        self.request_options = request_options;
        self
    }

    pub fn with_emit_options(mut self, emit_options: EmitOptions) -> Self {
        self.emit_options = emit_options;
        self
    }
}
