//! `generate` and `regenerate` entry points

use super::emit::{EmitOptions, SENTINEL, emit};
use super::error::GenerateError;
use super::header::{find_header, render_header};
use super::settings::{GeneratorSettings, RequestOptions};
use super::types::PrimitiveTypes;
use crate::api::MetadataSource;
use crate::metadata::{ParseError, parse_schema_document};
use std::collections::BTreeMap;

/// Result of a generation run
///
/// `text` is always usable: when fetching or parsing failed it is the header
/// line alone, so the document can be regenerated later. `failure` tells the
/// caller whether to notify the user.
#[derive(Debug)]
pub struct Generated {
    pub text: String,
    pub id: String,
    pub settings: GeneratorSettings,
    pub failure: Option<GenerateError>,
}

impl Generated {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Turn user input into a `$metadata` URL
///
/// `https://host/svc`, `https://host/svc/` and `https://host/svc/$metadata`
/// all become `https://host/svc/$metadata`.
pub fn normalize_source(input: &str) -> Result<String, GenerateError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(GenerateError::InputCancelled);
    }

    let base = input.replacen("$metadata", "", 1);
    let base = base.strip_suffix('/').unwrap_or(&base);
    Ok(format!("{}/$metadata", base))
}

/// Parse, emit and prefix the header; no I/O
pub fn render(
    metadata_xml: &str,
    settings: &GeneratorSettings,
    id: Option<&str>,
    options: &EmitOptions,
    types: &mut PrimitiveTypes,
) -> Result<String, ParseError> {
    let doc = parse_schema_document(metadata_xml)?;

    log::info!("Creating interfaces for {} namespaces", doc.namespaces.len());
    let body = emit(&doc, settings.modularity, options, types);

    Ok(format!("{}\n{}", render_header(settings, id), body))
}

/// Drives fetch → parse → emit for one metadata source
pub struct Generator<S> {
    source: S,
    custom_types: BTreeMap<String, String>,
    request_defaults: RequestOptions,
    sidecar: BTreeMap<String, GeneratorSettings>,
    emit_override: Option<EmitOptions>,
}

impl<S: MetadataSource> Generator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            custom_types: BTreeMap::new(),
            request_defaults: RequestOptions::default(),
            sidecar: BTreeMap::new(),
            emit_override: None,
        }
    }

    /// Extra primitive mappings seeded into every run
    pub fn with_custom_types(mut self, custom_types: BTreeMap<String, String>) -> Self {
        self.custom_types = custom_types;
        self
    }

    /// Request options used when regenerating from a header that has no sidecar entry
    pub fn with_request_defaults(mut self, request_defaults: RequestOptions) -> Self {
        self.request_defaults = request_defaults;
        self
    }

    /// Stored settings keyed by generation id
    pub fn with_sidecar(mut self, sidecar: BTreeMap<String, GeneratorSettings>) -> Self {
        self.sidecar = sidecar;
        self
    }

    /// Emit options that win over the ones carried by the settings
    pub fn with_emit_options(mut self, emit_options: EmitOptions) -> Self {
        self.emit_override = Some(emit_options);
        self
    }

    fn primitive_types(&self) -> PrimitiveTypes {
        PrimitiveTypes::with_custom(
            self.custom_types
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        )
    }

    /// Generate a new document under a fresh generation id
    pub async fn generate(&self, settings: GeneratorSettings) -> Generated {
        let id = uuid::Uuid::new_v4().to_string();
        self.generate_with_id(settings, id).await
    }

    async fn generate_with_id(&self, mut settings: GeneratorSettings, id: String) -> Generated {
        if let Some(emit_options) = self.emit_override {
            settings.emit_options = emit_options;
        }

        match self.try_generate(&settings, &id).await {
            Ok(text) => Generated {
                text,
                id,
                settings,
                failure: None,
            },
            Err(error) => {
                log::error!("Creating declarations for {} failed: {}", settings.source, error);
                Generated {
                    text: render_header(&settings, Some(&id)),
                    id,
                    settings,
                    failure: Some(error),
                }
            }
        }
    }

    async fn try_generate(&self, settings: &GeneratorSettings, id: &str) -> Result<String, GenerateError> {
        log::info!("Fetching metadata from {}", settings.source);
        let metadata_xml = self
            .source
            .fetch(&settings.source, &settings.request_options)
            .await
            .map_err(GenerateError::Fetch)?;

        let mut types = self.primitive_types();
        let text = render(&metadata_xml, settings, Some(id), &settings.emit_options, &mut types)?;
        Ok(text)
    }

    /// Regenerate a previously generated document from its header
    ///
    /// Text above the header line and below the sentinel line is kept. A
    /// document without a sentinel is replaced from the header to the end.
    pub async fn regenerate(&self, existing_text: &str) -> Result<Generated, GenerateError> {
        log::info!("Looking for header");
        let header = find_header(existing_text).ok_or(GenerateError::HeaderNotFound)?;

        let id = header
            .id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        // Source and modularity always come from the header so edits to it stick
        let settings = match self.sidecar.get(&id) {
            Some(stored) => {
                log::debug!("Using stored request and emit options for generation {}", id);
                header
                    .settings
                    .clone()
                    .with_request_options(stored.request_options.clone())
                    .with_emit_options(stored.emit_options)
            }
            None => header
                .settings
                .clone()
                .with_request_options(self.request_defaults.clone()),
        };

        let mut generated = self.generate_with_id(settings, id).await;

        let before = &existing_text[..header.span.start];
        let after = text_after_sentinel(&existing_text[header.span.end..]);

        let mut text = String::with_capacity(before.len() + generated.text.len() + after.len());
        text.push_str(before);
        text.push_str(&generated.text);
        if !after.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(after);
        generated.text = text;

        Ok(generated)
    }
}

/// Whatever follows the sentinel line, or nothing if there is none
fn text_after_sentinel(text: &str) -> &str {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        offset += line.len();
        if line.trim_end() == SENTINEL {
            return &text[offset..];
        }
    }
    ""
}
