//! The settings header line at the top of generated documents

use super::settings::{GeneratorSettings, Modularity};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Every header line starts with this
pub const HEADER_PREFIX: &str = "// odata-typegen: ";

#[derive(Debug, Serialize, Deserialize)]
struct HeaderPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    source: String,
    modularity: Modularity,
}

/// A header found in an existing document
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderMatch {
    /// Source and modularity; request options are never part of the header
    pub settings: GeneratorSettings,
    /// Generation id used to look up the sidecar entry, if one was written
    pub id: Option<String>,
    /// Byte range of the header line, including its line break
    pub span: Range<usize>,
}

/// Render the single header line (no trailing newline)
pub fn render_header(settings: &GeneratorSettings, id: Option<&str>) -> String {
    let payload = HeaderPayload {
        id: id.map(str::to_string),
        source: settings.source.clone(),
        modularity: settings.modularity,
    };
    // A struct of strings and a unit enum always serializes
    let json = serde_json::to_string(&payload).unwrap_or_default();
    format!("{HEADER_PREFIX}{json}")
}

/// Find the first valid header line in `text`
pub fn find_header(text: &str) -> Option<HeaderMatch> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let start = offset;
        offset += line.len();

        let Some(json) = line.trim().strip_prefix(HEADER_PREFIX.trim_end()) else {
            continue;
        };
        match serde_json::from_str::<HeaderPayload>(json.trim()) {
            Ok(payload) => {
                log::debug!("Found header for source {}", payload.source);
                return Some(HeaderMatch {
                    settings: GeneratorSettings::new(payload.source, payload.modularity),
                    id: payload.id,
                    span: start..offset,
                });
            }
            Err(e) => log::warn!("Ignoring malformed header line: {}", e),
        }
    }
    None
}
