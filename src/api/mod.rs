//! Retrieval of `$metadata` documents
//!
//! The generator only sees the [`MetadataSource`] trait. The CLI plugs in
//! [`HttpMetadataSource`] for services and [`FileMetadataSource`] for a
//! metadata document saved on disk.

pub mod client;
pub mod constants;
pub mod resilience;

pub use client::{FetchError, HttpMetadataSource};
pub use resilience::{RetryConfig, RetryPolicy, RetryableError};

use crate::typegen::RequestOptions;
use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;

/// Anything that can hand out the XML text of a metadata document
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn fetch(&self, source: &str, options: &RequestOptions) -> anyhow::Result<String>;
}

/// Serves a local file regardless of the requested source URI
///
/// The header still records the URI, so a later `update` goes to the service.
#[derive(Debug, Clone)]
pub struct FileMetadataSource {
    path: PathBuf,
}

impl FileMetadataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MetadataSource for FileMetadataSource {
    async fn fetch(&self, source: &str, _options: &RequestOptions) -> anyhow::Result<String> {
        log::info!("Reading metadata for {} from {}", source, self.path.display());
        tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read metadata file: {}", self.path.display()))
    }
}

#[async_trait]
impl<T: MetadataSource + ?Sized> MetadataSource for Box<T> {
    async fn fetch(&self, source: &str, options: &RequestOptions) -> anyhow::Result<String> {
        (**self).fetch(source, options).await
    }
}
