use super::MetadataSource;
use super::constants::{self, headers};
use super::resilience::{Classify, RetryConfig, RetryPolicy, RetryableError};
use crate::typegen::RequestOptions;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// One failed attempt at fetching `$metadata`
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Metadata fetch failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl Classify for FetchError {
    fn classify(&self) -> RetryableError {
        match self {
            FetchError::Transport(error) => error.classify(),
            FetchError::Status { status, .. } => RetryableError::from_status_code(status.as_u16()),
        }
    }
}

/// Fetches `$metadata` documents over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpMetadataSource {
    http_client: reqwest::Client,
    retry_policy: RetryPolicy,
}

impl HttpMetadataSource {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_retry_config(RetryConfig::default())
    }

    pub fn with_retry_config(retry_config: RetryConfig) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(constants::CONNECT_TIMEOUT_SECS))
            .user_agent(constants::user_agent())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_custom_client(http_client, retry_config))
    }

    /// Create a source around a preconfigured HTTP client
    pub fn with_custom_client(http_client: reqwest::Client, retry_config: RetryConfig) -> Self {
        Self {
            http_client,
            retry_policy: RetryPolicy::new(retry_config),
        }
    }

    fn request(&self, url: &str, options: &RequestOptions) -> reqwest::RequestBuilder {
        let mut request = self
            .http_client
            .get(url)
            .timeout(Duration::from_secs(options.timeout_secs))
            .header("Accept", headers::ACCEPT_XML)
            .header("OData-MaxVersion", headers::ODATA_MAX_VERSION);

        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        if let Some(token) = &options.bearer_token {
            request = request.bearer_auth(token);
        } else if let Some(auth) = &options.basic_auth {
            request = request.basic_auth(&auth.username, auth.password.as_ref());
        }

        request
    }
}

#[async_trait]
impl MetadataSource for HttpMetadataSource {
    async fn fetch(&self, source: &str, options: &RequestOptions) -> anyhow::Result<String> {
        log::info!("Requesting {}", source);

        let metadata_xml = self
            .retry_policy
            .execute(move || async move {
                let response = self.request(source, options).send().await?;
                let status = response.status();
                if !status.is_success() {
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    return Err(FetchError::Status { status, body });
                }
                Ok::<_, FetchError>(response.text().await?)
            })
            .await?;

        log::debug!("Received {} bytes of metadata", metadata_xml.len());
        Ok(metadata_xml)
    }
}
