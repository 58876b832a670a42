//! Dataset client implementation using reqwest.

use std::time::Duration;

use reqwest::{Client, Response};
use serde_json::Value;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use url::Url;

use crate::domain::{AppError, HttpConfig};
use crate::ports::DatasetClient;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for the dataset.
///
/// This client performs a single request per call. No timeout is applied
/// unless `http.timeout_secs` is configured.
#[derive(Debug, Clone)]
pub struct HttpDatasetClient {
    client: Client,
}

impl HttpDatasetClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: &HttpConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build().map_err(|e| {
            AppError::invalid_config(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client })
    }

    async fn get_success(&self, url: &Url) -> Result<Response, AppError> {
        tracing::debug!(%url, "GET");
        let response =
            self.client.get(url.clone()).send().await.map_err(|e| transport_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "non-success response");
            return Err(AppError::HttpStatus { url: url.to_string(), status: status.as_u16() });
        }

        Ok(response)
    }
}

impl DatasetClient for HttpDatasetClient {
    async fn fetch_json(&self, url: &Url) -> Result<Value, AppError> {
        let response = self.get_success(url).await?;
        let body = response.bytes().await.map_err(|e| transport_error(url, &e))?;

        serde_json::from_slice(&body)
            .map_err(|e| AppError::MalformedJson { url: url.to_string(), details: e.to_string() })
    }

    async fn download<W>(&self, url: &Url, sink: &mut W) -> Result<u64, AppError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let mut response = self.get_success(url).await?;

        let mut written: u64 = 0;
        while let Some(chunk) = response.chunk().await.map_err(|e| transport_error(url, &e))? {
            sink.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        sink.flush().await?;

        tracing::debug!(%url, bytes = written, "download complete");
        Ok(written)
    }
}

fn transport_error(url: &Url, err: &reqwest::Error) -> AppError {
    AppError::Transport { url: url.to_string(), details: err.to_string() }
}
