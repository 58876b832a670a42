use std::sync::{Arc, Mutex};

use serde_json::Value;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use url::Url;

use crate::domain::AppError;
use crate::ports::DatasetClient;

/// Canned behavior for every request the fake receives.
#[derive(Clone, Debug)]
pub enum FakeResponse {
    Body(Vec<u8>),
    Status(u16),
    Transport(String),
    /// Writes the bytes, then fails mid-stream.
    Truncated(Vec<u8>),
}

#[derive(Clone)]
pub struct FakeDatasetClient {
    pub requests: Arc<Mutex<Vec<Url>>>,
    pub response: FakeResponse,
}

impl FakeDatasetClient {
    pub fn new(response: FakeResponse) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), response }
    }

    pub fn serving(body: &str) -> Self {
        Self::new(FakeResponse::Body(body.as_bytes().to_vec()))
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, url: &Url) {
        self.requests.lock().unwrap().push(url.clone());
    }
}

impl DatasetClient for FakeDatasetClient {
    async fn fetch_json(&self, url: &Url) -> Result<Value, AppError> {
        self.record(url);
        match &self.response {
            FakeResponse::Body(body) => serde_json::from_slice(body).map_err(|e| {
                AppError::MalformedJson { url: url.to_string(), details: e.to_string() }
            }),
            FakeResponse::Status(status) => {
                Err(AppError::HttpStatus { url: url.to_string(), status: *status })
            }
            FakeResponse::Transport(details) => {
                Err(AppError::Transport { url: url.to_string(), details: details.clone() })
            }
            FakeResponse::Truncated(_) => Err(AppError::Transport {
                url: url.to_string(),
                details: "connection reset".to_string(),
            }),
        }
    }

    async fn download<W>(&self, url: &Url, sink: &mut W) -> Result<u64, AppError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        self.record(url);
        match &self.response {
            FakeResponse::Body(body) => {
                sink.write_all(body).await?;
                sink.flush().await?;
                Ok(body.len() as u64)
            }
            FakeResponse::Status(status) => {
                Err(AppError::HttpStatus { url: url.to_string(), status: *status })
            }
            FakeResponse::Transport(details) => {
                Err(AppError::Transport { url: url.to_string(), details: details.clone() })
            }
            FakeResponse::Truncated(partial) => {
                sink.write_all(partial).await?;
                Err(AppError::Transport {
                    url: url.to_string(),
                    details: "connection reset".to_string(),
                })
            }
        }
    }
}
