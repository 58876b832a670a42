//! Dataset transport port definition.

use serde_json::Value;
use tokio::io::AsyncWrite;
use url::Url;

use crate::domain::AppError;

/// Port for retrieving the dataset over the network.
///
/// Each call issues exactly one request. Implementations never retry and
/// never cache.
pub trait DatasetClient {
    /// GET `url` and parse the body as JSON.
    ///
    /// A non-success status is an error naming `url`.
    fn fetch_json(&self, url: &Url) -> impl Future<Output = Result<Value, AppError>> + Send;

    /// GET `url` and stream the body into `sink` as it arrives.
    ///
    /// Nothing is written when the status is not a success. Returns the
    /// number of bytes written.
    fn download<W>(
        &self,
        url: &Url,
        sink: &mut W,
    ) -> impl Future<Output = Result<u64, AppError>> + Send
    where
        W: AsyncWrite + Unpin + Send;
}
