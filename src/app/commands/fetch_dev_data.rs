//! Fetch-if-missing bootstrap of the local development dataset.

use std::path::{Path, PathBuf};

use tokio::fs::{self, File};
use url::Url;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::config::paths;
use crate::ports::DatasetClient;

/// Overrides for a single bootstrap run. Unset values come from configuration.
#[derive(Debug, Clone, Default)]
pub struct FetchDevDataOptions {
    pub path: Option<PathBuf>,
    pub url: Option<Url>,
}

/// Final state of a bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The local copy already existed; no request was made.
    AlreadyPresent { path: PathBuf },
    /// The local copy was downloaded.
    Downloaded { path: PathBuf, bytes: u64 },
}

impl BootstrapOutcome {
    pub fn path(&self) -> &Path {
        match self {
            BootstrapOutcome::AlreadyPresent { path }
            | BootstrapOutcome::Downloaded { path, .. } => path,
        }
    }
}

/// Ensure the local dataset copy exists, downloading it once if absent.
///
/// Failures are logged and returned; the caller decides whether they are fatal.
pub async fn execute<C: DatasetClient>(
    ctx: &AppContext<C>,
    options: FetchDevDataOptions,
) -> Result<BootstrapOutcome, AppError> {
    let path = options.path.unwrap_or_else(|| ctx.config().bootstrap.path.clone());
    let url = options.url.unwrap_or_else(|| ctx.config().source.remote_url.clone());

    match ensure_present(ctx.client(), &url, path).await {
        Ok(outcome) => Ok(outcome),
        Err(err) => {
            tracing::error!(%url, error = %err, "Failed to fetch dataset");
            Err(err)
        }
    }
}

async fn ensure_present<C: DatasetClient>(
    client: &C,
    url: &Url,
    path: PathBuf,
) -> Result<BootstrapOutcome, AppError> {
    tracing::info!(path = %path.display(), "Checking for local dataset");

    if fs::try_exists(&path).await? {
        tracing::info!(path = %path.display(), "Dataset already exists locally, skipping fetch");
        return Ok(BootstrapOutcome::AlreadyPresent { path });
    }

    tracing::info!(%url, "Fetching dataset for dev");
    let bytes = download_to(client, url, &path).await?;
    tracing::info!(path = %path.display(), bytes, "Dataset downloaded");
    Ok(BootstrapOutcome::Downloaded { path, bytes })
}

/// Stream `url` into a `.part` sibling of `target`, then move it into place.
async fn download_to<C: DatasetClient>(
    client: &C,
    url: &Url,
    target: &Path,
) -> Result<u64, AppError> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let partial = paths::partial_download(target);
    let result = stream_and_commit(client, url, &partial, target).await;
    if result.is_err() && fs::try_exists(&partial).await.unwrap_or(false) {
        if let Err(cleanup) = fs::remove_file(&partial).await {
            tracing::warn!(
                path = %partial.display(),
                error = %cleanup,
                "Could not remove partial download"
            );
        }
    }
    result
}

async fn stream_and_commit<C: DatasetClient>(
    client: &C,
    url: &Url,
    partial: &Path,
    target: &Path,
) -> Result<u64, AppError> {
    let mut file = File::create(partial).await?;
    let bytes = client.download(url, &mut file).await?;
    file.sync_all().await?;
    drop(file);

    fs::rename(partial, target).await?;
    Ok(bytes)
}
