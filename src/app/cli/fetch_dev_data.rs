//! Fetch-dev-data command implementation.

use std::path::{Path, PathBuf};

use url::Url;

use crate::app::api::{self, BootstrapOutcome, FetchDevDataOptions};
use crate::domain::AppError;

pub(super) async fn run_fetch_dev_data(
    config_path: Option<&Path>,
    path: Option<PathBuf>,
    url: Option<Url>,
    strict: bool,
) -> Result<i32, AppError> {
    let config = api::load_config(config_path)?;
    let options = FetchDevDataOptions { path, url };

    match api::fetch_dev_data_with_config(config, options).await {
        Ok(BootstrapOutcome::AlreadyPresent { path }) => {
            println!("✅ {} already exists locally, skipping fetch", path.display());
            Ok(0)
        }
        Ok(BootstrapOutcome::Downloaded { path, bytes }) => {
            println!("✅ Downloaded {} bytes to {}", bytes, path.display());
            Ok(0)
        }
        Err(err) if !strict => {
            eprintln!("⚠️  Continuing without dev dataset: {}", err);
            Ok(0)
        }
        Err(err) => Err(err),
    }
}
