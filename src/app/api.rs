//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration
//! loading, context creation and command execution.

use std::path::Path;

use serde_json::Value;

use crate::adapters::HttpDatasetClient;
use crate::app::{
    AppContext,
    commands::{fetch_dev_data as fetch_dev_data_cmd, get_hymns as get_hymns_cmd},
    config,
};
use crate::domain::{AppConfig, EnvironmentContext, ResolvedSource};

pub use crate::app::commands::fetch_dev_data::{BootstrapOutcome, FetchDevDataOptions};
pub use crate::domain::AppError;

/// Create an `AppContext` backed by the HTTP client.
fn create_context(config: AppConfig) -> Result<AppContext<HttpDatasetClient>, AppError> {
    let client = HttpDatasetClient::new(&config.http)?;
    Ok(AppContext::new(config, client))
}

/// Load configuration relative to the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    config::load_config(explicit, &std::env::current_dir()?)
}

/// Snapshot the process environment into an [`EnvironmentContext`].
pub fn load_environment() -> EnvironmentContext {
    config::load_environment()
}

// =============================================================================
// Bootstrap Fetcher API
// =============================================================================

/// Download the development dataset if it is not already present.
pub async fn fetch_dev_data(options: FetchDevDataOptions) -> Result<BootstrapOutcome, AppError> {
    fetch_dev_data_with_config(load_config(None)?, options).await
}

/// Download the development dataset using an explicit configuration.
pub async fn fetch_dev_data_with_config(
    config: AppConfig,
    options: FetchDevDataOptions,
) -> Result<BootstrapOutcome, AppError> {
    let ctx = create_context(config)?;
    fetch_dev_data_cmd::execute(&ctx, options).await
}

// =============================================================================
// Data Accessor API
// =============================================================================

/// Resolve the dataset source for `env` using an explicit configuration.
pub fn resolve_source(config: &AppConfig, env: &EnvironmentContext) -> ResolvedSource {
    crate::domain::resolve_source_url(env, &config.source)
}

/// Fetch the dataset using the configuration and environment of this process.
pub async fn get_hymns() -> Result<Value, AppError> {
    get_hymns_with(load_config(None)?, &load_environment()).await
}

/// Fetch the dataset with explicit configuration and environment.
pub async fn get_hymns_with(
    config: AppConfig,
    env: &EnvironmentContext,
) -> Result<Value, AppError> {
    let ctx = create_context(config)?;
    get_hymns_cmd::execute(&ctx, env).await
}
