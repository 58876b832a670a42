//! Configuration domain models loaded from `hymns.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Raw-content location of the dataset, shared by the bootstrap and the runtime fallback.
pub const REMOTE_DATASET_URL: &str =
    "https://raw.githubusercontent.com/EnonBaptistChurch/church-data/main/song-selector/Hymns.json";
pub const DEFAULT_BASE_PATH: &str = "song-selector";
pub const DEFAULT_DATASET: &str = "Hymns";
pub const DEFAULT_SITE_ORIGIN: &str = "https://enonbaptistchurch.github.io";
pub const DEFAULT_DEV_SERVER_ORIGIN: &str = "http://localhost:4321";
pub const DEFAULT_DEV_DATA_PATH: &str = "dev-data/Hymns.json";

/// Top-level configuration. Every section is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.source.validate()?;
        self.bootstrap.validate()?;
        self.http.validate()?;
        Ok(())
    }
}

/// Candidate locations the data accessor chooses between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Site base path the static build is served under (no slashes).
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Dataset file stem; the asset lives at `data/<dataset>.json`.
    #[serde(default = "default_dataset")]
    pub dataset: String,
    /// Remote fallback used in development when no override is set.
    #[serde(default = "default_remote_url")]
    pub remote_url: Url,
    /// Origin that relative production paths are requested from.
    #[serde(default = "default_site_origin")]
    pub site_origin: Url,
    /// Origin that relative development overrides are requested from.
    #[serde(default = "default_dev_server_origin")]
    pub dev_server_origin: Url,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            dataset: default_dataset(),
            remote_url: default_remote_url(),
            site_origin: default_site_origin(),
            dev_server_origin: default_dev_server_origin(),
        }
    }
}

impl SourceConfig {
    /// Built-asset path for production: `/<base-path>/data/<dataset>.json`.
    pub fn production_path(&self) -> String {
        format!("/{}/data/{}.json", self.base_path, self.dataset)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let base = self.base_path.trim_matches('/');
        if base.is_empty() || base != self.base_path {
            return Err(AppError::invalid_config(format!(
                "source.base_path must be a non-empty path without leading or trailing '/': '{}'",
                self.base_path
            )));
        }
        if self.dataset.trim().is_empty() || self.dataset.contains('/') {
            return Err(AppError::invalid_config(format!(
                "source.dataset must be a non-empty file stem: '{}'",
                self.dataset
            )));
        }
        for (name, origin) in
            [("site_origin", &self.site_origin), ("dev_server_origin", &self.dev_server_origin)]
        {
            if origin.cannot_be_a_base() {
                return Err(AppError::invalid_config(format!(
                    "source.{} must be an absolute origin: '{}'",
                    name, origin
                )));
            }
        }
        Ok(())
    }
}

/// Local development copy written by `fetch-dev-data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapConfig {
    #[serde(default = "default_dev_data_path")]
    pub path: PathBuf,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self { path: default_dev_data_path() }
    }
}

impl BootstrapConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.path.as_os_str().is_empty() {
            return Err(AppError::invalid_config("bootstrap.path must not be empty"));
        }
        Ok(())
    }
}

/// HTTP client tuning. Unset values keep the client defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl HttpConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == Some(0) {
            return Err(AppError::invalid_config("http.timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_dataset() -> String {
    DEFAULT_DATASET.to_string()
}

fn default_remote_url() -> Url {
    parse_constant(REMOTE_DATASET_URL)
}

fn default_site_origin() -> Url {
    parse_constant(DEFAULT_SITE_ORIGIN)
}

fn default_dev_server_origin() -> Url {
    parse_constant(DEFAULT_DEV_SERVER_ORIGIN)
}

fn default_dev_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DEV_DATA_PATH)
}

fn parse_constant(value: &str) -> Url {
    Url::parse(value).expect("Built-in default URL must be valid")
}
