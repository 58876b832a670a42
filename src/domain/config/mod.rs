pub mod app_config;
pub mod parse;
pub mod paths;

pub use app_config::{AppConfig, BootstrapConfig, HttpConfig, REMOTE_DATASET_URL, SourceConfig};
