//! hymns-data: obtain the song-selector `Hymns.json` dataset.
//!
//! Two entry points share one configuration:
//! - [`fetch_dev_data`] downloads a local development copy once, if absent.
//! - [`get_hymns`] resolves the source for the current environment and fetches it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::HttpDatasetClient;
pub use app::api::{
    BootstrapOutcome, FetchDevDataOptions, fetch_dev_data, fetch_dev_data_with_config, get_hymns,
    get_hymns_with, load_config, load_environment, resolve_source,
};
pub use domain::{
    AppConfig, AppError, BootstrapConfig, EnvironmentContext, HttpConfig, ResolvedSource,
    SourceConfig, SourceKind, resolve_source_url,
};
