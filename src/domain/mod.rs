pub mod config;
pub mod environment;
pub mod error;
pub mod source;

pub use config::{AppConfig, BootstrapConfig, HttpConfig, SourceConfig};
pub use environment::EnvironmentContext;
pub use error::AppError;
pub use source::{ResolvedSource, SourceKind, resolve_source_url};
