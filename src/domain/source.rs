//! Dataset source resolution.

use std::fmt;

use url::Url;

use crate::domain::AppError;
use crate::domain::config::SourceConfig;
use crate::domain::environment::EnvironmentContext;

/// Which candidate won the precedence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Built asset served by the static site.
    Production,
    /// Developer-supplied override URL.
    Override,
    /// Raw-content remote copy.
    RemoteFallback,
}

impl SourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Production => "production",
            SourceKind::Override => "override",
            SourceKind::RemoteFallback => "remote-fallback",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved source: the literal URL string plus the candidate it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    pub kind: SourceKind,
    pub url: String,
}

impl ResolvedSource {
    /// Absolute URL to request.
    ///
    /// Absolute sources are used as-is. Relative ones are joined against the
    /// site origin in production and the dev-server origin otherwise.
    pub fn request_url(&self, config: &SourceConfig) -> Result<Url, AppError> {
        match Url::parse(&self.url) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let origin = match self.kind {
                    SourceKind::Production => &config.site_origin,
                    SourceKind::Override | SourceKind::RemoteFallback => &config.dev_server_origin,
                };
                origin.join(&self.url).map_err(|e| AppError::InvalidUrl {
                    url: self.url.clone(),
                    details: e.to_string(),
                })
            }
            Err(e) => Err(AppError::InvalidUrl { url: self.url.clone(), details: e.to_string() }),
        }
    }
}

impl fmt::Display for ResolvedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Pick the dataset URL for `env`.
///
/// Precedence: production build, then override URL, then the remote fallback.
pub fn resolve_source_url(env: &EnvironmentContext, config: &SourceConfig) -> ResolvedSource {
    if env.production {
        return ResolvedSource { kind: SourceKind::Production, url: config.production_path() };
    }

    if let Some(url) = env.override_url.as_deref().filter(|url| !url.trim().is_empty()) {
        return ResolvedSource { kind: SourceKind::Override, url: url.to_string() };
    }

    ResolvedSource { kind: SourceKind::RemoteFallback, url: config.remote_url.to_string() }
}
