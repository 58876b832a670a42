//! Build/runtime flags that decide where the dataset is read from.

/// Environment variable carrying the build mode (`production` or anything else).
pub const MODE_ENV: &str = "NODE_ENV";
/// Environment variable carrying the development override URL.
pub const OVERRIDE_URL_ENV: &str = "HYMNS_JSON_URL";

/// Read-only snapshot of the execution context.
///
/// Built once at startup and passed explicitly to resolution, so the resolver
/// itself never touches process state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentContext {
    pub production: bool,
    pub override_url: Option<String>,
}

impl EnvironmentContext {
    pub fn production() -> Self {
        Self { production: true, override_url: None }
    }

    pub fn development() -> Self {
        Self { production: false, override_url: None }
    }

    /// Attach an override URL. Blank values count as absent.
    pub fn with_override_url<S: Into<String>>(mut self, url: S) -> Self {
        self.override_url = normalize_override(Some(url.into()));
        self
    }

    /// Build a context from raw mode and override values.
    pub fn from_values(mode: Option<&str>, override_url: Option<String>) -> Self {
        Self {
            production: mode.is_some_and(is_production_mode),
            override_url: normalize_override(override_url),
        }
    }

    pub fn mode_label(&self) -> &'static str {
        if self.production { "production" } else { "development" }
    }
}

fn is_production_mode(mode: &str) -> bool {
    mode.trim().eq_ignore_ascii_case("production")
}

fn normalize_override(value: Option<String>) -> Option<String> {
    value.filter(|url| !url.trim().is_empty())
}
