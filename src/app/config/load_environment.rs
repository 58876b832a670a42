//! Environment context loading from the process environment.

use std::env;

use crate::domain::EnvironmentContext;
use crate::domain::environment::{MODE_ENV, OVERRIDE_URL_ENV};

/// Snapshot `NODE_ENV` and `HYMNS_JSON_URL` into an [`EnvironmentContext`].
pub fn load_environment() -> EnvironmentContext {
    let mode = env::var(MODE_ENV).ok();
    let override_url = env::var(OVERRIDE_URL_ENV).ok();
    EnvironmentContext::from_values(mode.as_deref(), override_url)
}
