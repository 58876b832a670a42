//! Environment-backed configuration loaders.
//!
//! Pure schema parsing lives in `domain::config`; this module decides where
//! values come from (files, process environment).

mod load_config;
mod load_environment;

pub use load_config::{CONFIG_PATH_ENV, load_config};
pub use load_environment::load_environment;
