//! Resolve command implementation.

use std::path::Path;

use crate::app::api;
use crate::app::cli::EnvArgs;
use crate::domain::AppError;

pub(super) fn run_resolve(config_path: Option<&Path>, args: EnvArgs) -> Result<(), AppError> {
    let config = api::load_config(config_path)?;
    let env = args.apply(api::load_environment());

    let resolved = api::resolve_source(&config, &env);
    tracing::info!(kind = %resolved.kind, mode = env.mode_label(), "Resolved dataset source");
    println!("{}", resolved.url);
    Ok(())
}
