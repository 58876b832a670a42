//! Get command implementation.

use std::path::Path;

use crate::app::api;
use crate::app::cli::EnvArgs;
use crate::domain::AppError;

pub(super) async fn run_get(
    config_path: Option<&Path>,
    args: EnvArgs,
    compact: bool,
) -> Result<(), AppError> {
    let config = api::load_config(config_path)?;
    let env = args.apply(api::load_environment());

    let value = api::get_hymns_with(config, &env).await?;
    let rendered = if compact {
        serde_json::to_string(&value)
    } else {
        serde_json::to_string_pretty(&value)
    }
    .map_err(std::io::Error::from)?;

    println!("{}", rendered);
    Ok(())
}
