//! Runtime data accessor.

use serde_json::Value;

use crate::app::AppContext;
use crate::domain::{AppError, EnvironmentContext, ResolvedSource, resolve_source_url};
use crate::ports::DatasetClient;

/// Resolve the dataset source for `env` using the context's source configuration.
pub fn resolve<C: DatasetClient>(ctx: &AppContext<C>, env: &EnvironmentContext) -> ResolvedSource {
    resolve_source_url(env, &ctx.config().source)
}

/// Resolve the source, issue one GET and return the parsed payload.
///
/// Every call re-resolves and re-requests; nothing is cached. Network errors
/// name the source exactly as it was resolved.
pub async fn execute<C: DatasetClient>(
    ctx: &AppContext<C>,
    env: &EnvironmentContext,
) -> Result<Value, AppError> {
    let source = resolve(ctx, env);
    let url = source.request_url(&ctx.config().source)?;
    tracing::debug!(kind = %source.kind, %url, mode = env.mode_label(), "Fetching dataset");

    ctx.client().fetch_json(&url).await.map_err(|err| err.with_url(source.url))
}
