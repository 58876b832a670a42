use crate::domain::AppConfig;
use crate::ports::DatasetClient;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: DatasetClient> {
    config: AppConfig,
    client: C,
}

impl<C: DatasetClient> AppContext<C> {
    /// Create a new application context.
    pub fn new(config: AppConfig, client: C) -> Self {
        Self { config, client }
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the dataset client.
    pub fn client(&self) -> &C {
        &self.client
    }
}
