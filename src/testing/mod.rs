mod env_var_guard;
mod fake_dataset_client;

pub use env_var_guard::EnvVarGuard;
pub use fake_dataset_client::{FakeDatasetClient, FakeResponse};
