pub mod dataset_client_http;

pub use dataset_client_http::HttpDatasetClient;
