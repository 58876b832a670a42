mod dataset_client;

pub use dataset_client::DatasetClient;
