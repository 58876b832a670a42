pub mod fetch_dev_data;
pub mod get_hymns;
