#[tokio::main]
async fn main() {
    hymns_data::app::cli::run().await;
}
