#[tokio::main]
async fn main() {
    if let Err(e) = hotel_backend::run().await {
        eprintln!("hotel-backend failed to start: {e}");
        std::process::exit(1);
    }
}
