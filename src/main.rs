#[tokio::main]
async fn main() {
    meetup_backend::run().await;
}
