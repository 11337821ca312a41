pub mod products;

pub async fn ping() -> &'static str {
    "pong"
}
