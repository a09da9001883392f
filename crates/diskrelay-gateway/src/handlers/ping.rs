pub async fn ping_handler() -> &'static str {
    "pong"
}
