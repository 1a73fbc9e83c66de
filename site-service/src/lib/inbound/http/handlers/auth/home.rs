/// Greeting for the auth API root.
pub async fn home() -> &'static str {
    "Welcome to the site API"
}
