use std::time::Duration;

use anyhow::Result;
use feedgrab::{FetchClient, FetchRequest, DEFAULT_ENDPOINT};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "feedgrab=info".to_string()))
        .init();

    // Optional environment variables with defaults
    let url = std::env::var("FEEDGRAB_URL")
        .unwrap_or_else(|_| "https://www.techradar.com/au/feeds/tag/computing".to_string());

    let endpoint =
        std::env::var("FEEDGRAB_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

    // Larger limit than the service default so whole feeds come through
    let max_length = std::env::var("FEEDGRAB_MAX_LENGTH")
        .unwrap_or_else(|_| "100000".to_string())
        .parse::<u64>()?;

    let client = match std::env::var("FEEDGRAB_TIMEOUT_SECONDS") {
        Ok(seconds) => {
            FetchClient::with_timeout(endpoint, Duration::from_secs(seconds.parse::<u64>()?))
        }
        Err(_) => FetchClient::new(endpoint),
    };

    let request = FetchRequest {
        url,
        max_length,
        start_index: 0,
        raw: true,
    };

    let result = client.fetch_with(&request).await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
