//! Example: fetch and print all logbook entries.
//!
//! Run with: `VITALOG_API_URL=http://localhost:3000 cargo run --example fetch_logs`

use vitalog_core::{ClientConfig, ClientError, LogClient, LogStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ClientError> {
    // Initialize logging (optional)
    env_logger::init();

    let config = ClientConfig::from_env();
    println!("Fetching logs from {}...", config.base_url);

    let client = LogClient::new(config)?;
    let entries = client.fetch_logs().await?;

    println!("{} entries", entries.len());
    for entry in entries {
        let value = entry
            .value_1
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        let unit = entry.unit_1.unwrap_or_default();
        println!("[{}] {}: {} {}", entry.timestamp, entry.kind, value, unit);
    }

    Ok(())
}
