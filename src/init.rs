use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_SERVER_URL, DEFAULT_SYNC_INTERVAL_SECS};
use crate::store::QuoteStore;
use crate::{telemetry, Data};

fn init_store() -> anyhow::Result<QuoteStore> {
    let data_dir = match std::env::var("QUOTEKEEPER_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            tracing::debug!("no data directory configured. defaulting to ./data.");
            PathBuf::from("data")
        }
    };

    QuoteStore::open(data_dir)
}

fn init_server_url() -> String {
    match std::env::var("QUOTEKEEPER_SERVER_URL") {
        Ok(url) => {
            tracing::info!(url = %url, "syncing quotes against configured server.");
            url
        }
        Err(_) => {
            tracing::debug!("no server url configured. defaulting to the placeholder endpoint.");
            DEFAULT_SERVER_URL.to_string()
        }
    }
}

fn init_sync_interval() -> Duration {
    let secs = std::env::var("QUOTEKEEPER_SYNC_INTERVAL")
        .ok()
        .and_then(|secs| secs.parse::<u64>().ok())
        .filter(|secs| *secs > 0);

    match secs {
        Some(secs) => Duration::from_secs(secs),
        None => {
            tracing::debug!(
                "no sync interval configured. defaulting to {} seconds.",
                DEFAULT_SYNC_INTERVAL_SECS
            );
            Duration::from_secs(DEFAULT_SYNC_INTERVAL_SECS)
        }
    }
}

pub fn init() -> anyhow::Result<Data> {
    telemetry::init_telemetry().expect("Failed to initialize OpenTelemetry");

    tracing::debug!("initializing... please wait warmly.");

    let store = init_store()?;
    let server_url = init_server_url();
    let sync_interval = init_sync_interval();
    let reqwest_client = reqwest::Client::new();

    let data = Data {
        reqwest_client,
        store,
        server_url,
        sync_interval,
    };

    tracing::debug!("finished initializing!");

    Ok(data)
}
