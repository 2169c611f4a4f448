use std::sync::LazyLock;

use crate::models::quotes::Quote;

pub mod version;

pub static STARTUP_TIME: LazyLock<std::time::SystemTime> =
    LazyLock::new(std::time::SystemTime::now);

/// placeholder endpoint used when no server url is configured.
pub static DEFAULT_SERVER_URL: &str = "https://jsonplaceholder.typicode.com/posts";

pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 60;

/// how many posts of a server fetch are considered for merging.
pub const SERVER_FETCH_LIMIT: usize = 5;

/// category assigned to quotes fetched from the server.
pub static SERVER_CATEGORY: &str = "Server";

/// quotes seeded into a brand new store.
pub static DEFAULT_QUOTES: LazyLock<Vec<Quote>> = LazyLock::new(|| {
    vec![
        Quote::new(
            "The best way to get started is to quit talking and begin doing.",
            "Motivation",
        ),
        Quote::new(
            "Success is not final, failure is not fatal: it is the courage to continue that counts.",
            "Perseverance",
        ),
        Quote::new(
            "Your time is limited, so don’t waste it living someone else’s life.",
            "Life",
        ),
    ]
});
