use time::format_description::well_known;

use crate::constants::version::get_version;
use crate::models::quotes::distinct_categories;
use crate::Data;

/// print version and store statistics.
#[tracing::instrument(skip_all)]
pub fn run(data: &Data) -> anyhow::Result<()> {
    let quotes = data.store.load()?;
    let state = data.store.load_state();
    let categories = distinct_categories(&quotes);

    println!("quotekeeper {}", get_version());
    println!("rust {}", rustc_version_runtime::version());
    println!("store: {}", data.store.quotes_path().display());
    println!("quotes stored: {}", quotes.len());
    println!("categories: {}", categories.len());

    match &state.last_filter {
        Some(category) => println!("category filter: \"{category}\""),
        None => println!("category filter: none"),
    }

    match state.last_synced {
        Some(ts) => println!("last synced: {}", ts.format(&well_known::Rfc3339)?),
        None => println!("last synced: never"),
    }

    Ok(())
}
