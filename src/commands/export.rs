use std::path::Path;

use crate::Data;

/// export the quote list as pretty-printed JSON.
#[tracing::instrument(skip(data))]
pub fn run(data: &Data, path: Option<&Path>) -> anyhow::Result<()> {
    let quotes = data.store.load()?;
    let raw = serde_json::to_string_pretty(&quotes)?;

    match path {
        Some(path) => {
            std::fs::write(path, raw).inspect_err(
                |e| tracing::error!(err = ?e, path = %path.display(), "an error occurred when writing the export file"),
            )?;

            println!("exported {} quote(s) to {}.", quotes.len(), path.display());
        }
        None => println!("{raw}"),
    }

    Ok(())
}
