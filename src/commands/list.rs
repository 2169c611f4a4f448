use crate::commands::format_quote;
use crate::models::quotes::filter_by_category;
use crate::Data;

/// list stored quotes in order, numbered.
#[tracing::instrument(skip(data))]
pub fn run(data: &Data, category: Option<&str>) -> anyhow::Result<()> {
    let quotes = data.store.load()?;
    let selected = filter_by_category(&quotes, category);

    if selected.is_empty() {
        println!("no quotes found in the store!");

        return Ok(());
    }

    for (idx, quote) in selected.iter().enumerate() {
        println!("{}. {}", idx + 1, format_quote(quote));
    }

    Ok(())
}
