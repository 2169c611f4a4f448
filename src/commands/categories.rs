use crate::models::quotes::distinct_categories;
use crate::Data;

/// list the distinct categories, first-seen order.
#[tracing::instrument(skip_all)]
pub fn run(data: &Data) -> anyhow::Result<()> {
    let quotes = data.store.load()?;
    let categories = distinct_categories(&quotes);

    if categories.is_empty() {
        println!("no categories found in the store!");

        return Ok(());
    }

    for category in categories {
        println!("{category}");
    }

    Ok(())
}
