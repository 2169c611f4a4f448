use crate::models::quotes::Quote;
use crate::Data;

/// add a new quote to the store.
#[tracing::instrument(skip(data))]
pub fn run(data: &Data, text: &str, category: &str) -> anyhow::Result<()> {
    let text = text.trim();
    let category = category.trim();

    if text.is_empty() || category.is_empty() {
        anyhow::bail!("please provide both a quote and a category.");
    }

    let mut quotes = data.store.load()?;
    quotes.push(Quote::new(text, category));
    data.store.save(&quotes)?;

    println!("added quote \"{text}\" under category \"{category}\".");

    Ok(())
}
