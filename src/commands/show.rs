use rand::seq::SliceRandom;

use crate::commands::format_quote;
use crate::models::quotes::filter_by_category;
use crate::Data;

/// show a random quote, remembering it as the last viewed one. an explicit
/// category wins over the saved filter; --all ignores both.
#[tracing::instrument(skip(data))]
pub fn run(data: &Data, category: Option<String>, all: bool, last: bool) -> anyhow::Result<()> {
    let quotes = data.store.load()?;
    let mut state = data.store.load_state();

    if last {
        if let Some(quote) = &state.last_viewed {
            println!("{}", format_quote(quote));

            return Ok(());
        }

        tracing::warn!("no last viewed quote recorded. picking a random one.");
    }

    let filter = if all {
        None
    } else {
        category.or_else(|| state.last_filter.clone())
    };

    let filtered = filter_by_category(&quotes, filter.as_deref());

    match filtered.choose(&mut rand::thread_rng()) {
        Some(quote) => {
            println!("{}", format_quote(quote));

            state.last_viewed = Some((*quote).clone());
            data.store.save_state(&state)?;
        }
        None => println!("no quotes available for this category."),
    }

    Ok(())
}
