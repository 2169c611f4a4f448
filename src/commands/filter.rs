use crate::models::quotes::distinct_categories;
use crate::Data;

/// show, set or clear the category filter that `show` defaults to.
#[tracing::instrument(skip(data))]
pub fn run(data: &Data, category: Option<String>, clear: bool) -> anyhow::Result<()> {
    let mut state = data.store.load_state();

    if clear {
        state.last_filter = None;
        data.store.save_state(&state)?;

        println!("cleared the saved category filter.");

        return Ok(());
    }

    match category {
        Some(category) => {
            let quotes = data.store.load()?;

            // an unknown category is saved anyway; `show` will just report
            // an empty selection until a matching quote appears.
            if !distinct_categories(&quotes).contains(&category) {
                tracing::warn!(category = %category, "no stored quote has this category yet.");
            }

            println!("saved category filter \"{category}\".");

            state.last_filter = Some(category);
            data.store.save_state(&state)?;
        }
        None => match &state.last_filter {
            Some(category) => println!("current category filter: \"{category}\"."),
            None => println!("no category filter saved. showing all categories."),
        },
    }

    Ok(())
}
