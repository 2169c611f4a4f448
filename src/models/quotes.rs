use serde::{Deserialize, Serialize};

/// a stored quote. there is no identifier; merging treats two quotes as the
/// same entry when their texts match exactly, whatever their categories say.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// a quote is storable only when both fields survive trimming.
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty() && !self.category.trim().is_empty()
    }
}

/// the quotes whose category equals the selected one; no selection means all.
pub fn filter_by_category<'a>(quotes: &'a [Quote], category: Option<&str>) -> Vec<&'a Quote> {
    match category {
        Some(category) => quotes
            .iter()
            .filter(|quote| quote.category == category)
            .collect(),
        None => quotes.iter().collect(),
    }
}

/// distinct categories in first-seen order.
pub fn distinct_categories(quotes: &[Quote]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();

    for quote in quotes {
        if !categories.contains(&quote.category) {
            categories.push(quote.category.clone());
        }
    }

    categories
}
