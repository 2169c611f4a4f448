use crate::models::quotes::Quote;

pub mod add;
pub mod categories;
pub mod export;
pub mod filter;
pub mod import;
pub mod list;
pub mod show;
pub mod status;
pub mod sync;

pub(crate) fn format_quote(quote: &Quote) -> String {
    format!("\"{}\" — {}", quote.text, quote.category)
}
