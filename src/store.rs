use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::constants::DEFAULT_QUOTES;
use crate::models::quotes::Quote;

const QUOTES_FILE: &str = "quotes.json";
const STATE_FILE: &str = "state.json";

/// session leftovers: the last viewed quote, the saved category filter and
/// the time of the last successful sync.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SessionState {
    pub last_viewed: Option<Quote>,
    pub last_filter: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_synced: Option<OffsetDateTime>,
}

/// whole-list JSON persistence. every mutation rewrites the entire file;
/// there is no partial update and no locking.
#[derive(Clone, Debug)]
pub struct QuoteStore {
    data_dir: PathBuf,
}

impl QuoteStore {
    pub fn open(data_dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let data_dir = data_dir.into();

        fs::create_dir_all(&data_dir).inspect_err(
            |e| tracing::error!(err = ?e, dir = %data_dir.display(), "an error occurred when creating the data directory"),
        )?;

        Ok(Self { data_dir })
    }

    pub fn quotes_path(&self) -> PathBuf {
        self.data_dir.join(QUOTES_FILE)
    }

    fn state_path(&self) -> PathBuf {
        self.data_dir.join(STATE_FILE)
    }

    /// load the whole quote list. a missing file seeds the default quotes;
    /// a corrupt one starts over from an empty list.
    pub fn load(&self) -> anyhow::Result<Vec<Quote>> {
        let path = self.quotes_path();

        if !path.exists() {
            tracing::info!("no quote store found. seeding default quotes.");
            let quotes = DEFAULT_QUOTES.clone();
            self.save(&quotes)?;

            return Ok(quotes);
        }

        let raw = fs::read_to_string(&path).inspect_err(
            |e| tracing::error!(err = ?e, path = %path.display(), "an error occurred when reading the quote store"),
        )?;

        match serde_json::from_str::<Vec<Quote>>(&raw) {
            Ok(quotes) => Ok(quotes),
            Err(e) => {
                tracing::error!(err = ?e, "an error occurred when parsing stored quotes. starting from an empty list.");
                Ok(Vec::new())
            }
        }
    }

    pub fn save(&self, quotes: &[Quote]) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(quotes)?;

        fs::write(self.quotes_path(), raw).inspect_err(
            |e| tracing::error!(err = ?e, "an error occurred when writing the quote store"),
        )?;

        Ok(())
    }

    /// session state is best-effort: anything unreadable degrades to the
    /// defaults instead of failing the command.
    pub fn load_state(&self) -> SessionState {
        let raw = match fs::read_to_string(self.state_path()) {
            Ok(raw) => raw,
            Err(_) => return SessionState::default(),
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(err = ?e, "an error occurred when parsing session state. starting fresh.");
            SessionState::default()
        })
    }

    pub fn save_state(&self, state: &SessionState) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(state)?;

        fs::write(self.state_path(), raw).inspect_err(
            |e| tracing::error!(err = ?e, "an error occurred when writing session state"),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_store(dir: &tempfile::TempDir) -> QuoteStore {
        QuoteStore::open(dir.path()).unwrap()
    }

    #[test]
    fn missing_store_seeds_the_default_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let quotes = store.load().unwrap();

        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].category, "Motivation");
        assert!(store.quotes_path().exists());

        // a second load reads the seeded file back unchanged.
        assert_eq!(store.load().unwrap(), quotes);
    }

    #[test]
    fn corrupt_store_yields_an_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        fs::write(store.quotes_path(), "not json {{{").unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let quotes = vec![
            Quote::new("first", "A"),
            Quote::new("second", "B"),
            Quote::new("third", "A"),
        ];

        store.save(&quotes).unwrap();

        assert_eq!(store.load().unwrap(), quotes);
    }

    #[test]
    fn session_state_round_trips_and_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        assert_eq!(store.load_state(), SessionState::default());

        let state = SessionState {
            last_viewed: Some(Quote::new("first", "A")),
            last_filter: Some("A".to_string()),
            last_synced: Some(OffsetDateTime::UNIX_EPOCH),
        };

        store.save_state(&state).unwrap();
        assert_eq!(store.load_state(), state);

        fs::write(dir.path().join(STATE_FILE), "garbage").unwrap();
        assert_eq!(store.load_state(), SessionState::default());
    }
}
