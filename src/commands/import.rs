use std::path::Path;

use crate::models::quotes::Quote;
use crate::Data;

/// import quotes from a JSON array. imports are unconditionally additive:
/// there is no de-duplication, so importing the same export twice doubles
/// the list.
#[tracing::instrument(skip(data))]
pub fn run(data: &Data, path: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path).inspect_err(
        |e| tracing::error!(err = ?e, path = %path.display(), "an error occurred when reading the import file"),
    )?;

    let imported: Vec<Quote> = serde_json::from_str(&raw).inspect_err(
        |e| tracing::error!(err = ?e, "an error occurred when parsing the import file"),
    )?;

    let mut quotes = data.store.load()?;
    let mut added = 0usize;
    let mut skipped = 0usize;

    for quote in imported {
        if !quote.is_valid() {
            skipped += 1;
            continue;
        }

        quotes.push(quote);
        added += 1;
    }

    data.store.save(&quotes)?;

    if skipped > 0 {
        tracing::warn!(skipped, "skipped imported entries with empty text or category");
    }

    println!("imported {added} quote(s) from {}.", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::QuoteStore;

    fn test_data(dir: &tempfile::TempDir) -> Data {
        Data {
            reqwest_client: reqwest::Client::new(),
            store: QuoteStore::open(dir.path()).unwrap(),
            server_url: "http://localhost:0".to_string(),
            sync_interval: std::time::Duration::from_secs(60),
        }
    }

    #[test]
    fn importing_an_export_twice_doubles_the_list() {
        let dir = tempfile::tempdir().unwrap();
        let data = test_data(&dir);

        let original = vec![Quote::new("Q1", "A"), Quote::new("Q2", "B")];
        data.store.save(&original).unwrap();

        let export = dir.path().join("quotes-export.json");
        std::fs::write(&export, serde_json::to_string_pretty(&original).unwrap()).unwrap();

        run(&data, &export).unwrap();
        let after_one = data.store.load().unwrap();
        assert_eq!(after_one.len(), 4);
        assert_eq!(&after_one[..2], &original[..]);
        assert_eq!(&after_one[2..], &original[..]);

        run(&data, &export).unwrap();
        assert_eq!(data.store.load().unwrap().len(), 6);
    }

    #[test]
    fn invalid_entries_are_skipped_and_the_rest_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let data = test_data(&dir);

        data.store.save(&[]).unwrap();

        let export = dir.path().join("mixed.json");
        std::fs::write(
            &export,
            r#"[{"text": "Q1", "category": "A"}, {"text": "  ", "category": "B"}]"#,
        )
        .unwrap();

        run(&data, &export).unwrap();

        assert_eq!(data.store.load().unwrap(), vec![Quote::new("Q1", "A")]);
    }

    #[test]
    fn a_non_array_file_is_rejected_and_the_list_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let data = test_data(&dir);

        let before = vec![Quote::new("Q1", "A")];
        data.store.save(&before).unwrap();

        let export = dir.path().join("bad.json");
        std::fs::write(&export, r#"{"text": "Q2", "category": "B"}"#).unwrap();

        assert!(run(&data, &export).is_err());
        assert_eq!(data.store.load().unwrap(), before);
    }
}
