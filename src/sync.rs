use time::OffsetDateTime;

use crate::constants::SERVER_FETCH_LIMIT;
use crate::models::quotes::Quote;
use crate::models::server::ServerPost;
use crate::Data;

/// what a single reconciliation pass did to the local list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub fetched: usize,
    pub added: usize,
    pub conflicts: usize,
    pub skipped: usize,
}

/// fetch the server list, merge it into the local one and push the result
/// back. the merged list is saved before the push, so a failing push never
/// loses a merge.
#[tracing::instrument(skip_all)]
pub async fn sync_quotes(data: &Data) -> anyhow::Result<SyncReport> {
    tracing::info!("started syncing quotes with the server!");

    let mut quotes = data.store.load()?;
    let fetched = fetch_server_quotes(data).await?;

    let report = merge_server_quotes(&mut quotes, fetched);

    data.store.save(&quotes)?;

    let mut state = data.store.load_state();
    state.last_synced = Some(OffsetDateTime::now_utc());
    data.store.save_state(&state)?;

    if let Err(e) = push_quotes(data, &quotes).await {
        tracing::warn!(err = ?e, "an error occurred when pushing quotes to the server");
    }

    tracing::info!(
        fetched = report.fetched,
        added = report.added,
        conflicts = report.conflicts,
        "finished syncing quotes with the server!"
    );

    Ok(report)
}

async fn fetch_server_quotes(data: &Data) -> anyhow::Result<Vec<Quote>> {
    let res = data
        .reqwest_client
        .get(&data.server_url)
        .send()
        .await
        .inspect_err(
            |e| tracing::error!(err = ?e, "an error occurred when fetching quotes from the server"),
        )?;

    let posts: Vec<ServerPost> = res.json().await.inspect_err(
        |e| tracing::error!(err = ?e, "an error occurred when decoding the server response"),
    )?;

    Ok(posts
        .into_iter()
        .take(SERVER_FETCH_LIMIT)
        .map(Quote::from)
        .collect())
}

/// single linear pass over the fetched quotes: an exact text match keeps the
/// local quote and counts a conflict, anything else is appended. entries
/// with empty text or category are skipped.
pub fn merge_server_quotes(quotes: &mut Vec<Quote>, fetched: Vec<Quote>) -> SyncReport {
    let mut report = SyncReport {
        fetched: fetched.len(),
        ..Default::default()
    };

    for remote in fetched {
        if !remote.is_valid() {
            report.skipped += 1;
            continue;
        }

        if quotes.iter().any(|local| local.text == remote.text) {
            report.conflicts += 1;
        } else {
            quotes.push(remote);
            report.added += 1;
        }
    }

    report
}

async fn push_quotes(data: &Data, quotes: &[Quote]) -> anyhow::Result<()> {
    data.reqwest_client
        .post(&data.server_url)
        .json(&quotes)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_text_keeps_the_local_quote_and_counts_a_conflict() {
        let mut quotes = vec![Quote::new("Q1", "A")];
        let fetched = vec![Quote::new("Q1", "B")];

        let report = merge_server_quotes(&mut quotes, fetched);

        assert_eq!(quotes, vec![Quote::new("Q1", "A")]);
        assert_eq!(report.conflicts, 1);
        assert_eq!(report.added, 0);
    }

    #[test]
    fn unknown_quotes_are_appended_in_fetch_order() {
        let mut quotes = vec![Quote::new("Q1", "A")];
        let fetched = vec![Quote::new("Q2", "Server"), Quote::new("Q3", "Server")];

        let report = merge_server_quotes(&mut quotes, fetched);

        assert_eq!(
            quotes,
            vec![
                Quote::new("Q1", "A"),
                Quote::new("Q2", "Server"),
                Quote::new("Q3", "Server"),
            ]
        );
        assert_eq!(report.added, 2);
        assert_eq!(report.conflicts, 0);
    }

    #[test]
    fn duplicates_within_one_fetch_conflict_against_the_first_copy() {
        let mut quotes = Vec::new();
        let fetched = vec![Quote::new("Q1", "Server"), Quote::new("Q1", "Server")];

        let report = merge_server_quotes(&mut quotes, fetched);

        assert_eq!(quotes.len(), 1);
        assert_eq!(report.added, 1);
        assert_eq!(report.conflicts, 1);
    }

    #[test]
    fn invalid_entries_are_skipped_without_touching_the_list() {
        let mut quotes = vec![Quote::new("Q1", "A")];
        let fetched = vec![Quote::new("", "Server"), Quote::new("   ", "Server")];

        let report = merge_server_quotes(&mut quotes, fetched);

        assert_eq!(quotes.len(), 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.added, 0);
        assert_eq!(report.conflicts, 0);
    }

    #[test]
    fn an_empty_fetch_changes_nothing() {
        let mut quotes = vec![Quote::new("Q1", "A")];

        let report = merge_server_quotes(&mut quotes, Vec::new());

        assert_eq!(quotes.len(), 1);
        assert_eq!(report, SyncReport::default());
    }
}
